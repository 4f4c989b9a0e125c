//! Directory listing DTOs.
//!
//! - `Entry`: One file or folder in a listing (one card in the grid)
//! - `EntryKind`: folder | file, serialized as `type`
//! - `Category`: Coarse content label derived from the file extension
//! - `Listing`: Sorted entries for one directory plus its relative path
//!
//! Used by: GET /api/files and the browser UI state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Folder => "folder",
            EntryKind::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Images,
    Videos,
    Documents,
    Soundtracks,
    Mods,
    Maps,
    Folder,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Images,
        Category::Videos,
        Category::Documents,
        Category::Soundtracks,
        Category::Mods,
        Category::Maps,
        Category::Folder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Documents => "documents",
            Category::Soundtracks => "soundtracks",
            Category::Mods => "mods",
            Category::Maps => "maps",
            Category::Folder => "folder",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: Category,
    /// POSIX-style path relative to the archive root
    pub path: String,
    /// Human-readable size, `-` for folders
    pub size: String,
    /// Modification date as `YYYY-MM-DD`
    pub date: String,
    /// Uppercase extension or `FILE`; absent for folders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Only set by static catalogs, never by live listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entry {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub items: Vec<Entry>,
    pub current_path: String,
}

/// Success body for GET /api/files
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub items: Vec<Entry>,
    pub current_path: String,
    pub success: bool,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            items: listing.items,
            current_path: listing.current_path,
            success: true,
        }
    }
}
