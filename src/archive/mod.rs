//! The listing service: one archive root, listed one directory at a time.
//!
//! - `paths`: Lexical resolution and containment check
//! - `category`: Extension → category table
//! - `size`: Human-readable byte sizes
//!
//! Every listing is computed fresh from the filesystem; nothing is cached
//! between requests.

pub mod category;
pub mod paths;
pub mod size;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Category, Entry, EntryKind, Listing};

pub use category::{classify, extension_label};
pub use paths::ResolvedPath;
pub use size::format_size;

pub struct Archive {
    root: PathBuf,
}

impl Archive {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: paths::normalize_root(root.as_ref()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn root_exists(&self) -> bool {
        self.root.exists()
    }

    /// Lists the direct children of `requested`, folders first.
    ///
    /// The containment check runs before any filesystem access, so a
    /// rejected path is never read.
    pub fn list(&self, requested: &str) -> Result<Listing> {
        let Some(resolved) = paths::resolve(&self.root, requested) else {
            tracing::warn!(path = requested, "rejected path outside archive root");
            return Err(AppError::AccessDenied {
                path: requested.to_string(),
            });
        };

        if !self.root.exists() {
            return Err(AppError::RootNotFound {
                root: self.root.to_string_lossy().to_string(),
                path: requested.to_string(),
            });
        }

        if !resolved.absolute.exists() {
            return Err(AppError::PathNotFound {
                path: requested.to_string(),
            });
        }

        let mut items = read_entries(&resolved).map_err(|e| {
            tracing::warn!(path = requested, error = %e, "failed to read directory");
            AppError::ListingFailed {
                path: requested.to_string(),
                message: e.to_string(),
            }
        })?;

        sort_entries(&mut items);
        tracing::debug!(path = %resolved.relative, count = items.len(), "listed directory");

        Ok(Listing {
            items,
            current_path: resolved.relative,
        })
    }
}

pub type SharedArchive = Arc<Archive>;

fn read_entries(dir: &ResolvedPath) -> std::io::Result<Vec<Entry>> {
    let mut items = Vec::new();

    for entry in fs::read_dir(&dir.absolute)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let name = entry.file_name().to_string_lossy().to_string();
        let path = paths::join_relative(&dir.relative, &name);

        if file_type.is_dir() {
            let metadata = entry.metadata()?;
            items.push(Entry {
                name,
                kind: EntryKind::Folder,
                category: Category::Folder,
                path,
                size: "-".to_string(),
                date: format_date(metadata.modified()?)?,
                file_type: None,
                description: None,
            });
        } else if file_type.is_file() {
            let metadata = entry.metadata()?;
            items.push(Entry {
                category: classify(&name),
                file_type: Some(extension_label(&name)),
                kind: EntryKind::File,
                path,
                size: format_size(metadata.len()),
                date: format_date(metadata.modified()?)?,
                name,
                description: None,
            });
        }
    }

    Ok(items)
}

/// `YYYY-MM-DD` in UTC. Timestamps chrono cannot represent are an error.
fn format_date(modified: SystemTime) -> io::Result<String> {
    let (secs, nanos) = match modified.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok(), after.subsec_nanos()),
        Err(before) => {
            let before = before.duration();
            let secs = i64::try_from(before.as_secs()).ok();
            match before.subsec_nanos() {
                0 => (secs.map(|s| -s), 0),
                n => (secs.and_then(|s| s.checked_add(1)).map(|s| -s), 1_000_000_000 - n),
            }
        }
    };

    secs.and_then(|s| DateTime::<Utc>::from_timestamp(s, nanos))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "modification time out of range"))
}

/// Folders before files, then case-insensitive by name.
///
/// Not a full locale collation: names are compared by their lowercase
/// form, so punctuation and accented letters sort by code point.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}
