//! View model for the file grid: cards, icons, and the empty state.

use std::fmt;

use crate::models::{Category, Entry, EntryKind};

const FOLDER_ICON: &str = "📁";

const CATEGORY_ICONS: &[(Category, &str)] = &[
    (Category::Images, "🖼️"),
    (Category::Videos, "🎬"),
    (Category::Documents, "📄"),
    (Category::Maps, "🗺️"),
    (Category::Mods, "⚙️"),
    (Category::Soundtracks, "🎵"),
    (Category::Folder, FOLDER_ICON),
];

pub const EMPTY_MESSAGE: &str = "No files found matching your criteria.";

pub fn icon_for(category: Category) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(FOLDER_ICON)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub name: String,
    /// `<file type or kind> • <size>`
    pub info: String,
    pub kind: EntryKind,
    pub category: Category,
    pub path: String,
    /// Images and videos get a preview-styled thumbnail
    pub has_preview: bool,
}

impl Card {
    pub fn from_entry(entry: &Entry) -> Self {
        let type_label = entry
            .file_type
            .as_deref()
            .unwrap_or_else(|| entry.kind.as_str());

        Self {
            icon: icon_for(entry.category),
            name: entry.name.clone(),
            info: format!("{} • {}", type_label, entry.size),
            kind: entry.kind,
            category: entry.category,
            path: entry.path.clone(),
            has_preview: matches!(entry.category, Category::Images | Category::Videos),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Empty { message: &'static str },
    Grid(Vec<Card>),
}

impl View {
    pub fn from_visible(visible: &[&Entry]) -> Self {
        if visible.is_empty() {
            View::Empty {
                message: EMPTY_MESSAGE,
            }
        } else {
            View::Grid(visible.iter().map(|e| Card::from_entry(e)).collect())
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Empty { message } => writeln!(f, "{}", message),
            View::Grid(cards) => {
                for card in cards {
                    writeln!(f, "{}  {:<40} {}", card.icon, card.name, card.info)?;
                }
                Ok(())
            }
        }
    }
}

pub fn count_label(count: usize) -> String {
    format!("{} item{}", count, if count == 1 { "" } else { "s" })
}
