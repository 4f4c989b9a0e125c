//! Browser UI state, independent of any DOM.
//!
//! Holds the last fetched listing, the active category filter, and the
//! search term. Filtering and rendering are pure functions of that state.
//! Clicks are reported through a callback so the caller decides how to
//! present them (a browser prompt, a terminal line, a test assertion).
//!
//! - `filter`: Category/search matching
//! - `breadcrumbs`: Navigation trail for the current path
//! - `render`: Cards, icons, empty state

pub mod breadcrumbs;
pub mod filter;
pub mod render;

use std::fmt;

use crate::archive::Archive;
use crate::error::Result;
use crate::models::{Entry, Listing};
use breadcrumbs::Crumb;

pub use breadcrumbs::breadcrumbs;
pub use filter::CategoryFilter;
pub use render::{count_label, View};

/// Where listings come from.
pub trait ListingSource {
    fn fetch(&self, path: &str) -> Result<Listing>;
}

impl ListingSource for Archive {
    fn fetch(&self, path: &str) -> Result<Listing> {
        self.list(path)
    }
}

/// Metadata shown when a file card is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDetails {
    pub name: String,
    pub file_type: String,
    pub size: String,
    pub date: String,
    pub path: String,
}

impl From<&Entry> for FileDetails {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            file_type: entry.file_type.clone().unwrap_or_else(|| "File".to_string()),
            size: entry.size.clone(),
            date: entry.date.clone(),
            path: entry.path.clone(),
        }
    }
}

impl fmt::Display for FileDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\nType: {}\nSize: {}\nDate: {}\nPath: {}",
            self.name, self.file_type, self.size, self.date, self.path
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A folder was opened; carries the new current path
    Navigated(String),
    FileSelected(FileDetails),
}

#[derive(Debug, Default)]
pub struct UiState {
    items: Vec<Entry>,
    current_path: String,
    filter: CategoryFilter,
    search: String,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a fixed item set instead of a fetched listing.
    pub fn with_items(items: Vec<Entry>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_lowercase();
    }

    /// Replaces the item set with the listing for `path`.
    ///
    /// On failure the item set is cleared and the current path is left as
    /// it was, so the grid shows the empty state.
    pub fn navigate<S: ListingSource + ?Sized>(&mut self, source: &S, path: &str) -> bool {
        match source.fetch(path) {
            Ok(listing) => {
                self.items = listing.items;
                self.current_path = listing.current_path;
                true
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "error fetching files");
                self.items.clear();
                false
            }
        }
    }

    /// Opens a folder or reports a file's details.
    ///
    /// Paths that are not in the current item set are ignored.
    pub fn click<S, F>(&mut self, source: &S, path: &str, mut on_event: F)
    where
        S: ListingSource + ?Sized,
        F: FnMut(UiEvent),
    {
        let Some(entry) = self.items.iter().find(|e| e.path == path) else {
            return;
        };

        if entry.is_folder() {
            let target = entry.path.clone();
            if self.navigate(source, &target) {
                on_event(UiEvent::Navigated(self.current_path.clone()));
            }
        } else {
            on_event(UiEvent::FileSelected(FileDetails::from(entry)));
        }
    }

    pub fn visible(&self) -> Vec<&Entry> {
        filter::apply(&self.items, self.filter, &self.search)
    }

    pub fn render(&self) -> View {
        View::from_visible(&self.visible())
    }

    pub fn count_label(&self) -> String {
        count_label(self.visible().len())
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        breadcrumbs(&self.current_path)
    }
}

#[cfg(test)]
mod tests {
    use super::filter::fixtures::catalog;
    use super::*;
    use crate::models::Category;
    use std::fs;
    use tempfile::TempDir;

    fn archive() -> (TempDir, Archive) {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("mods/graphics")).unwrap();
        fs::write(tmp.path().join("mods/graphics/hd.zip"), b"zip").unwrap();
        fs::write(tmp.path().join("intro.mp4"), vec![0u8; 2048]).unwrap();
        let archive = Archive::new(tmp.path());
        (tmp, archive)
    }

    #[test]
    fn filtering_a_catalog_without_a_dom() {
        let mut state = UiState::with_items(catalog());
        state.set_filter(CategoryFilter::Only(Category::Videos));
        state.set_search("  E3 ");

        assert_eq!(state.search(), "e3");
        assert_eq!(state.count_label(), "2 items");

        state.set_filter(CategoryFilter::Only(Category::Maps));
        state.set_search("trailer");
        assert_eq!(state.count_label(), "0 items");
        assert!(matches!(state.render(), View::Empty { .. }));
    }

    #[test]
    fn navigating_into_folders_updates_breadcrumbs() {
        let (_tmp, archive) = archive();
        let mut state = UiState::new();
        assert!(state.navigate(&archive, ""));
        assert_eq!(state.items().len(), 2);

        let mut events = Vec::new();
        state.click(&archive, "mods", |e| events.push(e));
        state.click(&archive, "mods/graphics", |e| events.push(e));

        assert_eq!(
            events,
            vec![
                UiEvent::Navigated("mods".into()),
                UiEvent::Navigated("mods/graphics".into())
            ]
        );
        let labels: Vec<_> = state.breadcrumbs().into_iter().map(|c| c.path).collect();
        assert_eq!(labels, vec!["", "mods", "mods/graphics"]);
        assert_eq!(state.items()[0].name, "hd.zip");
    }

    #[test]
    fn clicking_a_file_emits_its_details() {
        let (_tmp, archive) = archive();
        let mut state = UiState::new();
        state.navigate(&archive, "");

        let mut selected = None;
        state.click(&archive, "intro.mp4", |e| selected = Some(e));

        let Some(UiEvent::FileSelected(details)) = selected else {
            panic!("expected a file selection");
        };
        assert_eq!(details.file_type, "MP4");
        assert_eq!(details.size, "2 KB");
        assert!(details.to_string().starts_with("intro.mp4\n\nType: MP4\nSize: 2 KB"));
        assert_eq!(state.current_path(), "");
    }

    #[test]
    fn failed_fetch_clears_items() {
        let (_tmp, archive) = archive();
        let mut state = UiState::new();
        state.navigate(&archive, "");
        assert!(!state.items().is_empty());

        assert!(!state.navigate(&archive, "../outside"));
        assert!(state.items().is_empty());
        assert_eq!(state.count_label(), "0 items");
        assert!(matches!(state.render(), View::Empty { .. }));
    }

    #[test]
    fn unknown_click_targets_are_ignored() {
        let mut state = UiState::with_items(catalog());
        let (_tmp, archive) = archive();
        let mut fired = false;
        state.click(&archive, "does/not/exist", |_| fired = true);
        assert!(!fired);
    }
}
