//! Category and search filtering over the fetched item set.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Entry, UnknownCategory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

/// `term` must already be lowercased; an empty term matches everything.
pub fn matches_search(entry: &Entry, term: &str) -> bool {
    term.is_empty()
        || entry.name.to_lowercase().contains(term)
        || entry.category.as_str().contains(term)
        || entry
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(term))
}

pub fn apply<'a>(items: &'a [Entry], filter: CategoryFilter, term: &str) -> Vec<&'a Entry> {
    items
        .iter()
        .filter(|entry| filter.matches(entry) && matches_search(entry, term))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::catalog;
    use super::*;

    fn names<'a>(items: &[&'a Entry]) -> Vec<&'a str> {
        items.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn all_with_empty_search_keeps_everything() {
        let items = catalog();
        assert_eq!(apply(&items, CategoryFilter::All, "").len(), items.len());
    }

    #[test]
    fn category_and_search_are_combined() {
        let items = catalog();
        let visible = apply(&items, CategoryFilter::Only(Category::Videos), "e3");
        assert_eq!(names(&visible), vec!["E3 Trailer.mp4", "Gameplay Reveal.mkv"]);
    }

    #[test]
    fn search_matches_category_label() {
        let items = catalog();
        let visible = apply(&items, CategoryFilter::All, "soundtrack");
        assert_eq!(names(&visible), vec!["Main Theme.flac"]);
    }

    #[test]
    fn no_match_yields_nothing() {
        let items = catalog();
        assert!(apply(&items, CategoryFilter::Only(Category::Maps), "texture").is_empty());
    }

    #[test]
    fn filter_parses_all_and_categories() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "mods".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Mods))
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Only(Category::Maps).to_string(), "maps");
    }
}
