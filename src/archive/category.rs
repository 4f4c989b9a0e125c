//! Extension → category lookup.
//!
//! The table is matched case-insensitively on the extension without its dot.
//! Archive formats are grouped with mods; anything unmatched is a document.

use std::path::Path;

use crate::models::Category;

const CATEGORY_EXTENSIONS: &[(Category, &[&str])] = &[
    (Category::Images, &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico"]),
    (Category::Videos, &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm"]),
    (Category::Documents, &["pdf", "doc", "docx", "txt", "rtf", "odt"]),
    (Category::Soundtracks, &["mp3", "wav", "flac", "aac", "ogg", "m4a"]),
    (Category::Mods, &["mod", "dll", "exe"]),
    (Category::Maps, &["map", "bsp"]),
];

const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz"];

/// Lowercased extension of `file_name`, if it has one.
fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
}

pub fn classify(file_name: &str) -> Category {
    let Some(ext) = extension(file_name) else {
        return Category::Documents;
    };

    CATEGORY_EXTENSIONS
        .iter()
        .find(|(_, exts)| exts.contains(&ext.as_str()))
        .map(|(category, _)| *category)
        .or_else(|| ARCHIVE_EXTENSIONS.contains(&ext.as_str()).then_some(Category::Mods))
        .unwrap_or(Category::Documents)
}

/// Uppercase extension shown on file cards, `FILE` when there is none.
pub fn extension_label(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "FILE".to_string())
}
