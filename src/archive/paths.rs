//! Lexical path resolution and the containment check.
//!
//! Requested paths are opaque strings from the client. They are resolved
//! against the archive root without touching the filesystem: `.` is dropped,
//! `..` pops one component (possibly one of the root's own), and a leading separator never makes the request
//! absolute. Symlinks are not followed.

use std::path::{Component, Path, PathBuf};

/// A requested path that stayed inside the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Absolute path on disk
    pub absolute: PathBuf,
    /// POSIX-style path relative to the root, empty for the root itself
    pub relative: String,
}

/// Makes `root` absolute and removes `.`/`..` components lexically.
pub fn normalize_root(root: &Path) -> PathBuf {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolves `requested` under `root`.
///
/// Segments are applied to the root's own components, so `..` may climb
/// above the root as long as the final path lands back inside it. Returns
/// `None` when the result is not `root` or a descendant of it. `root` must
/// already be normalized.
pub fn resolve(root: &Path, requested: &str) -> Option<ResolvedPath> {
    let mut absolute = root.to_path_buf();

    for segment in requested.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                absolute.pop();
            }
            name => {
                // Drive prefixes and the like are never valid inside the archive
                let mut parts = Path::new(name).components();
                match (parts.next(), parts.next()) {
                    (Some(Component::Normal(_)), None) => absolute.push(name),
                    _ => return None,
                }
            }
        }
    }

    let relative = absolute
        .strip_prefix(root)
        .ok()?
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Some(ResolvedPath { absolute, relative })
}

/// POSIX join used for entry paths in a listing.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        normalize_root(Path::new("/srv/archive"))
    }

    #[test]
    fn empty_request_is_the_root() {
        let resolved = resolve(&root(), "").unwrap();
        assert_eq!(resolved.absolute, root());
        assert_eq!(resolved.relative, "");
    }

    #[test]
    fn nested_request_is_normalized() {
        let resolved = resolve(&root(), "./mods//graphics/").unwrap();
        assert_eq!(resolved.absolute, root().join("mods").join("graphics"));
        assert_eq!(resolved.relative, "mods/graphics");
    }

    #[test]
    fn parent_segments_inside_root_are_allowed() {
        let resolved = resolve(&root(), "mods/../maps").unwrap();
        assert_eq!(resolved.relative, "maps");
    }

    #[test]
    fn escaping_the_root_is_rejected() {
        assert_eq!(resolve(&root(), "../../etc"), None);
        assert_eq!(resolve(&root(), ".."), None);
        assert_eq!(resolve(&root(), "mods/../../archive2"), None);
        assert_eq!(resolve(&root(), "..\\secret"), None);
    }

    #[test]
    fn climbing_out_and_back_in_is_allowed() {
        let resolved = resolve(&root(), "../archive/mods").unwrap();
        assert_eq!(resolved.absolute, root().join("mods"));
        assert_eq!(resolved.relative, "mods");

        let resolved = resolve(&root(), "../../srv/archive").unwrap();
        assert_eq!(resolved.relative, "");
    }

    #[test]
    fn filesystem_root_admits_any_path() {
        let fs_root = normalize_root(Path::new("/"));
        let resolved = resolve(&fs_root, "../etc").unwrap();
        assert_eq!(resolved.absolute, PathBuf::from("/etc"));
        assert_eq!(resolved.relative, "etc");
    }

    #[test]
    fn leading_separator_stays_under_root() {
        let resolved = resolve(&root(), "/etc").unwrap();
        assert_eq!(resolved.absolute, root().join("etc"));
    }

    #[test]
    fn normalize_root_collapses_dots() {
        assert_eq!(
            normalize_root(Path::new("/srv/./data/../archive")),
            PathBuf::from("/srv/archive")
        );
    }

    #[test]
    fn join_relative_handles_root() {
        assert_eq!(join_relative("", "a.txt"), "a.txt");
        assert_eq!(join_relative("mods", "a.txt"), "mods/a.txt");
    }
}
