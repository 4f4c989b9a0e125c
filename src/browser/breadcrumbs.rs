//! Breadcrumb trail for the current listing path.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Path to navigate to when the crumb is clicked
    pub path: String,
}

pub const ROOT_LABEL: &str = "Archive";

/// Root crumb followed by one crumb per path prefix.
pub fn breadcrumbs(current_path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: ROOT_LABEL.to_string(),
        path: String::new(),
    }];

    let mut accumulated = String::new();
    for part in current_path.split('/').filter(|p| !p.is_empty()) {
        if !accumulated.is_empty() {
            accumulated.push('/');
        }
        accumulated.push_str(part);
        crumbs.push(Crumb {
            label: part.to_string(),
            path: accumulated.clone(),
        });
    }

    crumbs
}
