//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Converts a path to its OS-independent form (forward slashes only).
///
/// # Examples
///
/// ```
/// use transkey::utils::to_system_independent;
///
/// assert_eq!(to_system_independent("src\\assets\\i18n"), "src/assets/i18n");
/// assert_eq!(to_system_independent("/app/i18n"), "/app/i18n");
/// ```
pub fn to_system_independent(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Lexically normalizes `path` against `base`.
///
/// Relative paths are joined onto `base`, `.` segments are dropped and `..`
/// segments pop their parent. The filesystem is not consulted, so symlinks are
/// left as written.
pub fn normalize_path(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
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

/// Normalizes `path` against `base` and renders it in slash form.
///
/// This is the canonical identity of a translation directory: two spellings of
/// the same directory produce the same string.
pub fn normalize_dir(base: &Path, path: impl AsRef<Path>) -> String {
    let normalized = to_system_independent(normalize_path(base, path));
    if normalized.len() > 1 {
        normalized.trim_end_matches('/').to_string()
    } else {
        normalized
    }
}

/// Removes duplicates while keeping the first occurrence of each item.
pub fn dedup_ordered<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
