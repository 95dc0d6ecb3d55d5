//! Classification of locale files and noise directories.

use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;

/// Directory names that never contain translation assets worth indexing.
pub const EXCLUDED_DIR_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "out",
    ".idea",
    ".gradle",
];

/// Two-letter language code, optional region suffix, `.json` extension.
///
/// The case-insensitive flag covers the whole pattern, so `EN.JSON` and
/// `en-us.json` both match.
static LOCALE_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]{2}(-[a-z]{2})?\.json$").unwrap());

/// Checks if a file name looks like a locale file (`en.json`, `fr-FR.json`).
///
/// # Examples
///
/// ```
/// use transkey::core::classify::is_locale_file_name;
///
/// assert!(is_locale_file_name("en.json"));
/// assert!(is_locale_file_name("en-US.json"));
/// assert!(!is_locale_file_name("en_US.json"));
/// assert!(!is_locale_file_name("messages.json"));
/// ```
pub fn is_locale_file_name(name: &str) -> bool {
    LOCALE_FILE_REGEX.is_match(name)
}

/// Checks the final component of `path` against [`is_locale_file_name`].
pub fn is_locale_file_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_locale_file_name)
}

/// Checks a single path segment against the fixed exclusion set.
///
/// Matches whole segments only: `build` is excluded, `builder` is not.
pub fn is_excluded_directory_name(name: &str) -> bool {
    EXCLUDED_DIR_NAMES.contains(&name)
}

/// A directory qualifies when it exists, is non-empty and every direct child
/// is a locale file.
///
/// A single README or helper file next to the locale files disqualifies the
/// directory.
pub fn is_non_empty_translation_directory(path: &Path) -> bool {
    let Ok(entries) = fs::read_dir(path) else {
        return false;
    };

    let mut seen_any = false;
    for entry in entries {
        let Ok(entry) = entry else {
            return false;
        };
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            return false;
        };
        if !is_locale_file_name(name) {
            return false;
        }
        seen_any = true;
    }
    seen_any
}
