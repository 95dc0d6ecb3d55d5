use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::utils::to_system_independent;

/// A dot-separated path naming a leaf value, e.g. `"home.title"`.
pub type TranslationKey = String;

/// Position of a key definition inside a locale file.
///
/// Used by navigation features to jump from a key usage to its definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyLocation {
    /// Path to the locale file in slash form (e.g., "/app/src/assets/i18n/en.json").
    pub file_path: String,
    /// Line number (1-indexed) of the last key segment.
    pub line: usize,
    /// Column number (1-indexed) of the last key segment's opening quote.
    pub col: usize,
    /// Display text of the leaf value.
    pub value: String,
}

impl KeyLocation {
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
            value: value.into(),
        }
    }
}

impl fmt::Display for KeyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.col)
    }
}

/// A locale file found inside a translation directory.
///
/// The index only reads these files; it never owns or rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleFile {
    pub path: PathBuf,
    /// Locale code taken from the file stem (e.g., "en", "zh-CN").
    pub locale: String,
}

impl LocaleFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let locale = extract_locale(&path).unwrap_or_default();
        Self { path, locale }
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn display_path(&self) -> String {
        to_system_independent(&self.path)
    }

    /// Whether this file supplies values for `preferred_locale`.
    ///
    /// Matches when the file name contains the locale code, so `en` prefers
    /// both `en.json` and `en-US.json`. An empty code prefers nothing.
    pub fn matches_locale(&self, preferred_locale: &str) -> bool {
        !preferred_locale.is_empty() && self.file_name().contains(preferred_locale)
    }
}

/// Extracts the locale code from a file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/i18n/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// A translation directory together with the locale files it currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Directory path in slash form.
    pub directory: String,
    pub files: Vec<LocaleFile>,
}

/// Kind of filesystem event reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileChangeKind {
    Created,
    Modified,
    Deleted,
}

impl fmt::Display for FileChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileChangeKind::Created => write!(f, "created"),
            FileChangeKind::Modified => write!(f, "modified"),
            FileChangeKind::Deleted => write!(f, "deleted"),
        }
    }
}
