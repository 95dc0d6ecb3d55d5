use std::collections::{BTreeSet, HashMap};

use super::message::{LocaleFile, TranslationKey};
use crate::core::parsers::json::ParsedLocaleFile;

/// Immutable project-wide view of all translation keys.
///
/// Built wholesale from every locale file under every tracked directory and
/// never mutated afterwards; a newer snapshot replaces it as a unit.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Dependency version this snapshot was built against.
    pub(crate) version: u64,
    /// Preferred locale in effect when the snapshot was built.
    pub preferred_locale: String,
    /// Union of leaf keys across all locale files.
    pub keys: BTreeSet<TranslationKey>,
    /// Key to display text, filled preferentially from preferred-locale files.
    pub values: HashMap<TranslationKey, String>,
    /// Locale files that parsed successfully, in path order.
    pub files: Vec<LocaleFile>,
    /// Parsed content of each entry in `files`, same order.
    pub(crate) documents: Vec<ParsedLocaleFile>,
}

impl Snapshot {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Keys starting with `prefix`, in sorted order.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.keys
            .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
            .take_while(move |k| k.starts_with(prefix))
            .map(String::as_str)
    }

    /// Parsed files with preferred-locale files first, then the rest; path
    /// order within each group.
    pub fn documents_preferred_first(
        &self,
    ) -> impl Iterator<Item = (&LocaleFile, &ParsedLocaleFile)> {
        let pairs = || self.files.iter().zip(&self.documents);
        let preferred = |file: &LocaleFile| file.matches_locale(&self.preferred_locale);
        pairs()
            .filter(move |&(file, _)| preferred(file))
            .chain(pairs().filter(move |&(file, _)| !preferred(file)))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
