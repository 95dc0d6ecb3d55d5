//! Discovery of translation directories inside a project tree.
//!
//! Walks each root depth-first, pruning excluded directories, and records every
//! directory that directly contains at least one locale file. Candidates are
//! then merged into the configured set through the stricter
//! [`is_non_empty_translation_directory`] check.

use std::{
    collections::{BTreeSet, HashSet},
    path::{Component, Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::Config,
    core::classify::{
        is_excluded_directory_name, is_locale_file_name, is_non_empty_translation_directory,
    },
    utils::{dedup_ordered, normalize_dir, to_system_independent},
};

/// Decides which directories discovery never enters.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    extra_names: HashSet<String>,
    ignore_patterns: Vec<Pattern>,
}

impl DirectoryFilter {
    pub fn new(extra_names: impl IntoIterator<Item = String>, ignore_patterns: Vec<Pattern>) -> Self {
        Self {
            extra_names: extra_names.into_iter().collect(),
            ignore_patterns,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.excluded_dirs.iter().cloned(), config.ignore_patterns())
    }

    /// Built-in exclusion set plus configured extra names.
    pub fn is_excluded_name(&self, name: &str) -> bool {
        is_excluded_directory_name(name) || self.extra_names.contains(name)
    }

    /// True when any segment of `path` is an excluded name or the whole path
    /// matches an ignore pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let excluded_segment = path.components().any(|c| match c {
            Component::Normal(segment) => segment.to_str().is_some_and(|s| self.is_excluded_name(s)),
            _ => false,
        });
        excluded_segment || self.matches_ignore(path)
    }

    fn matches_ignore(&self, path: &Path) -> bool {
        if self.ignore_patterns.is_empty() {
            return false;
        }
        let path_str = to_system_independent(path);
        self.ignore_patterns.iter().any(|p| p.matches(&path_str))
    }

    fn keeps_entry(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return true;
        }
        let name_excluded = entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.is_excluded_name(name));
        !name_excluded && !self.matches_ignore(entry.path())
    }
}

/// Result of a discovery walk.
#[derive(Debug, Default)]
pub struct DiscoveryResult {
    /// Directories containing at least one locale file.
    pub directories: BTreeSet<PathBuf>,
    /// Paths that could not be read during the walk.
    pub skipped_count: usize,
}

/// Walk `roots` and collect candidate translation directories.
///
/// Descends into subdirectories whether or not the current directory
/// qualified, so per-feature folders nested under another translation folder
/// are found too. Excluded directories are neither entered nor recorded.
pub fn discover<P>(roots: &[P], filter: &DirectoryFilter) -> DiscoveryResult
where
    P: AsRef<Path> + Sync,
{
    roots
        .par_iter()
        .map(|root| discover_root(root.as_ref(), filter))
        .reduce(DiscoveryResult::default, |mut acc, result| {
            acc.directories.extend(result.directories);
            acc.skipped_count += result.skipped_count;
            acc
        })
}

fn discover_root(root: &Path, filter: &DirectoryFilter) -> DiscoveryResult {
    let mut result = DiscoveryResult::default();

    if filter.is_excluded(root) {
        debug!(root = %root.display(), "skipping excluded discovery root");
        return result;
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| filter.keeps_entry(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                debug!(error = %e, "cannot access path during discovery");
                continue;
            }
        };

        if entry.depth() == 0 || !entry.file_type().is_file() {
            continue;
        }

        let is_locale = entry.file_name().to_str().is_some_and(is_locale_file_name);
        if is_locale && let Some(parent) = entry.path().parent() {
            result.directories.insert(parent.to_path_buf());
        }
    }

    result
}

/// Merge discovered candidates into the configured directory list.
///
/// The union is deduplicated (first occurrence wins, so configured entries keep
/// their order) and then filtered through
/// [`is_non_empty_translation_directory`]. This drops candidates that held a
/// locale file during the walk but also hold other files, as well as configured
/// directories that no longer qualify.
pub fn merge_directories(
    base: &Path,
    existing: &[String],
    discovered: &BTreeSet<PathBuf>,
) -> Vec<String> {
    let candidates = existing
        .iter()
        .map(|dir| normalize_dir(base, dir))
        .chain(discovered.iter().map(|dir| normalize_dir(base, dir)));

    let merged: Vec<String> = dedup_ordered(candidates)
        .into_iter()
        .filter(|dir| is_non_empty_translation_directory(Path::new(dir)))
        .collect();

    info!(
        candidates = discovered.len(),
        accepted = merged.len(),
        "merged translation directories"
    );
    merged
}
