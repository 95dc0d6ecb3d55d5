//! Project-wide translation index with an invalidation-driven snapshot cache.
//!
//! # Cache contract
//!
//! The index keeps a dependency version counter. Every accepted change
//! notification (file or configuration) bumps it. A snapshot remembers the
//! version it was built against; a read that finds a mismatch rebuilds the
//! snapshot synchronously on the calling thread and swaps it in.
//!
//! # Thread Safety
//!
//! - The snapshot lives behind `RwLock<Arc<Snapshot>>`: readers clone the `Arc`
//!   and never observe a half-built snapshot
//! - Rebuilds serialize on a mutex and re-check the version after acquiring it,
//!   so concurrent misses produce one rebuild
//! - Writers mutate state first and bump the version second; a rebuild reads
//!   the version first and state second, so it can only ever under-label a
//!   snapshot (forcing another rebuild), never serve stale data as fresh

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Instant,
};

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock, RwLockUpgradableReadGuard};
use tracing::{debug, warn};

use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        DirectoryListing, FileChangeKind, KeyLocation, LocaleFile, Snapshot, TranslationKey,
        classify::is_locale_file_path,
        discovery::{DirectoryFilter, discover, merge_directories},
        display::{fold_placeholder, truncate_value},
        parsers::json::{flatten_key_values, flatten_keys, locate_key, parse_locale_file},
        project::is_ngx_translate_project,
    },
    utils::{dedup_ordered, normalize_dir, normalize_path},
};

pub struct TranslationIndex {
    /// Absolute project root; relative configured paths resolve against it.
    project_root: PathBuf,

    /// Owned configuration, including the tracked directory set.
    config: RwLock<Config>,

    /// Dependency version; bumped on every accepted change.
    version: AtomicU64,

    /// Latest built snapshot.
    snapshot: RwLock<Arc<Snapshot>>,

    /// Serializes rebuilds.
    rebuild_lock: Mutex<()>,

    /// Whether configuration comes from the config file and is re-read on
    /// settings changes.
    reloads_config: bool,
}

impl TranslationIndex {
    /// Load configuration for `project_root` and build an index over it.
    ///
    /// # Errors
    ///
    /// Returns error if the config file exists but is unreadable or invalid.
    pub fn open(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        let absolute = std::path::absolute(project_root)
            .with_context(|| format!("Invalid project root: {:?}", project_root))?;
        let loaded = load_config(&absolute)?;
        if let Some(path) = &loaded.path {
            debug!(path = %path.display(), "loaded configuration");
        }
        let mut index = Self::new(absolute, loaded.config);
        index.reloads_config = true;
        Ok(index)
    }

    /// Build an index over `project_root` with an explicit configuration.
    ///
    /// Runs discovery once when auto-discovery is enabled. The snapshot itself
    /// is built lazily on the first read.
    pub fn new(project_root: impl Into<PathBuf>, mut config: Config) -> Self {
        let project_root = project_root.into();
        let project_root = std::path::absolute(&project_root).unwrap_or(project_root);
        let project_root = normalize_path(&project_root, "");

        config.translation_dirs = normalize_dirs(&project_root, &config.translation_dirs);
        let auto_discovery = config.auto_discovery;

        let index = Self {
            project_root,
            config: RwLock::new(config),
            version: AtomicU64::new(1),
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
            rebuild_lock: Mutex::new(()),
            reloads_config: false,
        };

        if auto_discovery {
            index.run_discovery();
        }
        index
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Whether the project is eligible for editor features.
    pub fn is_eligible_project(&self) -> bool {
        is_ngx_translate_project(&self.project_root)
    }

    // ============================================================
    // Queries
    // ============================================================

    /// The current snapshot, rebuilt first if any dependency changed.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        if let Some(current) = self.current_snapshot() {
            return current;
        }

        let _guard = self.rebuild_lock.lock();
        if let Some(current) = self.current_snapshot() {
            return current;
        }

        let version = self.version.load(Ordering::Acquire);
        let config = self.config.read().clone();
        let fresh = Arc::new(build_snapshot(&config, version));
        *self.snapshot.write() = Arc::clone(&fresh);
        fresh
    }

    fn current_snapshot(&self) -> Option<Arc<Snapshot>> {
        let current = self.snapshot.read().clone();
        let version = self.version.load(Ordering::Acquire);
        (current.version == version).then_some(current)
    }

    pub fn all_keys(&self) -> BTreeSet<TranslationKey> {
        self.snapshot().keys.clone()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.snapshot().has_key(key)
    }

    /// Value of `key`, taken from the preferred locale when it defines it.
    pub fn get_value(&self, key: &str) -> Option<String> {
        self.snapshot().value(key).map(str::to_string)
    }

    /// Sorted keys starting with `prefix`.
    pub fn complete(&self, prefix: &str) -> Vec<TranslationKey> {
        self.snapshot()
            .keys_with_prefix(prefix)
            .map(str::to_string)
            .collect()
    }

    /// Truncated value for inline hints, or `None` when hints are disabled or
    /// the key is unknown.
    pub fn display_value(&self, key: &str) -> Option<String> {
        let (enabled, max_width) = {
            let config = self.config.read();
            (config.inlay_hint_enabled, config.inlay_hint_length)
        };
        if !enabled {
            return None;
        }
        let snapshot = self.snapshot();
        snapshot.value(key).map(|v| truncate_value(v, max_width))
    }

    /// Placeholder text for a folded key literal, or `None` when folding is
    /// disabled or the key is unknown.
    pub fn fold_text(&self, key: &str) -> Option<String> {
        let (enabled, max_width) = {
            let config = self.config.read();
            (config.fold_key_enabled, config.inlay_hint_length)
        };
        if !enabled {
            return None;
        }
        let snapshot = self.snapshot();
        if !snapshot.has_key(key) {
            return None;
        }
        Some(fold_placeholder(key, snapshot.value(key), max_width))
    }

    /// Location of the leaf named by `segments`.
    ///
    /// Prefers the preferred-locale file, then falls back to the other files in
    /// path order. Reads the content captured by the current snapshot, so the
    /// location always agrees with [`Self::get_value`].
    pub fn resolve_key_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<KeyLocation> {
        self.locate(segments, true).into_iter().next()
    }

    /// Every locale file location defining the leaf named by `segments`.
    pub fn resolve_key_locations<S: AsRef<str>>(&self, segments: &[S]) -> Vec<KeyLocation> {
        self.locate(segments, false)
    }

    fn locate<S: AsRef<str>>(&self, segments: &[S], first_only: bool) -> Vec<KeyLocation> {
        let snapshot = self.snapshot();
        let key = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(".");
        if !snapshot.has_key(&key) {
            return Vec::new();
        }

        let mut locations = Vec::new();
        for (file, document) in snapshot.documents_preferred_first() {
            if let Some(location) = locate_key(document, &file.display_path(), segments) {
                locations.push(location);
                if first_only {
                    break;
                }
            }
        }
        locations
    }

    // ============================================================
    // Configuration surface
    // ============================================================

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Mutate the configuration and invalidate the snapshot.
    pub fn update_config(&self, update: impl FnOnce(&mut Config)) {
        {
            let mut config = self.config.write();
            update(&mut config);
            config.translation_dirs = normalize_dirs(&self.project_root, &config.translation_dirs);
        }
        self.invalidate();
    }

    /// Tracked translation directories, in configured order.
    pub fn discovered_directories(&self) -> Vec<PathBuf> {
        self.config
            .read()
            .translation_dirs
            .iter()
            .map(PathBuf::from)
            .collect()
    }

    /// Replace the tracked directory set.
    pub fn set_configured_directories<I, P>(&self, directories: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let directories: Vec<String> = directories
            .into_iter()
            .map(|d| normalize_dir(&self.project_root, d))
            .collect();
        self.update_config(|config| config.translation_dirs = directories);
    }

    /// Each tracked directory with the locale files it currently holds.
    pub fn directory_listing(&self) -> Vec<DirectoryListing> {
        self.config
            .read()
            .translation_dirs
            .iter()
            .map(|dir| DirectoryListing {
                directory: dir.clone(),
                files: locale_files_in(Path::new(dir)),
            })
            .collect()
    }

    // ============================================================
    // Invalidation hooks
    // ============================================================

    /// Report a filesystem event observed by the host.
    ///
    /// Only `.json` files are considered. A change to the config file is
    /// handled like [`Self::notify_config_changed`]. Otherwise re-runs
    /// discovery when it is enabled. Returns whether the snapshot was
    /// invalidated.
    pub fn notify_file_changed(&self, path: &Path, kind: FileChangeKind) -> bool {
        if !is_json_path(path) {
            return false;
        }

        if self.reloads_config && path.file_name().is_some_and(|n| n == CONFIG_FILE_NAME) {
            debug!(path = %path.display(), %kind, "config file changed");
            self.notify_config_changed();
            return true;
        }

        let path = normalize_path(&self.project_root, path);
        let Some(parent) = path.parent() else {
            return false;
        };
        let parent = normalize_dir(&self.project_root, parent);

        let tracked_before = self.tracks(&parent);
        let auto_discovery = self.config.read().auto_discovery;
        let directories_changed = auto_discovery && self.run_discovery();
        let tracked_after = self.tracks(&parent);

        let invalidated = if directories_changed {
            true
        } else if tracked_before || tracked_after {
            self.invalidate();
            true
        } else {
            false
        };

        debug!(
            path = %path.display(),
            %kind,
            invalidated,
            "file change notification"
        );
        invalidated
    }

    /// Report a settings change made outside [`Self::update_config`].
    ///
    /// An index created by [`Self::open`] re-reads the config file first and
    /// re-runs discovery when it is enabled. A config file that fails to load
    /// leaves the previous configuration in place.
    pub fn notify_config_changed(&self) {
        if self.reloads_config {
            self.reload_config();
        }
        self.invalidate();
    }

    fn reload_config(&self) {
        let mut config = match load_config(&self.project_root) {
            Ok(loaded) => loaded.config,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "keeping previous configuration");
                return;
            }
        };
        config.translation_dirs = normalize_dirs(&self.project_root, &config.translation_dirs);
        let auto_discovery = config.auto_discovery;

        *self.config.write() = config;
        if auto_discovery {
            self.run_discovery();
        }
    }

    /// Run discovery regardless of the auto-discovery flag.
    ///
    /// Returns the tracked directory set afterwards.
    pub fn rescan(&self) -> Vec<PathBuf> {
        self.run_discovery();
        self.discovered_directories()
    }

    fn invalidate(&self) {
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    fn tracks(&self, directory: &str) -> bool {
        self.config
            .read()
            .translation_dirs
            .iter()
            .any(|d| d == directory)
    }

    /// Discover and merge translation directories. Returns whether the
    /// tracked set changed.
    fn run_discovery(&self) -> bool {
        // Upgradable read: concurrent readers proceed, other writers wait, so the
        // merge can't clobber a directory update made mid-walk.
        let config = self.config.upgradable_read();

        let roots: Vec<PathBuf> = config
            .discovery_roots
            .iter()
            .map(|root| normalize_path(&self.project_root, root))
            .collect();
        let result = discover(&roots, &DirectoryFilter::from_config(&config));

        if result.skipped_count > 0 {
            warn!(
                skipped = result.skipped_count,
                "path(s) skipped during discovery due to access errors"
            );
        }
        if result.directories.is_empty() {
            return false;
        }

        let merged = merge_directories(
            &self.project_root,
            &config.translation_dirs,
            &result.directories,
        );
        if merged == config.translation_dirs {
            return false;
        }

        let mut config = RwLockUpgradableReadGuard::upgrade(config);
        config.translation_dirs = merged;
        drop(config);
        self.invalidate();
        true
    }
}

fn normalize_dirs(base: &Path, dirs: &[String]) -> Vec<String> {
    dedup_ordered(dirs.iter().map(|d| normalize_dir(base, d)))
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Locale files directly inside `dir`, sorted by path. Missing or unreadable
/// directories contribute nothing.
fn locale_files_in(dir: &Path) -> Vec<LocaleFile> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "skipping translation directory");
            return Vec::new();
        }
    };

    let mut files: Vec<LocaleFile> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_locale_file_path(path))
        .map(LocaleFile::new)
        .collect();
    files.sort();
    files
}

/// Recompute a snapshot from scratch.
///
/// Files are read sequentially in path order. Keys are the union across all
/// files; each value comes from the first file defining it, with
/// preferred-locale files consulted before the others.
fn build_snapshot(config: &Config, version: u64) -> Snapshot {
    let started = Instant::now();

    let mut candidates: Vec<LocaleFile> = config
        .translation_dirs
        .iter()
        .flat_map(|dir| locale_files_in(Path::new(dir)))
        .collect();
    candidates.sort();
    candidates.dedup();

    let mut files = Vec::with_capacity(candidates.len());
    let mut documents = Vec::with_capacity(candidates.len());
    for file in candidates {
        match parse_locale_file(&file.path) {
            Ok(document) => {
                files.push(file);
                documents.push(document);
            }
            Err(e) => debug!(error = %e, "skipping locale file"),
        }
    }

    let mut snapshot = Snapshot {
        version,
        preferred_locale: config.preferred_locale.clone(),
        files,
        documents,
        ..Default::default()
    };

    for document in &snapshot.documents {
        snapshot.keys.extend(flatten_keys(&document.root));
    }

    let mut values = HashMap::with_capacity(snapshot.keys.len());
    for (_, document) in snapshot.documents_preferred_first() {
        for (key, value) in flatten_key_values(&document.root) {
            values.entry(key).or_insert(value);
        }
    }
    snapshot.values = values;

    debug!(
        version,
        files = snapshot.files.len(),
        keys = snapshot.keys.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rebuilt translation snapshot"
    );

    snapshot
}
