use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transkeyrc.json";

/// Maximum display width used by inline value hints when nothing is configured.
pub const DEFAULT_INLAY_HINT_LENGTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_preferred_locale", alias = "lang")]
    pub preferred_locale: String,
    /// Ordered, deduplicated translation directories in slash form.
    #[serde(default, alias = "i18nPaths")]
    pub translation_dirs: Vec<String>,
    #[serde(default = "default_auto_discovery", alias = "autoDiscoveryEnabled")]
    pub auto_discovery: bool,
    #[serde(default = "default_discovery_roots")]
    pub discovery_roots: Vec<String>,
    /// Directory names pruned by discovery on top of the built-in set.
    #[serde(default)]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_inlay_hint_length")]
    pub inlay_hint_length: usize,
    #[serde(default = "default_inlay_hint_enabled")]
    pub inlay_hint_enabled: bool,
    #[serde(default)]
    pub fold_key_enabled: bool,
}

fn default_preferred_locale() -> String {
    "en".to_string()
}

fn default_auto_discovery() -> bool {
    true
}

fn default_discovery_roots() -> Vec<String> {
    vec![".".to_string()]
}

fn default_inlay_hint_length() -> usize {
    DEFAULT_INLAY_HINT_LENGTH
}

fn default_inlay_hint_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferred_locale: default_preferred_locale(),
            translation_dirs: Vec::new(),
            auto_discovery: default_auto_discovery(),
            discovery_roots: default_discovery_roots(),
            excluded_dirs: Vec::new(),
            ignores: Vec::new(),
            inlay_hint_length: default_inlay_hint_length(),
            inlay_hint_enabled: default_inlay_hint_enabled(),
            fold_key_enabled: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// inlay hint length is zero.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.inlay_hint_length == 0 {
            bail!("'inlayHintLength' must be greater than zero");
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Invalid patterns are dropped; `validate`
    /// reports them when the config is loaded from disk.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
