use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::core::TranslationIndex;

/// The `--root` argument, or the current directory.
pub fn project_root(root: Option<&PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.clone()),
        None => env::current_dir().context("Failed to determine current directory"),
    }
}

/// Open the index for the project selected by `args`, applying CLI overrides.
pub fn open_index(args: &CommonArgs) -> Result<TranslationIndex> {
    let root = project_root(args.root.as_ref())?;
    if !root.is_dir() {
        anyhow::bail!("Project root {:?} is not a directory", root);
    }

    let index = TranslationIndex::open(&root)?;
    if let Some(locale) = &args.locale {
        index.update_config(|config| config.preferred_locale = locale.clone());
    }
    Ok(index)
}

/// Split a dot-separated key into its path segments.
pub fn key_segments(key: &str) -> Vec<&str> {
    key.split('.').collect()
}
