//! Transkey - translation key index for ngx-translate projects
//!
//! Transkey discovers the directories holding locale JSON files (`en.json`,
//! `fr-FR.json`, ...), flattens their nested objects into dot-separated keys and
//! serves key lookups, completions and definition locations from a cached
//! snapshot that is rebuilt whenever a tracked file or the configuration
//! changes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface over the index
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery, parsing and the translation index
//! - `utils`: Shared path utilities

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
