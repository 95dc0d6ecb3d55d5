//! Parsers for translation files.
//!
//! - `json`: locale file parsing, key flattening and key-path resolution

pub mod json;
