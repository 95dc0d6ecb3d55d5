//! Translation-key index engine.
//!
//! ## Module Structure
//!
//! - `classify`: Locale file and translation directory predicates
//! - `data`: Shared data types and the immutable snapshot
//! - `discovery`: Translation directory discovery and merging
//! - `display`: Truncation and folding helpers for editor presentation
//! - `index`: The invalidation-driven translation index
//! - `parsers`: Locale file parsing and key flattening
//! - `project`: Project eligibility detection

pub mod classify;
pub mod data;
pub mod discovery;
pub mod display;
pub mod index;
pub mod parsers;
pub mod project;

pub use data::{
    DirectoryListing, FileChangeKind, KeyLocation, LocaleFile, Snapshot, TranslationKey,
    extract_locale,
};
pub use index::TranslationIndex;
