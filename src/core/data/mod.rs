//! Core data types shared by the index, discovery and parsers.
//!
//! ## Module Structure
//!
//! - `message`: Locale file, key location and change-event types
//! - `snapshot`: The immutable project-wide key/value view

pub mod message;
pub mod snapshot;

pub use message::{
    DirectoryListing, FileChangeKind, KeyLocation, LocaleFile, TranslationKey, extract_locale,
};
pub use snapshot::Snapshot;
