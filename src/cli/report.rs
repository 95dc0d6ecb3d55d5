//! Report formatting and printing utilities.
//!
//! Kept apart from the index so transkey can be used as a library. Every
//! printer has a `_to` variant taking a writer for tests.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    config::CONFIG_FILE_NAME,
    core::{DirectoryListing, KeyLocation},
    utils::to_system_independent,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// `path` relative to `root` when it lies inside it, otherwise unchanged.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let display = to_system_independent(relative);
    if display.is_empty() {
        ".".to_string()
    } else {
        display
    }
}

pub fn print_scan(root: &Path, listings: &[DirectoryListing], key_count: usize) {
    print_scan_to(root, listings, key_count, &mut io::stdout().lock());
}

/// Print tracked directories with their file counts, then a summary line.
pub fn print_scan_to<W: Write>(
    root: &Path,
    listings: &[DirectoryListing],
    key_count: usize,
    writer: &mut W,
) {
    let names: Vec<String> = listings
        .iter()
        .map(|l| relative_display(root, Path::new(&l.directory)))
        .collect();
    let max_width = names.iter().map(|n| n.width()).max().unwrap_or(0);

    for (name, listing) in names.iter().zip(listings) {
        let padding = " ".repeat(max_width - name.width());
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            name.cyan(),
            padding,
            format!("{} locale file(s)", listing.files.len()).dimmed()
        );
    }

    let file_count: usize = listings.iter().map(|l| l.files.len()).sum();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} translation director{} ({} locale files, {} keys)",
            listings.len(),
            if listings.len() == 1 { "y" } else { "ies" },
            file_count,
            key_count
        )
        .green()
    );
}

pub fn print_tree(root: &Path, listings: &[DirectoryListing]) {
    print_tree_to(root, listings, &mut io::stdout().lock());
}

/// Print each directory followed by its locale files.
pub fn print_tree_to<W: Write>(root: &Path, listings: &[DirectoryListing], writer: &mut W) {
    for listing in listings {
        let _ = writeln!(
            writer,
            "{}",
            relative_display(root, Path::new(&listing.directory)).bold()
        );
        for (i, file) in listing.files.iter().enumerate() {
            let branch = if i + 1 == listing.files.len() { "└──" } else { "├──" };
            let _ = writeln!(
                writer,
                "{} {} {}",
                branch.dimmed(),
                file.file_name(),
                format!("({})", file.locale).dimmed()
            );
        }
    }
}

pub fn print_location(root: &Path, location: &KeyLocation) {
    print_location_to(root, location, &mut io::stdout().lock());
}

/// Print `path:line:col` followed by the value defined there.
pub fn print_location_to<W: Write>(root: &Path, location: &KeyLocation, writer: &mut W) {
    let path = relative_display(root, Path::new(&location.file_path));
    let _ = writeln!(
        writer,
        "{}:{}:{}  {}",
        path.cyan(),
        location.line,
        location.col,
        location.value
    );
}

pub fn print_key_not_found(key: &str) {
    print_key_not_found_to(key, &mut io::stderr().lock());
}

pub fn print_key_not_found_to<W: Write>(key: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("Unknown translation key: {}", key).red()
    );
}

pub fn print_no_directories() {
    print_no_directories_to(&mut io::stderr().lock());
}

pub fn print_no_directories_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} no translation directories found (configure {} in {})",
        "warning:".bold().yellow(),
        "translationDirs".cyan(),
        CONFIG_FILE_NAME
    );
}

// ============================================================
// Tests
// ============================================================
