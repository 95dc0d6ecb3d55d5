use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::core::{KeyLocation, TranslationKey};

/// A parsed locale file: its raw text (for locations) and its top-level object.
#[derive(Debug, Clone)]
pub struct ParsedLocaleFile {
    pub content: String,
    pub root: Map<String, Value>,
}

/// Read and parse a locale file.
///
/// Fails when the file can't be read, isn't valid JSON, or its top-level value
/// isn't an object. Callers building a snapshot skip such files.
pub fn parse_locale_file(path: &Path) -> Result<ParsedLocaleFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let Value::Object(root) = json else {
        bail!("Top-level value of {:?} is not an object", path);
    };

    Ok(ParsedLocaleFile { content, root })
}

/// Collect every leaf key of `root` in dot-separated form.
///
/// Objects are descended into and never produce a key themselves. Any other
/// value (string, number, bool, null, array) is a leaf.
pub fn flatten_keys(root: &Map<String, Value>) -> BTreeSet<TranslationKey> {
    let mut keys = BTreeSet::new();
    visit_leaves(root, "", &mut |key, _| {
        keys.insert(key);
    });
    keys
}

/// Collect every leaf key of `root` together with its display text.
///
/// See [`leaf_text`] for how values are rendered.
pub fn flatten_key_values(root: &Map<String, Value>) -> HashMap<TranslationKey, String> {
    let mut values = HashMap::new();
    visit_leaves(root, "", &mut |key, value| {
        values.insert(key, leaf_text(value));
    });
    values
}

fn visit_leaves<F>(object: &Map<String, Value>, prefix: &str, visit: &mut F)
where
    F: FnMut(TranslationKey, &Value),
{
    for (name, value) in object {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            Value::Object(child) => visit_leaves(child, &key, visit),
            leaf => visit(key, leaf),
        }
    }
}

/// Text shown for a leaf value.
///
/// Strings are returned decoded, so `\n` and `\"` come back as a newline and a
/// quote. Every other type is rendered as
/// its compact JSON text (`42`, `true`, `null`, `["a","b"]`).
pub fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Walk `segments` from `root` and return the leaf they name.
///
/// Descends only through objects. Returns `None` when a segment is missing,
/// when the walk runs into a leaf before all segments are consumed, or when the
/// final node is itself an object.
pub fn resolve_key_path<'a, S>(root: &'a Map<String, Value>, segments: &[S]) -> Option<&'a Value>
where
    S: AsRef<str>,
{
    let (last, parents) = segments.split_last()?;

    let mut current = root;
    for segment in parents {
        match current.get(segment.as_ref())? {
            Value::Object(child) => current = child,
            _ => return None,
        }
    }

    match current.get(last.as_ref())? {
        Value::Object(_) => None,
        leaf => Some(leaf),
    }
}

/// Resolve `segments` in a parsed file and locate the definition in its text.
pub fn locate_key<S>(
    parsed: &ParsedLocaleFile,
    file_path: &str,
    segments: &[S],
) -> Option<KeyLocation>
where
    S: AsRef<str>,
{
    let leaf = resolve_key_path(&parsed.root, segments)?;
    let line_index = build_line_index(&parsed.content);
    let (line, col) = match find_key_offset(&parsed.content, segments) {
        Some(offset) => {
            let line = offset_to_line(&line_index, offset);
            (line, offset - line_index[line - 1] + 1)
        }
        None => (1, 1),
    };
    Some(KeyLocation::new(file_path, line, col, leaf_text(leaf)))
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Byte offset of the opening quote of the last segment's property name.
///
/// Scans the text once while tracking bracket depth. A property name only
/// matches when it sits directly inside the object opened by the previous
/// segment, so `b.title` skips a `"title"` nested under `b.inner`. Leaving that
/// object without a match ends the search.
fn find_key_offset<S: AsRef<str>>(content: &str, segments: &[S]) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut depth = 0usize;
    let mut scope_depth = 1usize;
    let mut segment = 0usize;
    let mut pos = 0usize;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                depth = depth.checked_sub(1)?;
                if depth < scope_depth {
                    return None;
                }
            }
            b'"' => {
                let end = string_end(bytes, pos)?;
                let is_property = content[end + 1..].trim_start().starts_with(':');
                if is_property
                    && depth == scope_depth
                    && property_name(&content[pos..=end]).as_deref()
                        == Some(segments.get(segment)?.as_ref())
                {
                    if segment + 1 == segments.len() {
                        return Some(pos);
                    }
                    segment += 1;
                    scope_depth += 1;
                }
                pos = end;
            }
            _ => {}
        }
        pos += 1;
    }

    None
}

/// Index of the closing quote of the string literal opening at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return Some(pos),
            _ => pos += 1,
        }
    }
    None
}

/// Decoded text of a quoted property name.
fn property_name(literal: &str) -> Option<String> {
    serde_json::from_str(literal).ok()
}
