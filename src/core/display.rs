//! Presentation helpers for inline value hints and folded keys.

use unicode_width::UnicodeWidthChar;

const ELLIPSIS: &str = "...";

/// Truncates `text` to at most `max_width` display columns.
///
/// Appends `"..."` when anything was cut. Wide characters (CJK, emoji) count
/// as two columns.
///
/// # Examples
///
/// ```
/// use transkey::core::display::truncate_value;
///
/// assert_eq!(truncate_value("Hello", 10), "Hello");
/// assert_eq!(truncate_value("Hello, world", 5), "Hello...");
/// ```
pub fn truncate_value(text: &str, max_width: usize) -> String {
    let mut width = 0;
    for (idx, c) in text.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return format!("{}{}", &text[..idx], ELLIPSIS);
        }
    }
    text.to_string()
}

/// Text displayed in place of a folded key literal.
///
/// Control whitespace is flattened to spaces so the placeholder stays on one
/// line. Falls back to the key when there is no value or the value is blank.
pub fn fold_placeholder(key: &str, value: Option<&str>, max_width: usize) -> String {
    let Some(value) = value else {
        return key.to_string();
    };

    let placeholder: String = truncate_value(value, max_width)
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect();

    if placeholder.trim().is_empty() {
        key.to_string()
    } else {
        placeholder
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_value("Save", 40), "Save");
        assert_eq!(truncate_value("", 40), "");
    }

    #[test]
    fn test_truncate_exact_width_untouched() {
        assert_eq!(truncate_value("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_value("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_value("你好世界", 4), "你好...");
        assert_eq!(truncate_value("你好世界", 5), "你好...");
    }

    #[test]
    fn test_fold_placeholder_flattens_whitespace() {
        assert_eq!(
            fold_placeholder("home.title", Some("Line one\nLine\ttwo"), 40),
            "Line one Line two"
        );
    }

    #[test]
    fn test_fold_placeholder_falls_back_to_key() {
        assert_eq!(fold_placeholder("home.title", None, 40), "home.title");
        assert_eq!(fold_placeholder("home.title", Some(" \n\t"), 40), "home.title");
    }

    #[test]
    fn test_fold_placeholder_truncates() {
        assert_eq!(
            fold_placeholder("k", Some("Welcome back"), 7),
            "Welcome..."
        );
    }
}
