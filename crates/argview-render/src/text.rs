//! Width measurement and text-fitting helpers.
//!
//! Everything here measures display cells, not bytes or chars: ANSI escape
//! sequences never count toward width, and wide (CJK) characters count as
//! two cells.

use console::measure_text_width;
use unicode_width::UnicodeWidthChar;

/// Returns the number of character cells a string occupies when displayed.
///
/// Embedded styling escape sequences are ignored, so a colored string and
/// its plain counterpart measure the same.
///
/// # Example
///
/// ```rust
/// use argview_render::visible_width;
///
/// assert_eq!(visible_width("world"), 5);
/// assert_eq!(visible_width("\x1b[31mhello\x1b[0m"), 5);
/// assert_eq!(visible_width("日本"), 4);
/// ```
pub fn visible_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Collapses whitespace and truncates to `width` on a word boundary.
///
/// If the collapsed text fits it is returned unchanged. Otherwise whole
/// words are dropped from the end until the text plus `placeholder` fits;
/// if not even the first word fits, only the placeholder is returned.
///
/// # Example
///
/// ```rust
/// use argview_render::shorten;
///
/// assert_eq!(shorten("hello  world", 20, "..."), "hello world");
/// assert_eq!(shorten("hello world foo", 12, "..."), "hello...");
/// assert_eq!(shorten("incomprehensibilities", 10, "..."), "...");
/// ```
pub fn shorten(s: &str, width: usize, placeholder: &str) -> String {
    let words: Vec<&str> = s.split_whitespace().collect();
    let collapsed = words.join(" ");
    if visible_width(&collapsed) <= width {
        return collapsed;
    }

    let placeholder_width = visible_width(placeholder);
    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0;
    for word in &words {
        let sep = usize::from(!kept.is_empty());
        let next = used + sep + visible_width(word);
        if next + placeholder_width > width {
            break;
        }
        used = next;
        kept.push(word);
    }

    if kept.is_empty() {
        return placeholder.to_string();
    }
    format!("{}{}", kept.join(" "), placeholder)
}

/// Word-wraps text to `width` display cells, joining lines with `\n`.
///
/// Whitespace is collapsed; words longer than `width` are broken at the
/// cell boundary.
///
/// # Example
///
/// ```rust
/// use argview_render::fill;
///
/// assert_eq!(fill("hello world foo bar", 11), "hello world\nfoo bar");
/// assert_eq!(fill("short", 40), "short");
/// ```
pub fn fill(s: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in s.split_whitespace().flat_map(|w| break_word(w, width)) {
        let word_width = visible_width(&word);
        let sep = usize::from(!line.is_empty());
        if line_width + sep + word_width > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(&word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

/// Splits a single word into pieces of at most `width` cells.
fn break_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let cell = c.width().unwrap_or(0);
        if current_width + cell > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += cell;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
