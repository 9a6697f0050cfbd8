//! Styling palette threaded through every rendering call.
//!
//! A [`Palette`] is a small collection of `console::Style` values plus a
//! `styled` switch. Rendering functions take a palette by reference; there
//! is no process-wide styling state. With `styled = false` every call
//! produces plain text, byte-identical across environments, which is also
//! what the tests rely on.

use console::Style;

/// Glyph used for a value that was never populated.
///
/// Rendered in the palette's `missing` style; deliberately not the string
/// `"null"` so absent values stand out in dense tables.
pub const MISSING_MARK: &str = "-";

/// Styles for the different parts of argument output.
///
/// # Example
///
/// ```rust
/// use argview_render::{Palette, MISSING_MARK};
///
/// let plain = Palette::plain();
/// assert_eq!(plain.paint(&plain.key, "epochs"), "epochs");
/// assert_eq!(plain.missing_marker(), MISSING_MARK);
///
/// let colored = Palette::colored();
/// let marker = colored.missing_marker();
/// assert!(marker.contains(MISSING_MARK));
/// assert!(marker.contains('\x1b'));
/// ```
#[derive(Clone, Debug)]
pub struct Palette {
    /// When false, `paint` is the identity and no escape codes are emitted.
    pub styled: bool,
    /// Style for the group's type name in inline output.
    pub type_name: Style,
    /// Style for argument names.
    pub key: Style,
    /// Style for present values. Identity by default.
    pub value: Style,
    /// Style for the missing-value marker.
    pub missing: Style,
    /// Style for table headers.
    pub header: Style,
}

impl Palette {
    /// The default color scheme: yellow type names and headers, green keys,
    /// red missing markers, unstyled values.
    pub fn colored() -> Self {
        Palette {
            styled: true,
            type_name: Style::new().yellow(),
            key: Style::new().green(),
            value: Style::new(),
            missing: Style::new().red(),
            header: Style::new().yellow(),
        }
    }

    /// Same scheme with styling switched off; `paint` returns its input.
    pub fn plain() -> Self {
        Palette {
            styled: false,
            ..Self::colored()
        }
    }

    /// Applies `style` to `text` when styling is enabled.
    ///
    /// Styling is forced rather than terminal-detected so that output sent
    /// to a pipe or a string buffer keeps its colors; callers that want
    /// detection decide before building the palette.
    pub fn paint(&self, style: &Style, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        style
            .clone()
            .force_styling(true)
            .apply_to(text)
            .to_string()
    }

    /// The styled missing-value marker.
    pub fn missing_marker(&self) -> String {
        self.paint(&self.missing, MISSING_MARK)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::visible_width;

    #[test]
    fn test_plain_paint_is_identity() {
        let palette = Palette::plain();
        assert_eq!(palette.paint(&palette.key, "name"), "name");
        assert_eq!(palette.paint(&palette.missing, "-"), "-");
    }

    #[test]
    fn test_colored_paint_wraps_text() {
        let palette = Palette::colored();
        let painted = palette.paint(&palette.key, "name");
        assert_ne!(painted, "name");
        assert!(painted.contains("name"));
        assert!(painted.starts_with('\x1b'));
    }

    #[test]
    fn test_paint_does_not_change_visible_width() {
        let palette = Palette::colored();
        let painted = palette.paint(&palette.header, "value");
        assert_eq!(visible_width(&painted), 5);
    }

    #[test]
    fn test_identity_style_stays_plain() {
        // The default value style has no attributes, so even forced
        // styling emits nothing.
        let palette = Palette::colored();
        assert_eq!(palette.paint(&palette.value, "42"), "42");
    }
}
