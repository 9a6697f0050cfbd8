//! One-line `TypeName(key=value, ...)` rendering.

use serde_json::Value;

use crate::style::Palette;
use crate::text::shorten;
use crate::value::{ArgGroup, ArgValue};

/// Width values are shortened to in inline output.
const INLINE_VALUE_WIDTH: usize = 20;

const ELLIPSIS: &str = "...";

/// Quoted form for strings, plain form for everything else.
///
/// ```rust
/// use argview_render::value_repr;
/// use serde_json::json;
///
/// assert_eq!(value_repr(&json!("abc")), "\"abc\"");
/// assert_eq!(value_repr(&json!(4.5)), "4.5");
/// assert_eq!(value_repr(&json!([1, 2])), "[1,2]");
/// ```
pub fn value_repr(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

/// Unquoted display form of a leaf value.
pub fn value_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders a populated group on a single line.
///
/// Keys and the type name are styled through the palette; missing values
/// render as the styled marker; nested groups render inline recursively.
/// With `shorten_values` the stringified value is cut to a short width
/// before being quoted, so even a long string default stays readable.
///
/// # Example
///
/// ```rust
/// use argview_render::{format_inline, ArgGroup, Palette};
///
/// let args = ArgGroup::new("Args").leaf("a", 1).missing("b");
/// let line = format_inline(&args, false, &Palette::plain());
/// assert_eq!(line, "Args(a=1, b=-)");
/// ```
pub fn format_inline(group: &ArgGroup, shorten_values: bool, palette: &Palette) -> String {
    let pairs: Vec<String> = group
        .entries()
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                ArgValue::Missing => palette.missing_marker(),
                ArgValue::Group(sub) => format_inline(sub, shorten_values, palette),
                ArgValue::Leaf(v) => {
                    if shorten_values {
                        format!("{:?}", shorten(&value_str(v), INLINE_VALUE_WIDTH, ELLIPSIS))
                    } else {
                        value_repr(v)
                    }
                }
            };
            format!("{}={}", palette.paint(&palette.key, key), rendered)
        })
        .collect();
    format!(
        "{}({})",
        palette.paint(&palette.type_name, group.type_name()),
        pairs.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_inline() {
        let args = ArgGroup::new("Args")
            .leaf("a", 1)
            .leaf("name", "bob")
            .missing("c");
        assert_eq!(
            format_inline(&args, false, &Palette::plain()),
            "Args(a=1, name=\"bob\", c=-)"
        );
    }

    #[test]
    fn test_empty_group() {
        let args = ArgGroup::new("Args");
        assert_eq!(format_inline(&args, false, &Palette::plain()), "Args()");
    }

    #[test]
    fn test_nested_group_renders_inline() {
        let args = ArgGroup::new("Args")
            .leaf("a", 1)
            .group("sub", ArgGroup::new("Sub").leaf("x", 2));
        assert_eq!(
            format_inline(&args, false, &Palette::plain()),
            "Args(a=1, sub=Sub(x=2))"
        );
    }

    #[test]
    fn test_shorten_quotes_the_shortened_text() {
        let long = "a very long default value that keeps going";
        let args = ArgGroup::new("Args").leaf("v", long);
        let line = format_inline(&args, true, &Palette::plain());
        assert_eq!(line, "Args(v=\"a very long...\")");
        // Numbers go through the same path, so they come out quoted too.
        let args = ArgGroup::new("Args").leaf("n", 5);
        assert_eq!(format_inline(&args, true, &Palette::plain()), "Args(n=\"5\")");
    }

    #[test]
    fn test_styled_markers_wrap_parts() {
        let palette = Palette::colored();
        let args = ArgGroup::new("Args").leaf("a", 1).missing("b");
        let line = format_inline(&args, false, &palette);
        assert!(line.contains(&palette.paint(&palette.type_name, "Args")));
        assert!(line.contains(&palette.paint(&palette.key, "a")));
        assert!(line.contains(&palette.missing_marker()));
    }

    #[test]
    fn test_list_value() {
        let args = ArgGroup::new("Args").leaf("xs", json!([1, 2, 3]));
        assert_eq!(
            format_inline(&args, false, &Palette::plain()),
            "Args(xs=[1,2,3])"
        );
    }
}
