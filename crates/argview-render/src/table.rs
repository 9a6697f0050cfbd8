//! The single-table renderer.
//!
//! Renders one list of `(key, value)` cell pairs into one aligned text
//! block. The layout engine treats this as a black box: rows and headers
//! in, a freestanding block of lines out. Cells may span several lines (a
//! wrapped value); a row is as tall as its tallest cell. All widths are
//! measured with [`visible_width`], so styled cells align with plain ones.

use std::fmt;
use std::str::FromStr;

use console::{pad_str, Alignment};

use crate::error::RenderError;
use crate::text::visible_width;

/// Visual style of a rendered table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableFormat {
    /// Padded columns only, no rules.
    Plain,
    /// A dashed rule under the header.
    #[default]
    Simple,
    /// ASCII box drawing with rules between rows.
    Grid,
    /// Unicode box drawing with rules between rows.
    FancyGrid,
}

impl TableFormat {
    fn chars(&self) -> FormatChars {
        match self {
            TableFormat::Plain => FormatChars {
                vertical: None,
                top: None,
                header: None,
                row: None,
                bottom: None,
            },
            TableFormat::Simple => FormatChars {
                vertical: None,
                top: None,
                header: Some(Rule::flat('-')),
                row: None,
                bottom: None,
            },
            TableFormat::Grid => FormatChars {
                vertical: Some('|'),
                top: Some(Rule::new('+', '-', '+', '+')),
                header: Some(Rule::new('+', '=', '+', '+')),
                row: Some(Rule::new('+', '-', '+', '+')),
                bottom: Some(Rule::new('+', '-', '+', '+')),
            },
            TableFormat::FancyGrid => FormatChars {
                vertical: Some('│'),
                top: Some(Rule::new('╒', '═', '╤', '╕')),
                header: Some(Rule::new('╞', '═', '╪', '╡')),
                row: Some(Rule::new('├', '─', '┼', '┤')),
                bottom: Some(Rule::new('╘', '═', '╧', '╛')),
            },
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableFormat::Plain => "plain",
            TableFormat::Simple => "simple",
            TableFormat::Grid => "grid",
            TableFormat::FancyGrid => "fancy_grid",
        };
        f.write_str(name)
    }
}

impl FromStr for TableFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(TableFormat::Plain),
            "simple" => Ok(TableFormat::Simple),
            "grid" => Ok(TableFormat::Grid),
            "fancy_grid" => Ok(TableFormat::FancyGrid),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// One horizontal rule: left edge, fill, column junction, right edge.
#[derive(Clone, Copy, Debug)]
struct Rule {
    left: char,
    fill: char,
    junction: char,
    right: char,
}

impl Rule {
    fn new(left: char, fill: char, junction: char, right: char) -> Self {
        Rule {
            left,
            fill,
            junction,
            right,
        }
    }

    /// A rule for borderless formats: fill only, per column.
    fn flat(fill: char) -> Self {
        Rule::new(' ', fill, ' ', ' ')
    }
}

struct FormatChars {
    vertical: Option<char>,
    top: Option<Rule>,
    header: Option<Rule>,
    row: Option<Rule>,
    bottom: Option<Rule>,
}

/// Gap between columns in borderless formats.
const COLUMN_GAP: &str = "  ";

/// Renders one two-column table into a text block (no trailing newline).
///
/// # Example
///
/// ```rust
/// use argview_render::{render_table, TableFormat};
///
/// let rows = vec![("a".to_string(), "1".to_string())];
/// let block = render_table(&rows, Some(("arg", "value")), TableFormat::Simple);
/// assert_eq!(block, "arg  value\n---  -----\na    1");
/// ```
pub fn render_table(
    rows: &[(String, String)],
    headers: Option<(&str, &str)>,
    format: TableFormat,
) -> String {
    let chars = format.chars();

    let cells: Vec<(Vec<&str>, Vec<&str>)> = rows
        .iter()
        .map(|(k, v)| (k.lines().collect(), v.lines().collect()))
        .collect();

    let mut widths = [0usize; 2];
    if let Some((h0, h1)) = headers {
        widths[0] = visible_width(h0);
        widths[1] = visible_width(h1);
    }
    for (key_lines, value_lines) in &cells {
        for line in key_lines {
            widths[0] = widths[0].max(visible_width(line));
        }
        for line in value_lines {
            widths[1] = widths[1].max(visible_width(line));
        }
    }

    let mut out: Vec<String> = Vec::new();
    if let Some(rule) = &chars.top {
        out.push(rule_line(rule, &widths, chars.vertical.is_some()));
    }
    if let Some((h0, h1)) = headers {
        out.push(cell_line(h0, h1, &widths, &chars));
        if let Some(rule) = &chars.header {
            out.push(rule_line(rule, &widths, chars.vertical.is_some()));
        }
    }
    for (i, (key_lines, value_lines)) in cells.iter().enumerate() {
        if i > 0 {
            if let Some(rule) = &chars.row {
                out.push(rule_line(rule, &widths, chars.vertical.is_some()));
            }
        }
        let height = key_lines.len().max(value_lines.len()).max(1);
        for line in 0..height {
            let key = key_lines.get(line).copied().unwrap_or("");
            let value = value_lines.get(line).copied().unwrap_or("");
            out.push(cell_line(key, value, &widths, &chars));
        }
    }
    if let Some(rule) = &chars.bottom {
        out.push(rule_line(rule, &widths, chars.vertical.is_some()));
    }
    out.join("\n")
}

fn rule_line(rule: &Rule, widths: &[usize; 2], bordered: bool) -> String {
    if bordered {
        let mut line = String::new();
        line.push(rule.left);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(rule.junction);
            }
            for _ in 0..width + 2 {
                line.push(rule.fill);
            }
        }
        line.push(rule.right);
        line
    } else {
        widths
            .iter()
            .map(|w| rule.fill.to_string().repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    }
}

fn cell_line(key: &str, value: &str, widths: &[usize; 2], chars: &FormatChars) -> String {
    match chars.vertical {
        Some(v) => format!(
            "{v} {} {v} {} {v}",
            pad_str(key, widths[0], Alignment::Left, None),
            pad_str(value, widths[1], Alignment::Left, None),
        ),
        None => format!(
            "{}{}{}",
            pad_str(key, widths[0], Alignment::Left, None),
            COLUMN_GAP,
            value
        ),
    }
}
