//! Orchestration: inline vs. tabular presentation and the output sink.
//!
//! The tabular pipeline is flatten → resolve the column policy → partition
//! into row-groups → render each row-group through the single-table
//! renderer → merge the blocks side by side. The inline path is a single
//! formatted line. Both are pure; only [`print_args`] touches I/O.

use std::io::{self, Write};

use crate::flatten::{flatten, FlatRow};
use crate::inline::{format_inline, value_str};
use crate::layout::{merge_columns, split_by_group, split_into_columns, SplitPolicy};
use crate::style::Palette;
use crate::table::{render_table, TableFormat};
use crate::text::{fill, shorten};
use crate::value::ArgGroup;

/// Display width values are wrapped to in table cells.
const VALUE_WRAP_WIDTH: usize = 40;

/// Hard ceiling applied before wrapping, so a pathological value cannot
/// produce hundreds of wrapped lines.
const VALUE_CEILING: usize = 400;

const ELLIPSIS: &str = "...";

/// Table-specific options, passed through to the tabular pipeline.
#[derive(Clone, Debug)]
pub struct TableOptions {
    /// How rows are partitioned into side-by-side blocks.
    pub policy: SplitPolicy,
    /// Separator placed between merged blocks.
    pub gap: String,
    /// Format handed to the single-table renderer.
    pub format: TableFormat,
    /// The two column headers.
    pub headers: (String, String),
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            policy: SplitPolicy::default(),
            gap: "   ".to_string(),
            format: TableFormat::default(),
            headers: ("arg".to_string(), "value".to_string()),
        }
    }
}

impl TableOptions {
    /// The decorative preset: per-group automatic columns, a `~` gap, and
    /// boxed tables.
    pub fn fancy() -> Self {
        TableOptions {
            policy: SplitPolicy::default(),
            gap: " ~ ".to_string(),
            format: TableFormat::FancyGrid,
            ..Self::default()
        }
    }

    pub fn policy(mut self, policy: SplitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parses a textual column policy (`"auto"`, `"3"`, `"sub-2"`, ...).
    pub fn policy_str(mut self, spec: &str) -> Result<Self, crate::RenderError> {
        self.policy = spec.parse()?;
        Ok(self)
    }

    pub fn gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    pub fn headers(mut self, arg: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers = (arg.into(), value.into());
        self
    }
}

/// Which presentation [`print_args`] produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Show {
    /// One `TypeName(key=value, ...)` line.
    #[default]
    Inline,
    /// Side-by-side aligned tables.
    Table,
}

/// Options for the orchestration entry points.
#[derive(Clone, Debug, Default)]
pub struct PrintOptions {
    pub show: Show,
    /// Truncate long values instead of wrapping them.
    pub shorten: bool,
    pub table: TableOptions,
}

/// Renders the full tabular view of a populated group.
///
/// # Example
///
/// ```rust
/// use argview_render::{format_table, ArgGroup, Palette, TableOptions};
///
/// let args = ArgGroup::new("Args").leaf("a", 1).leaf("b", 2);
/// let table = format_table(&args, &TableOptions::default(), false, &Palette::plain());
/// assert_eq!(table, "arg  value\n---  -----\na    1\nb    2");
/// ```
pub fn format_table(
    group: &ArgGroup,
    options: &TableOptions,
    shorten_values: bool,
    palette: &Palette,
) -> String {
    let rows = flatten(group);
    let chunks = match options.policy {
        SplitPolicy::Columns(count) => split_into_columns(&rows, count),
        SplitPolicy::PerGroup(count) => split_by_group(&rows, count),
    };

    let headers = (
        palette.paint(&palette.header, &options.headers.0),
        palette.paint(&palette.header, &options.headers.1),
    );
    let blocks: Vec<String> = chunks
        .iter()
        .map(|chunk| {
            let cells: Vec<(String, String)> = chunk
                .iter()
                .map(|row| prepare_cell(row, shorten_values, palette))
                .collect();
            render_table(&cells, Some((headers.0.as_str(), headers.1.as_str())), options.format)
        })
        .collect();
    merge_columns(&blocks, &options.gap)
}

/// Stringifies, styles, and fits one row for the table renderer.
fn prepare_cell(row: &FlatRow, shorten_values: bool, palette: &Palette) -> (String, String) {
    let key = palette.paint(&palette.key, &row.qualified());
    let value = match &row.value {
        None => palette.missing_marker(),
        Some(v) => {
            let text = value_str(v);
            let text = if shorten_values {
                shorten(&text, VALUE_WRAP_WIDTH, ELLIPSIS)
            } else {
                fill(&shorten(&text, VALUE_CEILING, ELLIPSIS), VALUE_WRAP_WIDTH)
            };
            palette.paint(&palette.value, &text)
        }
    };
    (key, value)
}

/// Renders either presentation to a string.
pub fn render_args(group: &ArgGroup, options: &PrintOptions, palette: &Palette) -> String {
    match options.show {
        Show::Inline => format_inline(group, options.shorten, palette),
        Show::Table => format_table(group, &options.table, options.shorten, palette),
    }
}

/// Renders to the given sink, followed by a newline.
pub fn print_args_to<W: Write>(
    group: &ArgGroup,
    options: &PrintOptions,
    palette: &Palette,
    sink: &mut W,
) -> io::Result<()> {
    writeln!(sink, "{}", render_args(group, options, palette))
}

/// Renders to standard output.
pub fn print_args(group: &ArgGroup, options: &PrintOptions, palette: &Palette) -> io::Result<()> {
    print_args_to(group, options, palette, &mut io::stdout())
}
