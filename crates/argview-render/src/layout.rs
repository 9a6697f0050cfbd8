//! Partitioning rows into columns and merging rendered blocks.
//!
//! The layout pipeline is: decide how many side-by-side blocks to produce
//! ([`ColumnCount`]), slice the flattened rows into row-groups
//! ([`split_into_columns`] / [`split_by_group`]), render each row-group
//! independently, and stitch the blocks back together ([`merge_columns`]).
//! No row is ever dropped or duplicated, and row order survives end to end.

use std::str::FromStr;

use console::{pad_str, Alignment};

use crate::error::RenderError;
use crate::flatten::FlatRow;
use crate::text::visible_width;

/// Rows a column may hold before the automatic policy adds another column.
pub const ROWS_PER_COLUMN: usize = 9;

/// How many side-by-side blocks to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnCount {
    /// One column per [`ROWS_PER_COLUMN`] rows, rounded up.
    Auto,
    /// An explicit count.
    Fixed(usize),
}

impl ColumnCount {
    /// Resolves to a concrete count for `rows` rows.
    ///
    /// `Auto` over zero rows resolves to 0; slicing treats that as one
    /// column, so callers get no chunks rather than a division error.
    pub fn resolve(&self, rows: usize) -> usize {
        match self {
            ColumnCount::Auto => rows.div_ceil(ROWS_PER_COLUMN),
            ColumnCount::Fixed(n) => *n,
        }
    }
}

/// Full partitioning policy: split the flat row list, or split within each
/// sub-group independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Slice the whole row sequence into this many columns.
    Columns(ColumnCount),
    /// Keep sub-groups contiguous and slice each one on its own.
    PerGroup(ColumnCount),
}

impl Default for SplitPolicy {
    fn default() -> Self {
        SplitPolicy::PerGroup(ColumnCount::Auto)
    }
}

impl FromStr for SplitPolicy {
    type Err = RenderError;

    /// Accepts `""` (one column), `"auto"`, `"N"`, `"sub"`, `"sub-auto"`,
    /// and `"sub-N"`. Anything else is an error rather than a silent
    /// fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argview_render::{ColumnCount, SplitPolicy};
    ///
    /// let policy: SplitPolicy = "sub-2".parse().unwrap();
    /// assert_eq!(policy, SplitPolicy::PerGroup(ColumnCount::Fixed(2)));
    /// assert!("sub-two".parse::<SplitPolicy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        if spec.is_empty() {
            return Ok(SplitPolicy::Columns(ColumnCount::Fixed(1)));
        }
        if spec == "auto" {
            return Ok(SplitPolicy::Columns(ColumnCount::Auto));
        }
        if spec == "sub" {
            return Ok(SplitPolicy::PerGroup(ColumnCount::Fixed(1)));
        }
        if let Some(rest) = spec.strip_prefix("sub-") {
            if rest == "auto" {
                return Ok(SplitPolicy::PerGroup(ColumnCount::Auto));
            }
            let n = rest
                .parse()
                .map_err(|_| RenderError::InvalidColumns(spec.to_string()))?;
            return Ok(SplitPolicy::PerGroup(ColumnCount::Fixed(n)));
        }
        let n = spec
            .parse()
            .map_err(|_| RenderError::InvalidColumns(spec.to_string()))?;
        Ok(SplitPolicy::Columns(ColumnCount::Fixed(n)))
    }
}

/// Slices `rows` into consecutive chunks of `ceil(len / count)` rows.
///
/// Produces at most `count` chunks and never an empty one; a resolved
/// count of zero is clamped to one.
pub fn split_into_columns<T: Clone>(rows: &[T], count: ColumnCount) -> Vec<Vec<T>> {
    if rows.is_empty() {
        return Vec::new();
    }
    let columns = count.resolve(rows.len()).max(1);
    let chunk = rows.len().div_ceil(columns);
    rows.chunks(chunk).map(<[T]>::to_vec).collect()
}

/// Partitions rows by their structural group path, then slices each group
/// independently with `count`.
///
/// Groups appear in first-seen order and keep their internal order; rows
/// with an empty path form their own group. The result is the
/// concatenation of each group's chunks, so one chunk never mixes rows
/// from two groups.
pub fn split_by_group(rows: &[FlatRow], count: ColumnCount) -> Vec<Vec<FlatRow>> {
    let mut groups: Vec<(&[String], Vec<FlatRow>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(path, _)| *path == row.path.as_slice()) {
            Some((_, members)) => members.push(row.clone()),
            None => groups.push((row.path.as_slice(), vec![row.clone()])),
        }
    }
    groups
        .into_iter()
        .flat_map(|(_, members)| split_into_columns(&members, count))
        .collect()
}

/// Merges rendered blocks side by side, separated by `gap`.
///
/// Each block's column width is the maximum visible width over its lines;
/// every line is padded to that width (measured in display cells, so
/// styled lines stay aligned). The output has exactly as many lines as
/// the tallest block; shorter blocks contribute blank padded cells.
///
/// # Example
///
/// ```rust
/// use argview_render::merge_columns;
///
/// let merged = merge_columns(&["a\nbb".to_string(), "xx\nyy".to_string()], " | ");
/// assert_eq!(merged, "a  | xx\nbb | yy");
/// ```
pub fn merge_columns(blocks: &[String], gap: &str) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let parts: Vec<Vec<&str>> = blocks.iter().map(|b| b.lines().collect()).collect();
    let widths: Vec<usize> = parts
        .iter()
        .map(|lines| lines.iter().map(|l| visible_width(l)).max().unwrap_or(0))
        .collect();
    let height = parts.iter().map(Vec::len).max().unwrap_or(0);

    let mut merged = Vec::with_capacity(height);
    for i in 0..height {
        let mut row = String::new();
        for (j, lines) in parts.iter().enumerate() {
            let cell = lines.get(i).copied().unwrap_or("");
            row.push_str(&pad_str(cell, widths[j], Alignment::Left, None));
            if j != parts.len() - 1 {
                row.push_str(gap);
            }
        }
        merged.push(row);
    }
    merged.join("\n")
}
