//! # argview-render
//!
//! Inline and multi-column tabular rendering for populated argument sets.
//!
//! The input is a nested named-value tree ([`ArgGroup`]) built by an
//! argument-population layer (see the `argview` crate). This crate turns
//! that tree into display text two ways:
//!
//! - **Inline**: one `TypeName(key=value, ...)` line, via [`format_inline`].
//! - **Tabular**: the tree is flattened into qualified `(key, value)` rows,
//!   partitioned into one or more row-groups, each row-group rendered as an
//!   aligned table, and the resulting blocks merged side by side, via
//!   [`format_table`].
//!
//! All width arithmetic ignores embedded ANSI styling, so colored output
//! aligns exactly like plain output. Styling itself is explicit: every
//! entry point takes a [`Palette`], and a plain palette produces
//! deterministic uncolored text.
//!
//! ## Quick start
//!
//! ```rust
//! use argview_render::{render_args, ArgGroup, Palette, PrintOptions};
//!
//! let args = ArgGroup::new("TrainArgs")
//!     .leaf("epochs", 20)
//!     .leaf("lr", 0.1)
//!     .missing("resume");
//!
//! let line = render_args(&args, &PrintOptions::default(), &Palette::plain());
//! assert_eq!(line, "TrainArgs(epochs=20, lr=0.1, resume=-)");
//! ```
//!
//! ## Tabular output
//!
//! ```rust
//! use argview_render::{format_table, ArgGroup, Palette, TableOptions};
//!
//! let args = ArgGroup::new("Args")
//!     .leaf("batch", 32)
//!     .group("export", ArgGroup::new("Export").leaf("path", "out.json"));
//!
//! let table = format_table(&args, &TableOptions::default(), false, &Palette::plain());
//! assert!(table.contains("export__path"));
//! ```
//!
//! Column policies (`"auto"`, a count, or per-sub-group variants like
//! `"sub-2"`) control how many blocks appear side by side; see
//! [`SplitPolicy`].

mod display;
mod error;
mod flatten;
mod inline;
mod layout;
mod style;
mod table;
mod text;
mod value;

pub use display::{
    format_table, print_args, print_args_to, render_args, PrintOptions, Show, TableOptions,
};
pub use error::RenderError;
pub use flatten::{flatten, FlatRow, GROUP_SEPARATOR};
pub use inline::{format_inline, value_repr, value_str};
pub use layout::{
    merge_columns, split_by_group, split_into_columns, ColumnCount, SplitPolicy, ROWS_PER_COLUMN,
};
pub use style::{Palette, MISSING_MARK};
pub use table::{render_table, TableFormat};
pub use text::{fill, shorten, visible_width};
pub use value::{ArgGroup, ArgValue};
