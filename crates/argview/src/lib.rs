//! # argview
//!
//! Declarative command-line arguments on top of clap, with readable
//! display of the parsed result.
//!
//! Arguments are declared as plain data ([`ArgSpec`] + [`Opt`]), translated
//! into a clap `Command`, and parsed into a named-value tree. The tree can
//! then be printed back to the user — either as a compact
//! `Name(key=value, ...)` line or as side-by-side aligned tables, with
//! sub-command arguments kept visually together. The display engine lives
//! in the `argview-render` crate and is re-exported here.
//!
//! ## Declaring and parsing
//!
//! ```rust
//! use argview::{parse_str, ArgSpec, Opt, ParseOptions};
//!
//! let export = ArgSpec::new("Export")
//!     .opt(Opt::new("path").default("out.json"))
//!     .opt(Opt::new("quantize").default(false));
//!
//! let spec = ArgSpec::new("TrainArgs")
//!     .opt(Opt::new("epochs").int().default(10).help("Training epochs"))
//!     .opt(Opt::new("learning_rate").default(0.01))
//!     .opt(Opt::new("resume").flag())
//!     .sub("export", export);
//!
//! let args = parse_str(&spec, "--epochs 20 --resume", &ParseOptions::plain()).unwrap();
//! assert_eq!(args.get_int("epochs"), Some(20));
//! assert_eq!(args.get_bool("resume"), Some(true));
//! // The generated shortcut also works: `--lr 0.1`.
//! ```
//!
//! Booleans follow the flag-pair convention: `--resume` sets true,
//! `--no-resume` sets false, and the declared default applies otherwise.
//!
//! ## Showing the parsed set
//!
//! ```rust
//! use argview::{format_table, parse_str, ArgSpec, Opt, Palette, ParseOptions, TableOptions};
//!
//! let spec = ArgSpec::new("Args")
//!     .opt(Opt::new("batch").int().default(32))
//!     .opt(Opt::new("tag"));
//!
//! let args = parse_str(&spec, "", &ParseOptions::plain()).unwrap();
//! let table = format_table(args.group(), &TableOptions::default(), false, &Palette::plain());
//! assert_eq!(table, "arg    value\n-----  -----\nbatch  32\ntag    -");
//! ```
//!
//! Passing `show` in [`ParseOptions`] prints the same thing straight to
//! standard output after parsing. Column policies (`"auto"`, `"3"`,
//! `"sub-2"`, ...) and table formats are forwarded to the display engine;
//! see [`TableOptions`].

mod command;
mod error;
mod field;
mod parse;
mod spec;

pub use error::ParseError;
pub use field::{Opt, ValueKind};
pub use parse::{parse, parse_from, parse_str, ParseOptions, ParsedArgs};
pub use spec::ArgSpec;

// The display engine, re-exported.
pub use argview_render::{
    flatten, format_inline, format_table, merge_columns, print_args, print_args_to, render_args,
    render_table, split_by_group, split_into_columns, value_repr, value_str, visible_width,
    ArgGroup, ArgValue, ColumnCount, FlatRow, Palette, PrintOptions, RenderError, Show,
    SplitPolicy, TableFormat, TableOptions, GROUP_SEPARATOR, MISSING_MARK, ROWS_PER_COLUMN,
};
