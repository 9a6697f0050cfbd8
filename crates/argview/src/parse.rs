//! Parse entry points and extraction of populated values.
//!
//! Parsing produces a [`ParsedArgs`]: the declared tree with every slot
//! filled from the command line, a default, or marked missing. The same
//! tree is what the display layer consumes, so `show` options print the
//! result right after parsing.

use clap::ArgMatches;
use serde_json::Value;

use argview_render::{
    print_args, ArgGroup, ArgValue, Palette, PrintOptions, RenderError, Show, TableOptions,
};

use crate::command::{apply_shortcuts, build_command};
use crate::error::ParseError;
use crate::field::{Opt, ValueKind};
use crate::spec::{ArgSpec, SpecEntry};

/// Options controlling parsing and the optional display of the result.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Print the populated set after parsing, inline or as tables.
    pub show: Option<Show>,
    /// Truncate long values in the printed output.
    pub shorten: bool,
    /// Table options used when `show` is [`Show::Table`].
    pub table: TableOptions,
    /// Styling for the printed output and for help text.
    pub palette: Palette,
    /// Generate shortcut aliases (`learning_rate` → `lr`).
    pub make_shortcuts: bool,
    /// Use dashes instead of underscores in option names.
    pub replace_underscores: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            show: None,
            shorten: false,
            table: TableOptions::default(),
            palette: Palette::colored(),
            make_shortcuts: true,
            replace_underscores: true,
        }
    }
}

impl ParseOptions {
    /// A quiet, unstyled configuration; handy in tests and pipelines.
    pub fn plain() -> Self {
        ParseOptions {
            palette: Palette::plain(),
            ..Self::default()
        }
    }

    pub fn show(mut self, show: Show) -> Self {
        self.show = Some(show);
        self
    }

    pub fn shorten(mut self, shorten: bool) -> Self {
        self.shorten = shorten;
        self
    }

    pub fn table(mut self, table: TableOptions) -> Self {
        self.table = table;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// The populated argument set.
///
/// Wraps the named-value tree with typed accessors; the tree itself is
/// available through [`ParsedArgs::group`] for display or serialization.
#[derive(Clone, Debug)]
pub struct ParsedArgs {
    values: ArgGroup,
}

impl ParsedArgs {
    pub fn group(&self) -> &ArgGroup {
        &self.values
    }

    pub fn into_group(self) -> ArgGroup {
        self.values
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    fn leaf(&self, name: &str) -> Option<&Value> {
        self.values.get(name)?.as_leaf()
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.leaf(name)?.as_i64()
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.leaf(name)?.as_f64()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.leaf(name)?.as_bool()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.leaf(name)?.as_str()
    }

    pub fn get_list(&self, name: &str) -> Option<&Vec<Value>> {
        self.leaf(name)?.as_array()
    }

    /// The populated sub-command group, if this sub-command was chosen.
    pub fn sub(&self, name: &str) -> Option<&ArgGroup> {
        self.values.get(name)?.as_group()
    }
}

/// Parses the given argument tokens (without a leading program name).
pub fn parse_from<I, S>(
    spec: &ArgSpec,
    argv: I,
    options: &ParseOptions,
) -> Result<ParsedArgs, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut spec = spec.clone();
    if options.make_shortcuts {
        apply_shortcuts(&mut spec);
    }
    let command = build_command(&spec, options);
    let argv: Vec<String> = std::iter::once(spec.name.clone())
        .chain(argv.into_iter().map(Into::into))
        .collect();
    let matches = command.try_get_matches_from(argv)?;

    let parsed = ParsedArgs {
        values: extract_group(&spec, &matches),
    };
    if let Some(show) = options.show {
        let print = PrintOptions {
            show,
            shorten: options.shorten,
            table: options.table.clone(),
        };
        print_args(parsed.group(), &print, &options.palette).map_err(RenderError::from)?;
    }
    Ok(parsed)
}

/// Splits a command string shell-style and parses it.
///
/// # Example
///
/// ```rust
/// use argview::{parse_str, ArgSpec, Opt, ParseOptions};
///
/// let spec = ArgSpec::new("Args")
///     .opt(Opt::new("a").int())
///     .opt(Opt::new("b").default(4.5))
///     .opt(Opt::new("c").default(true));
///
/// let args = parse_str(&spec, "-a 1 -b 2.2 --no-c", &ParseOptions::plain()).unwrap();
/// assert_eq!(args.get_int("a"), Some(1));
/// assert_eq!(args.get_float("b"), Some(2.2));
/// assert_eq!(args.get_bool("c"), Some(false));
/// ```
pub fn parse_str(
    spec: &ArgSpec,
    line: &str,
    options: &ParseOptions,
) -> Result<ParsedArgs, ParseError> {
    let argv = shell_words::split(line)?;
    parse_from(spec, argv, options)
}

/// Parses the process command line, exiting on errors and `--help` the
/// way a command-line tool is expected to.
pub fn parse(spec: &ArgSpec, options: &ParseOptions) -> Result<ParsedArgs, ParseError> {
    match parse_from(spec, std::env::args().skip(1), options) {
        Err(ParseError::Clap(e)) => e.exit(),
        other => other,
    }
}

fn extract_group(spec: &ArgSpec, matches: &ArgMatches) -> ArgGroup {
    let mut group = ArgGroup::new(spec.name.clone());
    for entry in &spec.entries {
        match entry {
            SpecEntry::Opt(opt) => {
                group.push(opt.name.clone(), extract_value(opt, matches));
            }
            SpecEntry::Sub(field, sub) => {
                let value = match matches.subcommand() {
                    Some((chosen, sub_matches)) if chosen == field => {
                        ArgValue::Group(extract_group(sub, sub_matches))
                    }
                    _ => ArgValue::Missing,
                };
                group.push(field.clone(), value);
            }
        }
    }
    group
}

fn extract_value(opt: &Opt, matches: &ArgMatches) -> ArgValue {
    if opt.kind == ValueKind::Bool && opt.bool_flag && !opt.positional {
        let no_id = format!("no-{}", opt.name);
        if matches.get_flag(&no_id) {
            return ArgValue::leaf(false);
        }
        if matches.get_flag(&opt.name) {
            return ArgValue::leaf(true);
        }
        return declared_default(opt);
    }

    let provided = match &opt.kind {
        ValueKind::Bool => matches.get_one::<bool>(&opt.name).map(|v| Value::Bool(*v)),
        ValueKind::Int => matches.get_one::<i64>(&opt.name).map(|v| Value::from(*v)),
        ValueKind::Float => matches.get_one::<f64>(&opt.name).map(|v| Value::from(*v)),
        ValueKind::Str => matches
            .get_one::<String>(&opt.name)
            .map(|v| Value::from(v.clone())),
        ValueKind::List(inner) => collect_list(inner, &opt.name, matches),
    };
    match provided {
        Some(value) => ArgValue::Leaf(value),
        None => declared_default(opt),
    }
}

fn declared_default(opt: &Opt) -> ArgValue {
    match &opt.default {
        Some(value) => ArgValue::Leaf(value.clone()),
        None => ArgValue::Missing,
    }
}

fn collect_list(inner: &ValueKind, name: &str, matches: &ArgMatches) -> Option<Value> {
    match inner {
        ValueKind::Int => matches
            .get_many::<i64>(name)
            .map(|vals| Value::Array(vals.map(|v| Value::from(*v)).collect())),
        ValueKind::Float => matches
            .get_many::<f64>(name)
            .map(|vals| Value::Array(vals.map(|v| Value::from(*v)).collect())),
        ValueKind::Bool => matches
            .get_many::<bool>(name)
            .map(|vals| Value::Array(vals.map(|v| Value::Bool(*v)).collect())),
        _ => matches
            .get_many::<String>(name)
            .map(|vals| Value::Array(vals.map(|v| Value::from(v.clone())).collect())),
    }
}
