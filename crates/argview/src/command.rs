//! Translation of a declared spec into the underlying parsing engine.
//!
//! Each [`Opt`] becomes one clap `Arg`, except boolean flag-pair options
//! which become two: a visible `--flag` and a hidden `--no-flag`, each
//! overriding the other so the last occurrence wins. Help text is composed
//! from the declared kind and default, and auto-generated shortcut aliases
//! (`learning_rate` → `lr`) are added per command level.

use std::collections::HashSet;

use clap::builder::styling::{AnsiColor, Styles};
use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, Command};

use argview_render::value_repr;

use crate::field::{Opt, ValueKind};
use crate::parse::ParseOptions;
use crate::spec::{ArgSpec, SpecEntry};

/// Help colors matching the display palette: yellow headings, green
/// invocations.
fn help_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Yellow.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Builds the full command tree for a spec.
pub(crate) fn build_command(spec: &ArgSpec, options: &ParseOptions) -> Command {
    let mut cmd = Command::new(spec.name.clone()).styles(if options.palette.styled {
        help_styles()
    } else {
        Styles::plain()
    });
    if let Some(about) = &spec.about {
        cmd = cmd.about(about.clone());
    }
    for entry in &spec.entries {
        match entry {
            SpecEntry::Opt(opt) => {
                for arg in build_args(opt, options) {
                    cmd = cmd.arg(arg);
                }
            }
            SpecEntry::Sub(field, sub) => {
                cmd = cmd.subcommand(build_command(sub, options).name(field.clone()));
            }
        }
    }
    cmd
}

fn build_args(opt: &Opt, options: &ParseOptions) -> Vec<Arg> {
    if opt.positional {
        return vec![typed(positional_base(opt), opt)];
    }
    if opt.kind == ValueKind::Bool && opt.bool_flag {
        return flag_pair(opt, options);
    }
    let arg = Arg::new(opt.name.clone()).help(compose_help(opt));
    vec![typed(named(arg, opt, options), opt)]
}

fn positional_base(opt: &Opt) -> Arg {
    let mut arg = Arg::new(opt.name.clone()).help(compose_help(opt));
    if opt.required {
        arg = arg.required(true);
    }
    arg
}

/// The `--flag` / `--no-flag` pair for a boolean option.
fn flag_pair(opt: &Opt, options: &ParseOptions) -> Vec<Arg> {
    let no_id = format!("no-{}", opt.name);
    let yes = named(
        Arg::new(opt.name.clone())
            .action(ArgAction::SetTrue)
            .overrides_with(no_id.clone())
            .help(compose_help(opt)),
        opt,
        options,
    );
    let no = Arg::new(no_id)
        .long(format!("no-{}", long_name(&opt.name, options)))
        .action(ArgAction::SetTrue)
        .overrides_with(opt.name.clone())
        .hide(true);
    vec![yes, no]
}

/// Attaches long/short names and aliases to a dashed option.
fn named(mut arg: Arg, opt: &Opt, options: &ParseOptions) -> Arg {
    let primary = long_name(&opt.name, options);
    let mut has_short = false;
    if let Some(c) = single_char(&primary) {
        arg = arg.short(c);
        has_short = true;
    } else {
        arg = arg.long(primary);
    }
    for alias in &opt.aliases {
        let alias = long_name(alias, options);
        match single_char(&alias) {
            Some(c) if !has_short => {
                arg = arg.short(c);
                has_short = true;
            }
            Some(c) => arg = arg.visible_short_alias(c),
            None => arg = arg.visible_alias(alias),
        }
    }
    if let Some(metavar) = &opt.metavar {
        arg = arg.value_name(metavar.clone());
    }
    arg
}

/// Applies the value parser and arity for the declared kind.
fn typed(arg: Arg, opt: &Opt) -> Arg {
    match &opt.kind {
        ValueKind::Bool => arg.value_parser(BoolishValueParser::new()),
        ValueKind::Int => arg.value_parser(clap::value_parser!(i64)),
        ValueKind::Float => arg.value_parser(clap::value_parser!(f64)),
        ValueKind::Str => arg.value_parser(clap::value_parser!(String)),
        ValueKind::List(inner) => {
            let arg = match inner.as_ref() {
                ValueKind::Int => arg.value_parser(clap::value_parser!(i64)),
                ValueKind::Float => arg.value_parser(clap::value_parser!(f64)),
                ValueKind::Bool => arg.value_parser(BoolishValueParser::new()),
                _ => arg.value_parser(clap::value_parser!(String)),
            };
            // An empty (or absent) default accepts zero values, a
            // populated one requires at least one.
            let at_least_one = matches!(&opt.default, Some(serde_json::Value::Array(items)) if !items.is_empty());
            let arg = if at_least_one {
                arg.num_args(1..)
            } else {
                arg.num_args(0..)
            };
            arg.action(ArgAction::Set)
        }
    }
}

fn long_name(name: &str, options: &ParseOptions) -> String {
    if options.replace_underscores {
        name.replace('_', "-")
    } else {
        name.to_string()
    }
}

fn single_char(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// `"int, default: 10. Training epochs"` — kind and default first, the
/// declared help after.
fn compose_help(opt: &Opt) -> String {
    let mut text = opt.kind.to_string();
    if let Some(default) = &opt.default {
        text.push_str(&format!(", default: {}", value_repr(default)));
    }
    if let Some(help) = &opt.help {
        text = format!("{text}. {help}");
    }
    text
}

/// `aaa_bbb` → `ab`: the first letter of each underscore-separated part.
fn shortcut(name: &str) -> String {
    name.split('_')
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Adds shortcut aliases to arguments that declare none, skipping names
/// already taken. Applied independently at every command level.
pub(crate) fn apply_shortcuts(spec: &mut ArgSpec) {
    let mut used: HashSet<String> = HashSet::new();
    // The engine's own help flags are off limits.
    used.insert("h".to_string());
    used.insert("help".to_string());
    for opt in spec.opts() {
        used.insert(opt.name.clone());
        used.extend(opt.aliases.iter().cloned());
    }
    for entry in &mut spec.entries {
        match entry {
            SpecEntry::Opt(opt) if !opt.positional && opt.aliases.is_empty() => {
                let short = shortcut(&opt.name);
                if !short.is_empty() && !used.contains(&short) {
                    used.insert(short.clone());
                    opt.aliases.push(short);
                }
            }
            SpecEntry::Sub(_, sub) => apply_shortcuts(sub),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_derivation() {
        assert_eq!(shortcut("aaa"), "a");
        assert_eq!(shortcut("aaa_bbb"), "ab");
        assert_eq!(shortcut("learning_rate"), "lr");
        assert_eq!(shortcut("_x"), "x");
    }

    #[test]
    fn test_shortcuts_skip_taken_names() {
        let mut spec = ArgSpec::new("Args")
            .opt(Opt::new("alpha"))
            .opt(Opt::new("aaa"))
            .opt(Opt::new("beta_gamma"));
        apply_shortcuts(&mut spec);
        let aliases: Vec<Vec<String>> = spec.opts().map(|o| o.aliases.clone()).collect();
        assert_eq!(aliases[0], vec!["a".to_string()]);
        // "a" is taken by the first option's shortcut.
        assert!(aliases[1].is_empty());
        assert_eq!(aliases[2], vec!["bg".to_string()]);
    }

    #[test]
    fn test_shortcuts_leave_declared_aliases_alone() {
        let mut spec = ArgSpec::new("Args").opt(Opt::new("verbose").alias("vv"));
        apply_shortcuts(&mut spec);
        let opt = spec.opts().next().unwrap();
        assert_eq!(opt.aliases, vec!["vv".to_string()]);
    }

    #[test]
    fn test_shortcuts_never_shadow_help() {
        let mut spec = ArgSpec::new("Args").opt(Opt::new("hello"));
        apply_shortcuts(&mut spec);
        assert!(spec.opts().next().unwrap().aliases.is_empty());
    }

    #[test]
    fn test_compose_help() {
        let opt = Opt::new("epochs").int().default(10).help("Training epochs");
        assert_eq!(compose_help(&opt), "int, default: 10. Training epochs");
        let opt = Opt::new("resume").flag();
        assert_eq!(compose_help(&opt), "bool");
    }
}
