//! Integration tests for the declarative layer and clap translation.

use argview::{
    format_inline, format_table, parse_from, parse_str, ArgSpec, ArgValue, ColumnCount, Opt,
    Palette, ParseError, ParseOptions, SplitPolicy, TableOptions, ValueKind,
};
use serde_json::json;

fn plain() -> ParseOptions {
    ParseOptions::plain()
}

fn basic_spec() -> ArgSpec {
    ArgSpec::new("Args")
        .opt(Opt::new("alpha").int())
        .opt(Opt::new("beta").default(4.5))
        .opt(Opt::new("gamma").default(true))
}

#[test]
fn test_typed_values_and_defaults() {
    let args = parse_str(&basic_spec(), "--alpha 1 --beta 2.2", &plain()).unwrap();
    assert_eq!(args.get_int("alpha"), Some(1));
    assert_eq!(args.get_float("beta"), Some(2.2));
    assert_eq!(args.get_bool("gamma"), Some(true));

    let args = parse_str(&basic_spec(), "", &plain()).unwrap();
    assert!(args.get("alpha").unwrap().is_missing());
    assert_eq!(args.get_float("beta"), Some(4.5));
}

#[test]
fn test_bool_flag_pair() {
    let spec = ArgSpec::new("Args").opt(Opt::new("cache").default(true));
    assert_eq!(
        parse_str(&spec, "--cache", &plain()).unwrap().get_bool("cache"),
        Some(true)
    );
    assert_eq!(
        parse_str(&spec, "--no-cache", &plain()).unwrap().get_bool("cache"),
        Some(false)
    );
    assert_eq!(
        parse_str(&spec, "", &plain()).unwrap().get_bool("cache"),
        Some(true)
    );
    // The later occurrence wins.
    assert_eq!(
        parse_str(&spec, "--cache --no-cache", &plain())
            .unwrap()
            .get_bool("cache"),
        Some(false)
    );
}

#[test]
fn test_bool_as_value_option() {
    let spec = ArgSpec::new("Args").opt(Opt::new("cache").flag().value_flag());
    assert_eq!(
        parse_str(&spec, "--cache yes", &plain()).unwrap().get_bool("cache"),
        Some(true)
    );
    assert_eq!(
        parse_str(&spec, "--cache 0", &plain()).unwrap().get_bool("cache"),
        Some(false)
    );
}

#[test]
fn test_underscores_become_dashes() {
    let spec = ArgSpec::new("Args").opt(Opt::new("learning_rate").default(0.01));
    let args = parse_str(&spec, "--learning-rate 0.1", &plain()).unwrap();
    assert_eq!(args.get_float("learning_rate"), Some(0.1));
}

#[test]
fn test_generated_shortcuts() {
    let spec = ArgSpec::new("Args")
        .opt(Opt::new("learning_rate").default(0.01))
        .opt(Opt::new("momentum").default(0.9));
    let args = parse_str(&spec, "--lr 0.2 -m 0.5", &plain()).unwrap();
    assert_eq!(args.get_float("learning_rate"), Some(0.2));
    assert_eq!(args.get_float("momentum"), Some(0.5));
}

#[test]
fn test_shortcuts_can_be_disabled() {
    let spec = ArgSpec::new("Args").opt(Opt::new("momentum").default(0.9));
    let options = ParseOptions {
        make_shortcuts: false,
        ..plain()
    };
    assert!(matches!(
        parse_str(&spec, "-m 0.5", &options),
        Err(ParseError::Clap(_))
    ));
}

#[test]
fn test_positional_arguments() {
    let spec = ArgSpec::new("Args")
        .opt(Opt::positional("source").required())
        .opt(Opt::new("count").int().default(1));
    let args = parse_str(&spec, "input.txt --count 3", &plain()).unwrap();
    assert_eq!(args.get_str("source"), Some("input.txt"));
    assert_eq!(args.get_int("count"), Some(3));

    assert!(parse_str(&spec, "", &plain()).is_err());
}

#[test]
fn test_list_values() {
    let spec = ArgSpec::new("Args").opt(Opt::new("ids").list(ValueKind::Int));
    let args = parse_str(&spec, "--ids 1 2 3", &plain()).unwrap();
    assert_eq!(args.get_list("ids").unwrap(), &vec![json!(1), json!(2), json!(3)]);

    let spec = ArgSpec::new("Args").opt(Opt::new("ids").default(json!([7])));
    let args = parse_str(&spec, "", &plain()).unwrap();
    assert_eq!(args.get_list("ids").unwrap(), &vec![json!(7)]);
}

#[test]
fn test_subcommand_population() {
    let sub = ArgSpec::new("Sub").opt(Opt::new("a").int().default(1));
    let spec = ArgSpec::new("Args").sub("sub", sub);

    let args = parse_str(&spec, "sub -a 2", &plain()).unwrap();
    let sub = args.sub("sub").unwrap();
    assert_eq!(sub.get("a").unwrap().as_leaf().unwrap(), &json!(2));

    // Unchosen sub-commands stay a single missing slot.
    let args = parse_str(&spec, "", &plain()).unwrap();
    assert!(args.get("sub").unwrap().is_missing());
    assert!(args.sub("sub").is_none());
}

#[test]
fn test_nested_subcommands_display_grouped() {
    let export = ArgSpec::new("Export")
        .opt(Opt::new("path").default("out.json"))
        .opt(Opt::new("quantize").default(false));
    let spec = ArgSpec::new("TrainArgs")
        .opt(Opt::new("epochs").int().default(10))
        .sub("export", export);

    let args = parse_str(&spec, "export --path model.bin", &plain()).unwrap();
    let table = format_table(
        args.group(),
        &TableOptions::default().policy(SplitPolicy::PerGroup(ColumnCount::Fixed(1))),
        false,
        &Palette::plain(),
    );
    assert!(table.contains("export__path"));
    assert!(table.contains("model.bin"));
    assert!(table.contains("export__quantize"));

    let inline = format_inline(args.group(), false, &Palette::plain());
    assert_eq!(
        inline,
        "TrainArgs(epochs=10, export=Export(path=\"model.bin\", quantize=false))"
    );
}

#[test]
fn test_parse_from_token_slice() {
    let args = parse_from(&basic_spec(), ["--alpha", "7"], &plain()).unwrap();
    assert_eq!(args.get_int("alpha"), Some(7));
}

#[test]
fn test_quoted_strings_in_command_line() {
    let spec = ArgSpec::new("Args").opt(Opt::new("msg"));
    let args = parse_str(&spec, "--msg 'hello world'", &plain()).unwrap();
    assert_eq!(args.get_str("msg"), Some("hello world"));
}

#[test]
fn test_unterminated_quote_is_a_command_line_error() {
    let spec = ArgSpec::new("Args").opt(Opt::new("msg"));
    assert!(matches!(
        parse_str(&spec, "--msg 'oops", &plain()),
        Err(ParseError::CommandLine(_))
    ));
}

#[test]
fn test_unknown_option_propagates_clap_error() {
    assert!(matches!(
        parse_str(&basic_spec(), "--nope 1", &plain()),
        Err(ParseError::Clap(_))
    ));
}

#[test]
fn test_bad_type_propagates_clap_error() {
    assert!(matches!(
        parse_str(&basic_spec(), "--alpha not-a-number", &plain()),
        Err(ParseError::Clap(_))
    ));
}

#[test]
fn test_group_tree_round_trips_to_json() {
    let args = parse_str(&basic_spec(), "--alpha 3", &plain()).unwrap();
    assert_eq!(
        args.group().to_json(),
        json!({"alpha": 3, "beta": 4.5, "gamma": true})
    );
}

#[test]
fn test_declared_alias() {
    let spec = ArgSpec::new("Args").opt(Opt::new("verbose").default(false).alias("vv"));
    let args = parse_str(&spec, "--vv", &plain()).unwrap();
    assert_eq!(args.get_bool("verbose"), Some(true));
}

#[test]
fn test_missing_values_render_as_marker() {
    let spec = ArgSpec::new("Args").opt(Opt::new("tag"));
    let args = parse_str(&spec, "", &plain()).unwrap();
    assert!(args.get("tag").unwrap().is_missing());
    assert_eq!(
        format_inline(args.group(), false, &Palette::plain()),
        "Args(tag=-)"
    );
    assert!(matches!(args.get("tag").unwrap(), ArgValue::Missing));
}
