//! A small training-style CLI showing declaration, parsing, and display.
//!
//! Try:
//!
//! ```text
//! cargo run --example train -- --epochs 20 --lr 0.1
//! cargo run --example train -- export --path model.bin
//! cargo run --example train -- --help
//! ```

use argview::{
    parse, ArgSpec, Opt, ParseOptions, Show, TableOptions, ValueKind,
};

fn main() {
    let export = ArgSpec::new("Export")
        .about("Write the trained model to disk")
        .opt(Opt::new("path").default("out.json").help("Output file"))
        .opt(Opt::new("quantize").default(false).help("Quantize weights"));

    let spec = ArgSpec::new("train")
        .about("Train a model")
        .opt(Opt::new("epochs").int().default(10).help("Training epochs"))
        .opt(Opt::new("learning_rate").default(0.01).help("Step size"))
        .opt(Opt::new("batch_size").int().default(32))
        .opt(Opt::new("tags").list(ValueKind::Str).help("Run labels"))
        .opt(Opt::new("resume").flag().help("Continue from a checkpoint"))
        .sub("export", export);

    let options = ParseOptions::default()
        .show(Show::Table)
        .table(TableOptions::default());

    match parse(&spec, &options) {
        Ok(args) => {
            if let Some(export) = args.sub("export") {
                println!("exporting to {:?}", export.get("path"));
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}
