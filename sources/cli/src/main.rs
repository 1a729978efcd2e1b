use std::process::exit;

use analysis::Analyzer;
use args::Cli;
use clap::Parser;
use model::loader::TypeLoader;
use tracing::{error, info, Level};
use tracing_subscriber::fmt;

mod args;

fn main() {
    let args = Cli::parse();

    let format = fmt::format()
        .with_ansi(true)
        .without_time()
        .with_level(true)
        .with_target(false)
        .with_thread_names(false)
        .with_source_location(false)
        .compact();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .event_format(format)
        .with_writer(std::io::stderr)
        .init();

    if args.metadata_path.is_empty() {
        error!("No metadata paths given.");
        exit(1);
    }

    let mut loader = TypeLoader::new();
    for root in &args.metadata_path {
        loader.add_path(root);
    }

    let analyzer = Analyzer::new(loader);

    info!("Analyzing {}", args.type_name);

    let report = match analyzer.analyze(
        &args.type_name,
        args.accessor.as_deref(),
        args.modifiable,
    ) {
        Ok(report) => report,
        Err(err) => {
            error!("{}", err);
            exit(1);
        }
    };

    // The type's simple name first, then one line per accessible field
    println!("{}", report.simple_name());
    for record in &report.records {
        if args.accessor.is_some() {
            println!(
                "{} {} {} {}",
                record.value_type, record.field_name, record.level, record.accessor
            );
        } else {
            println!(
                "{} {} {}",
                record.value_type, record.field_name, record.level
            );
        }
    }

    info!("Analysis concluded without error");
}
