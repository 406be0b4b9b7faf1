//! ourst CLI - OU-XML courseware to reStructuredText converter.
//!
//! Converts one courseware document into a tree of reStructuredText
//! documents: a root index, one document per session and one per section.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::ConvertArgs;
use output::Output;

/// ourst - OU-XML courseware to reStructuredText converter.
#[derive(Parser)]
#[command(name = "ourst", version, about)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.convert.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = cli.convert.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
