//! structgen CLI
//!
//! Reads a JSON document from a file or stdin and prints inferred struct
//! templates on stdout. Diagnostics go to stderr.

use clap::Parser;
use structgen::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging on stderr so stdout stays clean for rendered output
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
