//! CLI commands and argument parsing

use crate::schema::CollisionPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JSON-to-struct-template generator
#[derive(Parser, Debug)]
#[command(name = "structgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input JSON file (reads stdin when omitted)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer record declarations and print struct templates
    Generate {
        /// Name of the root record
        #[arg(long, default_value = "MyStruct")]
        root_name: String,

        /// Duplicate record name handling
        #[arg(long, value_enum, default_value = "overwrite")]
        collision: CollisionMode,

        /// Skip `<Key>Item` records for object elements of arrays
        #[arg(long)]
        no_item_records: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "go")]
        format: OutputFormat,
    },

    /// Parse the input and verify the root is a JSON object
    Check,
}

/// Duplicate record name handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CollisionMode {
    /// Latest definition wins
    Overwrite,
    /// First definition wins
    KeepFirst,
    /// Fail on duplicate names
    Reject,
}

impl From<CollisionMode> for CollisionPolicy {
    fn from(mode: CollisionMode) -> Self {
        match mode {
            CollisionMode::Overwrite => CollisionPolicy::Overwrite,
            CollisionMode::KeepFirst => CollisionPolicy::KeepFirst,
            CollisionMode::Reject => CollisionPolicy::Reject,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Struct template text
    Go,
    /// Registered records as JSON
    Json,
}
