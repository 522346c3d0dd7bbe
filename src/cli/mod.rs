//! CLI module
//!
//! Command-line interface for the struct template generator.
//!
//! # Commands
//!
//! - `generate` - Infer record declarations and print struct templates
//! - `check` - Validate that the input parses as a JSON object

mod commands;
mod runner;

pub use commands::{Cli, CollisionMode, Commands, OutputFormat};
pub use runner::Runner;
