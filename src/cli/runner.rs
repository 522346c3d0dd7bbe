//! CLI runner - executes commands

use crate::cli::commands::{Cli, CollisionMode, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::render::render_registry;
use crate::schema::StructInferrer;
use serde_json::Value;
use std::fs;
use std::io::Read;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                root_name,
                collision,
                no_item_records,
                format,
            } => self.generate(root_name, *collision, *no_item_records, *format),
            Commands::Check => self.check(),
        }
    }

    /// Read the input document from the file argument or stdin
    fn read_input(&self) -> Result<String> {
        if let Some(path) = &self.cli.input {
            if !path.exists() {
                return Err(Error::file_not_found(path.to_string_lossy()));
            }
            Ok(fs::read_to_string(path)?)
        } else {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }

    /// Parse the input as a JSON value
    fn parse_input(&self) -> Result<Value> {
        let text = self.read_input()?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Infer records and print them
    fn generate(
        &self,
        root_name: &str,
        collision: CollisionMode,
        no_item_records: bool,
        format: OutputFormat,
    ) -> Result<()> {
        let value = self.parse_input()?;

        let inferrer = StructInferrer::new()
            .with_root_name(root_name)
            .with_collision_policy(collision.into())
            .with_array_item_records(!no_item_records);
        let registry = inferrer.infer(&value)?;
        tracing::debug!(records = registry.len(), "inference complete");

        match format {
            OutputFormat::Go => print!("{}", render_registry(&registry)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&registry)?),
        }
        Ok(())
    }

    /// Validate that the input parses as a JSON object
    fn check(&self) -> Result<()> {
        let value = self.parse_input()?;
        let registry = StructInferrer::new().infer(&value)?;
        println!("OK: valid JSON object, {} record(s)", registry.len());
        Ok(())
    }
}
