use crate::app::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gpa-ledger")]
#[command(about = "Record courses and compute a credit-weighted GPA")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Decimal places used when showing the GPA
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive session reading commands from stdin
    Session,

    /// Import a course CSV and print the result
    Calc {
        /// CSV file with a `name,grade,credits` header
        #[arg(short, long)]
        input: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the accepted courses to this CSV file
        #[arg(long)]
        export: Option<String>,
    },

    /// Print the grade table
    Grades,
}

impl CliConfig {
    /// Loads the TOML file if one was given and applies command line overrides.
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(config.with_precision(self.precision))
    }
}
