//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use finsent_core::{ClassifyStrategy, OutputFormat};

pub mod analyze;
pub mod examples;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify '|'-separated sentences and render the results
    Analyze(analyze::AnalyzeArgs),

    /// Print example inputs
    Examples(examples::ExamplesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a lexicon template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List classifier strategies
    Strategies,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Examples(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10} - {}", format.as_str(), format.description());
                }
            }
            ListCommands::Strategies => {
                println!("Available classifier strategies:");
                for strategy in [
                    ClassifyStrategy::Sequential,
                    ClassifyStrategy::Batched,
                    ClassifyStrategy::Parallel,
                ] {
                    let note = if strategy == ClassifyStrategy::default() {
                        " (default)"
                    } else {
                        ""
                    };
                    println!("  {strategy}{note}");
                }
            }
        }
    }
}
