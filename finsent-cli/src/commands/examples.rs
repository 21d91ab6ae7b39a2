//! Examples command implementation

use anyhow::Result;
use clap::Args;

/// Example inputs, one document each
pub const EXAMPLES: [&str; 4] = [
    "growth is strong and we have plenty of liquidity.",
    "there is a shortage of capital, and we need extra financing.",
    "formulation patents might protect Vasotec to a limited extent.",
    "growth is strong and we have plenty of liquidity.|there is a shortage of capital",
];

/// Arguments for the examples command
#[derive(Debug, Args)]
pub struct ExamplesArgs {
    /// Print the examples only, one per line
    #[arg(long)]
    pub plain: bool,
}

impl ExamplesArgs {
    /// Execute the examples command
    pub fn execute(&self) -> Result<()> {
        if self.plain {
            for example in EXAMPLES {
                println!("{example}");
            }
            return Ok(());
        }

        println!("Example inputs (separate multiple sentences with a '|'):");
        println!();
        for (i, example) in EXAMPLES.iter().enumerate() {
            println!("  {}. {}", i + 1, example);
        }
        println!();
        println!("Try one:");
        println!("  finsent analyze \"{}\" --format html", EXAMPLES[3]);

        Ok(())
    }
}
