//! Validate command implementation

use anyhow::Result;
use clap::Args;
use finsent_core::{Category, LexiconClassifier};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match LexiconClassifier::from_file(&self.lexicon) {
            Ok(classifier) => {
                let labels = classifier.labels();
                println!("✓ Lexicon is valid!");
                println!("  Classifier: {}", finsent_core::Classifier::name(&classifier));
                println!(
                    "  Labels: {} / {} / {}",
                    labels.positive, labels.negative, labels.neutral
                );

                for (label, expected) in [
                    (&labels.positive, Category::Positive),
                    (&labels.negative, Category::Negative),
                ] {
                    if Category::from_label(label) != expected {
                        println!(
                            "  Warning: label '{label}' will be shown as {}",
                            Category::from_label(label)
                        );
                    }
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
