//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Name recorded in the lexicon metadata
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the term tables for your domain");
        println!("2. Validate your lexicon:");
        println!("   finsent validate --lexicon {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   finsent analyze \"sales grew|margins fell\" --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template lexicon content
    fn generate_template(&self) -> String {
        format!(
            r#"# Sentiment lexicon: {name}

[metadata]
name = "{name}"
description = "Custom sentiment lexicon"

# Labels reported for each outcome. The pipeline maps exactly
# "Positive" and "Negative" to their categories; anything else is neutral.
[labels]
positive = "Positive"
negative = "Negative"
neutral = "Neutral"

[scoring]
# Absolute sums below this are reported with the neutral label
neutral_threshold = 0.1
# A negation word flips the next matched term within this many words
negation_window = 3

[negation]
words = ["not", "no", "never", "without"]

# Weights are magnitudes in (0, 1]; the table decides the sign
[terms.positive]
growth = 0.3
profit = 0.4
strong = 0.3

[terms.negative]
loss = 0.4
shortage = 0.5
weak = 0.3
"#,
            name = self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsent_core::LexiconConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_is_a_valid_lexicon() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("unused.toml"),
            name: "energy".to_string(),
        };

        let config = LexiconConfig::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(config.metadata.name, "energy");
        assert_eq!(config.terms.negative.get("shortage"), Some(&0.5));
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("lexicon.toml");
        let args = GenerateConfigArgs {
            output: output.clone(),
            name: "custom".to_string(),
        };

        args.execute().unwrap();
        assert!(LexiconConfig::from_file(&output).is_ok());
    }

    #[test]
    fn test_unwritable_output() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/lexicon.toml"),
            name: "custom".to_string(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
