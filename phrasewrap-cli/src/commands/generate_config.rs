//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Default model path written into the template
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point segmentation.model at a trained model");
        println!("2. Validate the model:");
        println!("   phrasewrap validate --model <MODEL>");
        println!("3. Use the configuration for processing:");
        println!(
            "   phrasewrap process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let model = match &self.model {
            Some(path) => format!(
                "model = {}",
                toml::Value::String(path.display().to_string())
            ),
            None => "# model = \"models/ja.json\"".to_string(),
        };

        format!(
            r#"# phrasewrap configuration

[segmentation]
# Weight table used when --model is not given
{model}

# Separator inserted between phrases. Must be a single character.
# The default is U+200B ZERO WIDTH SPACE.
separator = "\u200B"

[output]
# One of: text, json, markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#
        )
    }
}
