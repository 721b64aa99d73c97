//! Validate command implementation

use anyhow::Result;
use clap::Args;
use phrasewrap_core::WeightTable;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the model JSON file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub model: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating model: {}", self.model.display());

        match WeightTable::from_file(&self.model) {
            Ok(table) => {
                println!("✓ Model is valid!");
                println!("  Entries: {}", table.len());
                println!("  Bias: {}", -table.total_weight());
                for (class, count) in table.class_counts() {
                    if class == "?" {
                        println!("  Unrecognised keys: {count}");
                    } else {
                        println!("  {class}: {count}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Model is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
