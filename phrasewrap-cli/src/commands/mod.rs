//! CLI command implementations

use clap::{Subcommand, ValueEnum};
use phrasewrap_core::FeatureClass;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert separators between phrases in text files
    Process(process::ProcessArgs),

    /// Validate a model file
    Validate(validate::ValidateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the feature classes a model may weight
    Features,
}

impl ListCommands {
    /// Lines printed by this subcommand
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => process::OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| match value.get_help() {
                    Some(help) => format!("{:<10} {help}", value.get_name()),
                    None => value.get_name().to_string(),
                })
                .collect(),
            ListCommands::Features => FeatureClass::ALL
                .iter()
                .map(|class| {
                    let slots: Vec<String> =
                        class.slots().iter().map(|n| format!("w{n}")).collect();
                    format!("{:<4} {}", class.tag(), slots.join(" "))
                })
                .collect(),
        }
    }

    /// Execute the list subcommand
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}
