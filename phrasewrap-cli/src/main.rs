//! phrasewrap command-line entry point

use clap::Parser;
use phrasewrap_cli::commands::Commands;
use phrasewrap_cli::CliResult;

/// Insert invisible separators between phrases so lines wrap only between
/// them
#[derive(Debug, Parser)]
#[command(name = "phrasewrap", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}
