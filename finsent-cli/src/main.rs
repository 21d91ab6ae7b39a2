use clap::Parser;
use finsent_cli::commands::Commands;

/// Financial sentiment analysis for '|'-separated sentences
#[derive(Debug, Parser)]
#[command(name = "finsent", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
