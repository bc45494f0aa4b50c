use anyhow::Result;
use clap::Parser;
use location::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
