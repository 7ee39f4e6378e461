//! cosingdb CLI - convert and query the COSING ingredient database

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{bench, convert, export, function, functions, ingredient, search, skin, stats};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Convert(args) => convert::execute(args, &cli.global),
        cli::Commands::Search(args) => search::execute(args, &cli.global),
        cli::Commands::Ingredient(args) => ingredient::execute(args, &cli.global),
        cli::Commands::Function(args) => function::execute(args, &cli.global),
        cli::Commands::Functions => functions::execute(&cli.global),
        cli::Commands::Skin(args) => skin::execute(args, &cli.global),
        cli::Commands::Stats => stats::execute(&cli.global),
        cli::Commands::Export(args) => export::execute(args, &cli.global),
        cli::Commands::Bench => bench::execute(&cli.global),
    }
}
