//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// cosingdb - convert and query the COSING cosmetic ingredient database
#[derive(Parser, Debug)]
#[command(name = "cosing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the ingredient database file
    #[arg(
        short,
        long,
        global = true,
        env = "COSING_DATABASE",
        default_value = "cosing_ingredients.db"
    )]
    pub database: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a COSING TSV export into the ingredient database
    Convert(ConvertArgs),

    /// Full-text search over ingredient names and descriptions
    Search(SearchArgs),

    /// Fetch one ingredient by COSING reference number (JSON output)
    Ingredient(IngredientArgs),

    /// List ingredients carrying a function (substring match)
    Function(FunctionArgs),

    /// List all function names
    Functions,

    /// List skin-conditioning ingredients
    Skin(SkinArgs),

    /// Print database statistics (JSON output)
    Stats,

    /// Export the database as key=value blocks
    Export(ExportArgs),

    /// Time the standard query patterns
    Bench,
}

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the COSING TSV export
    #[arg(default_value = "cosing.tsv")]
    pub input: String,
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term
    pub term: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for the ingredient command
#[derive(Args, Debug)]
pub struct IngredientArgs {
    /// COSING reference number
    pub ref_no: i64,
}

/// Arguments for the function command
#[derive(Args, Debug)]
pub struct FunctionArgs {
    /// Function name or substring (case-insensitive)
    pub name: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 50)]
    pub limit: usize,
}

/// Arguments for the skin command
#[derive(Args, Debug)]
pub struct SkinArgs {
    /// Maximum number of results
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
