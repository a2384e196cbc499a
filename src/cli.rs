use clap::{Parser, Subcommand};

/// SleepHelperCalc — expected daily helper yields (berries, ingredients, skill triggers).
#[derive(Parser, Debug)]
#[command(name = "sleep_helper_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a helper roster JSON file (built-in roster when omitted).
    #[arg(short, long)]
    pub file: Option<String>,

    /// Path to a game tables JSON file (built-in tables when omitted).
    #[arg(short, long)]
    pub tables: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate daily rates for one helper configuration.
    Calc,

    /// List the known helpers.
    Helpers,

    /// List the known natures and their modifiers.
    Natures,
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc
    }
}
