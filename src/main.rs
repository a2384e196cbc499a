use clap::Parser;
use std::path::Path;

use sleep_helper_calc_rs::calc::constants::{nature_modifier, nature_names, NATURE_MODIFIERS};
use sleep_helper_calc_rs::calc::compute_daily_result;
use sleep_helper_calc_rs::cli::{Cli, Command};
use sleep_helper_calc_rs::data::{builtin_roster, load_helpers, load_tables, GameTables, HelperRoster};
use sleep_helper_calc_rs::error::Result;
use sleep_helper_calc_rs::interface::{
    collect_run_config, display_daily_result, display_helper_list, display_nature_list,
    prompt_helper_name, prompt_nature,
};
use sleep_helper_calc_rs::models::NatureModifier;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc => cmd_calc(cli.file.as_deref(), cli.tables.as_deref()),
        Command::Helpers => cmd_helpers(cli.file.as_deref()),
        Command::Natures => cmd_natures(),
    }
}

/// Load the roster from a file when given, otherwise use the built-in one.
fn resolve_roster(file: Option<&str>) -> Result<HelperRoster> {
    match file {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Roster file not found: {}", path);
                eprintln!("Falling back to the built-in roster.");
                return Ok(builtin_roster());
            }
            let helpers = load_helpers(path)?;
            Ok(HelperRoster::new(helpers))
        }
        None => Ok(builtin_roster()),
    }
}

/// Load the game tables from a file when given, otherwise use the built-ins.
fn resolve_tables(file: Option<&str>) -> Result<GameTables> {
    match file {
        Some(path) => load_tables(path),
        None => Ok(GameTables::default()),
    }
}

/// Calculate daily rates for one interactively-configured helper.
fn cmd_calc(roster_file: Option<&str>, tables_file: Option<&str>) -> Result<()> {
    let roster = resolve_roster(roster_file)?;
    if roster.is_empty() {
        println!("No helpers in the roster.");
        return Ok(());
    }

    let tables = resolve_tables(tables_file)?;

    let helper_name = prompt_helper_name(&roster)?;
    let helper = roster.require(&helper_name)?;

    let names = nature_names();
    let nature_name = prompt_nature(&names)?;
    let nature = nature_modifier(&nature_name);

    let config = collect_run_config()?;

    println!();
    println!(
        "Calculating for {} (level {}, {} nature)...",
        helper.name, config.level, nature_name
    );

    let result = compute_daily_result(helper, &nature, &config, &tables)?;
    display_daily_result(&helper.name, &result);

    Ok(())
}

/// List the helpers in the roster.
fn cmd_helpers(roster_file: Option<&str>) -> Result<()> {
    let roster = resolve_roster(roster_file)?;
    display_helper_list(&roster.all(), "Helpers");
    Ok(())
}

/// List the nature table.
fn cmd_natures() -> Result<()> {
    let mut natures: Vec<(&str, NatureModifier)> = NATURE_MODIFIERS
        .iter()
        .map(|(name, nature)| (*name, *nature))
        .collect();
    natures.sort_by_key(|(name, _)| *name);

    display_nature_list(&natures);
    Ok(())
}
