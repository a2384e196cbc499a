use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::data::HelperRoster;
use crate::error::{CalcError, Result};
use crate::models::{ActivationMode, BonusTarget, RunConfig};

/// Prompt for a helper by name with fuzzy matching against the roster.
pub fn prompt_helper_name(roster: &HelperRoster) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which helper?")
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(helper) = roster.get(input) {
            return Ok(helper.name.clone());
        }

        // Fuzzy match against the roster
        let mut candidates: Vec<(String, f64)> = roster
            .all()
            .iter()
            .map(|h| {
                (
                    h.name.clone(),
                    jaro_winkler(&h.name.to_lowercase(), &input.to_lowercase()),
                )
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No helper found matching '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let name = candidates[0].0.clone();
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;
            if confirm {
                return Ok(name);
            }
            continue;
        }

        // Multiple matches - let the user pick
        let mut options: Vec<String> = candidates.iter().take(5).map(|(n, _)| n.clone()).collect();
        let picks = options.len();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < picks {
            return Ok(options[selection].clone());
        }
    }
}

/// Prompt for the helper's nature from the known table.
pub fn prompt_nature(nature_names: &[&str]) -> Result<String> {
    let selection = Select::new()
        .with_prompt("Nature")
        .items(nature_names)
        .default(0)
        .interact()?;

    Ok(nature_names[selection].to_string())
}

/// Prompt for the helper's level.
pub fn prompt_level() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Helper level")
        .default("30".to_string())
        .interact_text()?;

    let level: u32 = input
        .parse()
        .map_err(|_| CalcError::InvalidInput("Invalid level".to_string()))?;

    if level < 1 {
        return Err(CalcError::InvalidInput("Level must be >= 1".to_string()));
    }

    Ok(level)
}

/// Prompt for a fractional bonus, entered as a percentage.
fn prompt_percent_bonus(prompt: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default("0".to_string())
        .interact_text()?;

    let percent: f64 = input
        .parse()
        .map_err(|_| CalcError::InvalidInput("Invalid number".to_string()))?;

    if percent < 0.0 {
        return Err(CalcError::InvalidInput(
            "Bonus must be non-negative".to_string(),
        ));
    }

    Ok(percent / 100.0)
}

/// Prompt for a non-negative integer count.
fn prompt_count(prompt: &str, default: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CalcError::InvalidInput("Invalid count".to_string()))
}

/// Prompt for the EX-trait slot.
pub fn prompt_activation_mode() -> Result<ActivationMode> {
    let options = ["none", "main", "sub"];
    let selection = Select::new()
        .with_prompt("EX trait slot")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => ActivationMode::Main,
        2 => ActivationMode::Sub,
        _ => ActivationMode::None,
    })
}

/// Prompt for which category the EX trait boosts.
pub fn prompt_bonus_target() -> Result<BonusTarget> {
    let options = ["none", "berries", "ingredients", "skill"];
    let selection = Select::new()
        .with_prompt("EX trait target")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => BonusTarget::ExBerry,
        2 => BonusTarget::ExIngredient,
        3 => BonusTarget::ExSkill,
        _ => BonusTarget::None,
    })
}

/// Collect a full run configuration interactively.
pub fn collect_run_config() -> Result<RunConfig> {
    let level = prompt_level()?;
    let sub_speed_bonus = prompt_percent_bonus("Help speed sub-skill bonus (%)")?;
    let sub_ingredient_bonus = prompt_percent_bonus("Ingredient finder sub-skill bonus (%)")?;
    let sub_skill_bonus = prompt_percent_bonus("Skill trigger sub-skill bonus (%)")?;
    let team_helper_count = prompt_count("Team members with a helping bonus", "0")?;
    let field_bonus_percent = prompt_percent_bonus("Field event bonus (%)")? * 100.0;

    let affinity_input: String = Input::new()
        .with_prompt("Field berry affinity multiplier")
        .default("1.0".to_string())
        .interact_text()?;
    let field_berry_affinity: f64 = affinity_input
        .parse()
        .map_err(|_| CalcError::InvalidInput("Invalid multiplier".to_string()))?;

    let camp = Confirm::new()
        .with_prompt("Good camp active?")
        .default(false)
        .interact()?;
    let camp_divisor = if camp { 1.2 } else { 1.0 };

    let activation = prompt_activation_mode()?;
    let bonus_target = prompt_bonus_target()?;
    let extra_berry_count = prompt_count("Extra berries per action from skills", "0")?;

    Ok(RunConfig {
        level,
        sub_speed_bonus,
        sub_ingredient_bonus,
        sub_skill_bonus,
        team_helper_count,
        field_bonus_percent,
        field_berry_affinity,
        camp_divisor,
        activation,
        bonus_target,
        extra_berry_count,
    })
}
