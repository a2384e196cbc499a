use crate::models::{DailyResult, HelperProfile, NatureModifier};

/// Display a daily result as a formatted report.
pub fn display_daily_result(helper_name: &str, result: &DailyResult) {
    println!();
    println!("=== Daily rates for {} ===", helper_name);
    println!();
    println!(
        "Action time: {:.0} s standard, {:.1} s effective",
        result.standard_action_time, result.effective_action_time
    );
    println!("Actions per day: {:.1}", result.daily_action_count);
    println!();
    println!("Berry energy / day: {:.0}", result.berry_energy_per_day);
    println!(
        "Berry energy / day (berry-only): {:.0}",
        result.berry_energy_per_day_berry_only
    );
    println!("Skill triggers / day: {:.2}", result.skill_triggers_per_day);

    if result.ingredients.is_empty() {
        println!("Ingredients / day: (no unlocked slots)");
    } else {
        println!();
        println!("--- Ingredients / day ---");

        let max_name_len = result
            .ingredients
            .keys()
            .map(|n| n.len())
            .max()
            .unwrap_or(10);

        for (name, daily) in &result.ingredients {
            println!(
                "  {:<width$} {:>6.2} x | {:>8.0} energy",
                name,
                daily.count,
                daily.energy,
                width = max_name_len
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!(
        "Ingredient energy / day: {:.0}",
        result.ingredient_energy_per_day
    );
    println!("Total energy / day: {:.0}", result.total_energy_per_day);
    println!();
}

/// Display a list of helper profiles.
pub fn display_helper_list(helpers: &[&HelperProfile], title: &str) {
    if helpers.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} helpers) ===", title, helpers.len());
    println!();

    for helper in helpers {
        let slots: Vec<String> = helper
            .slots
            .iter()
            .map(|s| format!("{}@{}", s.ingredient, s.unlock_level))
            .collect();

        println!(
            "  {} - {:?}, {:.0} s/action, berry {:.0}, ing {:.1}%, skill {:.1}%, slots: {}",
            helper.name,
            helper.specialty,
            helper.base_action_time,
            helper.base_berry_energy,
            helper.base_ingredient_rate * 100.0,
            helper.base_skill_rate * 100.0,
            slots.join(", ")
        );
    }

    println!();
}

/// Display the nature table.
pub fn display_nature_list(natures: &[(&str, NatureModifier)]) {
    println!();
    println!("=== Natures ({}) ===", natures.len());
    println!();

    for (name, nature) in natures {
        println!(
            "  {:<10} speed {:.2}, ingredients {:.2}, skill {:.2}, genki {:.2}",
            name, nature.speed, nature.ingredients, nature.skill, nature.genki
        );
    }

    println!();
}
