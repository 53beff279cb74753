use crate::models::{Category, Summary};
use crate::state::FormState;

/// Format a calorie value, dropping the trailing `.0` on whole numbers.
///
/// Raw text coerces through f64, so whole inputs would otherwise render as
/// "1100.0" instead of "1100".
pub fn format_calories(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Display the whole form: budget, one fieldset per category, the selected
/// category, and the output block if a summary has been computed.
pub fn display_form(form: &FormState) {
    println!();
    println!("=== Calorie Counter ===");
    println!();

    let budget = if form.budget().is_empty() {
        "(not set)"
    } else {
        form.budget()
    };
    println!("Budget: {}", budget);

    for category in Category::ALL {
        let entries = form.entries(category);
        println!();
        println!("--- {} ---", category.label());

        if entries.is_empty() {
            println!("  (no entries)");
            continue;
        }

        for (i, entry) in entries.iter().enumerate() {
            let name = if entry.name.is_empty() {
                "(unnamed)"
            } else {
                &entry.name
            };
            let calories = if entry.calories.is_empty() {
                "(blank)"
            } else {
                &entry.calories
            };
            println!("  {:>3}. {} - {} cal", i + 1, name, calories);
        }
    }

    println!();
    println!("Adding new entries to: {}", form.selected().label());

    if let Some(summary) = form.output() {
        display_summary(summary);
    }
}

/// Display a computed summary in the output-block format:
/// absolute remainder with its surplus/deficit label, then the three
/// contributing totals.
pub fn display_summary(summary: &Summary) {
    println!();
    println!(
        "{} Calorie {}",
        format_calories(summary.remaining_calories.abs()),
        summary.balance
    );
    println!("----------------------------------------");
    println!(
        "{} Calories Budgeted",
        format_calories(summary.budget_calories)
    );
    println!(
        "{} Calories Consumed",
        format_calories(summary.consumed_calories)
    );
    println!(
        "{} Calories Burned",
        format_calories(summary.exercise_calories)
    );
    println!();
}
