use clap::Parser;

use calorie_counter_rs::cli::{Cli, Command};
use calorie_counter_rs::error::Result;
use calorie_counter_rs::interface::{
    display_form, display_summary, prompt_action, prompt_budget, prompt_category,
    prompt_entry_field, prompt_entry_pick, prompt_entry_value, prompt_yes_no, Action,
};
use calorie_counter_rs::models::{Category, EntryField};
use calorie_counter_rs::state::FormState;

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
        Command::Run => cmd_run(),
        Command::Calc {
            budget,
            breakfast,
            lunch,
            dinner,
            snacks,
            exercise,
            json,
        } => cmd_calc(
            budget,
            [
                (Category::Breakfast, breakfast),
                (Category::Lunch, lunch),
                (Category::Dinner, dinner),
                (Category::Snacks, snacks),
                (Category::Exercise, exercise),
            ],
            json,
        ),
    }
}

/// Run the interactive form session.
fn cmd_run() -> Result<()> {
    let mut form = FormState::new();

    println!("Calorie Counter");
    println!("Set a budget, add food and exercise entries, then calculate.");

    loop {
        println!();
        match prompt_action(form.selected())? {
            Action::SetBudget => {
                let budget = prompt_budget(form.budget())?;
                form.set_budget(budget);
            }
            Action::SelectCategory => {
                let category = prompt_category("Add food or exercise to", form.selected())?;
                form.select_category(category);
                println!("New entries will go to {}.", category.label());
            }
            Action::AddEntry => {
                let category = form.selected();
                let index = form.add_entry(category);

                let name = prompt_entry_value(EntryField::Name)?;
                form.edit_entry(category, index, EntryField::Name, name);

                let calories = prompt_entry_value(EntryField::Calories)?;
                form.edit_entry(category, index, EntryField::Calories, calories);

                println!("Added entry {} to {}.", index + 1, category.label());
            }
            Action::EditEntry => {
                let category = prompt_category("Which category?", form.selected())?;
                if let Some(index) = prompt_entry_pick(form.entries(category))? {
                    let field = prompt_entry_field()?;
                    let value = prompt_entry_value(field)?;
                    form.edit_entry(category, index, field, value);
                    println!("Updated entry {}.", index + 1);
                }
            }
            Action::Calculate => match form.submit() {
                Ok(summary) => display_summary(summary),
                // Bad input interrupts the calculation but not the session;
                // the previous output is left as it was.
                Err(e) if e.is_user_input() => println!("{}", e),
                Err(e) => return Err(e),
            },
            Action::ShowForm => display_form(&form),
            Action::Clear => {
                if form.is_empty() || prompt_yes_no("Clear the form?", false)? {
                    form.clear();
                    println!("Form cleared.");
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Compute a summary in one shot from command-line calorie values.
fn cmd_calc(budget: String, values: [(Category, Vec<String>); 5], json: bool) -> Result<()> {
    let mut form = FormState::new();
    form.set_budget(budget);

    for (category, list) in values {
        for calories in list {
            let index = form.add_entry(category);
            form.edit_entry(category, index, EntryField::Calories, calories);
        }
    }

    let summary = form.submit()?;

    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        display_summary(summary);
    }

    Ok(())
}
