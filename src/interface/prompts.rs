use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Category, Entry, EntryField};

/// One pass through the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetBudget,
    SelectCategory,
    AddEntry,
    EditEntry,
    Calculate,
    ShowForm,
    Clear,
    Quit,
}

/// Prompt for the next form action.
pub fn prompt_action(selected: Category) -> Result<Action> {
    let options = vec![
        "Set budget".to_string(),
        "Select category".to_string(),
        format!("Add entry to {}", selected.label()),
        "Edit entry".to_string(),
        "Calculate remaining calories".to_string(),
        "Show form".to_string(),
        "Clear form".to_string(),
        "Quit".to_string(),
    ];

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Action::SetBudget,
        1 => Action::SelectCategory,
        2 => Action::AddEntry,
        3 => Action::EditEntry,
        4 => Action::Calculate,
        5 => Action::ShowForm,
        6 => Action::Clear,
        _ => Action::Quit,
    })
}

/// Prompt for the daily calorie budget. The raw text is stored as typed.
pub fn prompt_budget(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Daily calorie budget")
        .with_initial_text(current.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Select one of the five categories.
pub fn prompt_category(prompt: &str, current: Category) -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(current.index())
        .interact()?;

    Ok(Category::ALL[selection])
}

/// Prompt for one entry field. Empty input is allowed; calorie fields stay
/// raw text until submit.
pub fn prompt_entry_value(field: EntryField) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(field.label())
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Choose which field of an entry to edit.
pub fn prompt_entry_field() -> Result<EntryField> {
    let selection = Select::new()
        .with_prompt("Which field?")
        .items(&["Name", "Calories"])
        .default(1)
        .interact()?;

    Ok(match selection {
        0 => EntryField::Name,
        _ => EntryField::Calories,
    })
}

/// Pick an entry from a category by number or name, with fuzzy matching.
///
/// Empty input cancels. Names match exactly (case-insensitive) first, then
/// by jaro_winkler similarity above 0.7 with a confirm or pick-list.
pub fn prompt_entry_pick(entries: &[Entry]) -> Result<Option<usize>> {
    if entries.is_empty() {
        println!("No entries in this category.");
        return Ok(None);
    }

    for (i, entry) in entries.iter().enumerate() {
        let name = if entry.name.is_empty() {
            "(unnamed)"
        } else {
            &entry.name
        };
        println!("  {}. {}", i + 1, name);
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Entry number or name (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Numeric pick first
        if let Ok(number) = input.parse::<usize>() {
            if (1..=entries.len()).contains(&number) {
                return Ok(Some(number - 1));
            }
            println!("No entry numbered {}", number);
            continue;
        }

        // Try exact match (case-insensitive)
        let exact = entries
            .iter()
            .position(|e| !e.name.is_empty() && e.name.to_lowercase() == input.to_lowercase());

        if let Some(index) = exact {
            return Ok(Some(index));
        }

        // Try fuzzy matching
        let mut candidates: Vec<(usize, f64)> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.name.is_empty())
            .map(|(i, e)| (i, jaro_winkler(&e.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching entry found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let index = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", entries[index].name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(index));
            }
            continue;
        }

        // Multiple matches - let user select
        let mut options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(i, _)| entries[*i].name.clone())
            .collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < candidates.len().min(5) {
            return Ok(Some(candidates[selection].0));
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
