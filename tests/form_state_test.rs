use calorie_counter_rs::error::CounterError;
use calorie_counter_rs::models::{Category, EntryField};
use calorie_counter_rs::state::FormState;

fn filled_form() -> FormState {
    let mut form = FormState::new();
    form.set_budget("2000");

    let i = form.add_entry(Category::Breakfast);
    form.edit_entry(Category::Breakfast, i, EntryField::Name, "Oatmeal");
    form.edit_entry(Category::Breakfast, i, EntryField::Calories, "300");

    let i = form.add_entry(Category::Exercise);
    form.edit_entry(Category::Exercise, i, EntryField::Name, "Run");
    form.edit_entry(Category::Exercise, i, EntryField::Calories, "250");

    form
}

#[test]
fn test_submit_stores_output() {
    let mut form = filled_form();
    assert!(form.output().is_none());

    form.submit().unwrap();

    let summary = form.output().unwrap();
    assert_eq!(summary.consumed_calories, 300.0);
    assert_eq!(summary.exercise_calories, 250.0);
    assert_eq!(summary.remaining_calories, 1950.0);
}

#[test]
fn test_submit_is_idempotent() {
    let mut form = filled_form();

    let first = form.submit().unwrap().clone();
    let second = form.submit().unwrap().clone();

    assert_eq!(first, second);
}

#[test]
fn test_failed_submit_preserves_previous_output() {
    let mut form = filled_form();
    form.submit().unwrap();
    let before = form.output().unwrap().clone();

    // Corrupt one field, then try again.
    let i = form.add_entry(Category::Snacks);
    form.edit_entry(Category::Snacks, i, EntryField::Calories, "1e5");

    match form.submit() {
        Err(CounterError::InvalidInput(bad)) => assert_eq!(bad, "1e5"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert_eq!(form.output(), Some(&before));
}

#[test]
fn test_failed_budget_preserves_previous_output() {
    let mut form = filled_form();
    form.submit().unwrap();
    let before = form.output().unwrap().clone();

    form.set_budget("n/a");

    assert!(matches!(form.submit(), Err(CounterError::InvalidBudget)));
    assert_eq!(form.output(), Some(&before));
}

#[test]
fn test_resubmit_reflects_edits() {
    let mut form = filled_form();
    form.submit().unwrap();

    form.edit_entry(Category::Breakfast, 0, EntryField::Calories, "500");
    let summary = form.submit().unwrap();

    assert_eq!(summary.consumed_calories, 500.0);
    assert_eq!(summary.remaining_calories, 1750.0);
}

#[test]
fn test_entries_stay_raw_text_after_submit() {
    let mut form = FormState::new();
    form.set_budget(" 2000 ");
    let i = form.add_entry(Category::Lunch);
    form.edit_entry(Category::Lunch, i, EntryField::Calories, "+700");

    form.submit().unwrap();

    // Coercion never rewrites what the user typed.
    assert_eq!(form.budget(), " 2000 ");
    assert_eq!(form.entries(Category::Lunch)[0].calories, "+700");
}

#[test]
fn test_clear_resets_form_and_selection() {
    let mut form = filled_form();
    form.select_category(Category::Snacks);
    form.submit().unwrap();

    form.clear();

    assert!(form.is_empty());
    assert!(form.output().is_none());
    assert_eq!(form.selected(), Category::Breakfast);
}

#[test]
fn test_summary_serializes_with_camel_case_keys() {
    let mut form = filled_form();
    let summary = form.submit().unwrap();

    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["remainingCalories"], 1950.0);
    assert_eq!(json["balance"], "Deficit");
    assert_eq!(json["budgetCalories"], 2000.0);
    assert_eq!(json["consumedCalories"], 300.0);
    assert_eq!(json["exerciseCalories"], 250.0);
}
