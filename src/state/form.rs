use crate::counter;
use crate::error::Result;
use crate::models::{Category, Entry, EntryField, Summary};

/// The single form instance: budget text, per-category entry lists, the
/// category new entries are appended to, and the last computed summary.
///
/// All numeric fields are held as raw text; coercion only happens inside
/// [`FormState::submit`] and never rewrites what the user typed.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    budget: String,
    entries: [Vec<Entry>; Category::ALL.len()],
    selected: Category,
    output: Option<Summary>,
}

impl FormState {
    /// Fresh, empty form with breakfast selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn entries(&self, category: Category) -> &[Entry] {
        &self.entries[category.index()]
    }

    pub fn output(&self) -> Option<&Summary> {
        self.output.as_ref()
    }

    /// Total entry count across all categories.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// True when nothing has been typed into the form at all.
    pub fn is_empty(&self) -> bool {
        self.budget.is_empty() && self.entry_count() == 0
    }

    /// Replace the budget text.
    pub fn set_budget(&mut self, value: impl Into<String>) {
        self.budget = value.into();
    }

    /// Change which category new entries are appended to.
    pub fn select_category(&mut self, category: Category) {
        self.selected = category;
    }

    /// Append an empty entry to a category, preserving existing entries.
    ///
    /// Returns the index of the new entry.
    pub fn add_entry(&mut self, category: Category) -> usize {
        let list = &mut self.entries[category.index()];
        list.push(Entry::empty());
        list.len() - 1
    }

    /// Replace one field of the entry at `index`.
    ///
    /// An out-of-range index is ignored; all other entries and fields are
    /// left untouched.
    pub fn edit_entry(
        &mut self,
        category: Category,
        index: usize,
        field: EntryField,
        value: impl Into<String>,
    ) {
        if let Some(entry) = self.entries[category.index()].get_mut(index) {
            match field {
                EntryField::Name => entry.name = value.into(),
                EntryField::Calories => entry.calories = value.into(),
            }
        }
    }

    /// Compute and store the remaining-calorie summary.
    ///
    /// On failure the previous output is left untouched and the error is
    /// returned for the caller to surface.
    pub fn submit(&mut self) -> Result<&Summary> {
        let summary = counter::compute_summary(self)?;
        Ok(&*self.output.insert(summary))
    }

    /// Reset the form: empty budget, empty category lists, no output, and
    /// the first category selected.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entry_appends_empty() {
        let mut form = FormState::new();
        assert_eq!(form.add_entry(Category::Lunch), 0);
        assert_eq!(form.add_entry(Category::Lunch), 1);

        let lunch = form.entries(Category::Lunch);
        assert_eq!(lunch.len(), 2);
        assert!(lunch.iter().all(Entry::is_blank));
        assert!(form.entries(Category::Breakfast).is_empty());
    }

    #[test]
    fn test_edit_entry_replaces_single_field() {
        let mut form = FormState::new();
        form.add_entry(Category::Breakfast);
        form.add_entry(Category::Breakfast);

        form.edit_entry(Category::Breakfast, 0, EntryField::Name, "Oatmeal");
        form.edit_entry(Category::Breakfast, 0, EntryField::Calories, "300");

        let entries = form.entries(Category::Breakfast);
        assert_eq!(entries[0].name, "Oatmeal");
        assert_eq!(entries[0].calories, "300");
        assert!(entries[1].is_blank());
    }

    #[test]
    fn test_edit_entry_out_of_range_is_noop() {
        let mut form = FormState::new();
        form.add_entry(Category::Snacks);
        form.edit_entry(Category::Snacks, 5, EntryField::Calories, "100");
        assert!(form.entries(Category::Snacks)[0].is_blank());
    }

    #[test]
    fn test_select_category() {
        let mut form = FormState::new();
        assert_eq!(form.selected(), Category::Breakfast);
        form.select_category(Category::Exercise);
        assert_eq!(form.selected(), Category::Exercise);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = FormState::new();
        form.set_budget("2000");
        form.select_category(Category::Dinner);
        let i = form.add_entry(Category::Dinner);
        form.edit_entry(Category::Dinner, i, EntryField::Calories, "500");
        form.submit().unwrap();

        form.clear();

        assert_eq!(form.budget(), "");
        assert!(form.output().is_none());
        assert_eq!(form.selected(), Category::Breakfast);
        for category in Category::ALL {
            assert!(form.entries(category).is_empty());
        }
    }
}
