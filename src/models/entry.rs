/// A single named calorie contribution within a category.
///
/// Both fields hold raw user text. Numeric coercion happens only during
/// aggregation; the stored strings are never rewritten by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub calories: String,
}

impl Entry {
    /// A fresh entry with both fields empty, as appended by the form's
    /// add-entry action.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the user has typed nothing into either field.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.calories.is_empty()
    }
}

/// The two editable fields of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Calories,
}

impl EntryField {
    pub fn label(&self) -> &'static str {
        match self {
            EntryField::Name => "Name",
            EntryField::Calories => "Calories",
        }
    }
}
