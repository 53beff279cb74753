use std::fmt;

use serde::Serialize;

/// Sign classification of the remaining balance.
///
/// A non-negative remainder is a deficit (calories left unused); a negative
/// remainder is a surplus (calories over budget).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Balance {
    Surplus,
    Deficit,
}

impl Balance {
    /// Classify a remaining-calorie value.
    pub fn of(remaining: f64) -> Self {
        if remaining < 0.0 {
            Balance::Surplus
        } else {
            Balance::Deficit
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Balance::Surplus => "Surplus",
            Balance::Deficit => "Deficit",
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The computed output of one successful submission.
///
/// Replaced wholesale on the next submit, cleared on form reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Budget minus consumed plus exercise. May be negative.
    pub remaining_calories: f64,

    /// Surplus/deficit classification of the remainder.
    pub balance: Balance,

    /// The coerced daily budget.
    pub budget_calories: f64,

    /// Sum of breakfast, lunch, dinner, and snacks.
    pub consumed_calories: f64,

    /// Sum of the exercise category.
    pub exercise_calories: f64,
}

impl Summary {
    pub fn new(budget: f64, consumed: f64, exercise: f64) -> Self {
        let remaining = budget - consumed + exercise;
        Self {
            remaining_calories: remaining,
            balance: Balance::of(remaining),
            budget_calories: budget,
            consumed_calories: consumed,
            exercise_calories: exercise,
        }
    }
}
