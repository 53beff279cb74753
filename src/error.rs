use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    /// Exponential-notation calorie input, e.g. "1e5". Carries the
    /// offending substring so it can be shown verbatim to the user.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Budget is not a number")]
    InvalidBudget,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl CounterError {
    /// True for failures caused by what the user typed, as opposed to
    /// terminal or IO trouble. These are reported inline and never abort
    /// the session.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            CounterError::InvalidInput(_) | CounterError::InvalidBudget
        )
    }
}

pub type Result<T> = std::result::Result<T, CounterError>;
