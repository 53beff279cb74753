pub mod cli;
pub mod counter;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{CounterError, Result};
pub use models::{Balance, Category, Entry, EntryField, Summary};
pub use state::FormState;
