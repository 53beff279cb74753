mod aggregate;
mod sanitize;

pub use aggregate::{compute_summary, sum_entries};
pub use sanitize::{clean_input, coerce_number, invalid_input};
