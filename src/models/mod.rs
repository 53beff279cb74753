mod category;
mod entry;
mod summary;

pub use category::Category;
pub use entry::{Entry, EntryField};
pub use summary::{Balance, Summary};
