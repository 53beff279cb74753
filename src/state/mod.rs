mod form;

pub use form::FormState;
