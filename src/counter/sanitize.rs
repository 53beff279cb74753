//! Raw-input sanitization for calorie fields.
//!
//! Inputs stay as user-typed text until submit time; these functions clean
//! and coerce copies without touching stored state.

/// Remove all sign characters and whitespace from raw input.
///
/// `"+12 3-"` becomes `"123"`.
pub fn clean_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '+' | '-') && !c.is_whitespace())
        .collect()
}

/// Find the first exponential-notation literal in cleaned text.
///
/// A digit run followed by `e` or `E` followed by a digit run parses as a
/// valid number but almost always means the user typed scientific notation
/// by accident, so it is rejected outright. Returns the offending substring.
pub fn invalid_input(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
            let mut end = i + 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end > i + 1 {
                return Some(&text[start..end]);
            }
        }
    }
    None
}

/// Coerce cleaned text to a number.
///
/// Empty text is 0; anything unparseable is NaN. Callers that care (the
/// budget path) check for NaN; calorie fields deliberately let NaN flow
/// through the sums.
pub fn coerce_number(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or(f64::NAN)
}
