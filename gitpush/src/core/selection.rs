//! Operator file selection.

/// Resolve a 1-based selection against `len` listed entries.
///
/// Returns the 0-based index, or `None` for non-numeric or out-of-range input.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    if number == 0 || number > len {
        return None;
    }
    Some(number - 1)
}
