//! Default and placeholder substitution.
//!
//! Two rules:
//! - each slot that resolved to nothing takes its own default ([`fill_slots`])
//! - a section whose slots all resolved to nothing shows its registered
//!   placeholder set ([`or_placeholders`])
//!
//! A section never renders an empty region just because its records are
//! unpopulated.

/// Replace unresolved slots with the default at the same position.
///
/// Slots beyond the end of `defaults` are dropped when unresolved.
pub fn fill_slots<T: Clone>(resolved: Vec<Option<T>>, defaults: &[T]) -> Vec<T> {
    resolved
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| value.or_else(|| defaults.get(i).cloned()))
        .collect()
}

/// Use the placeholder set when nothing resolved
pub fn or_placeholders<T: Clone>(resolved: Vec<T>, placeholders: &[T]) -> Vec<T> {
    if resolved.is_empty() {
        placeholders.to_vec()
    } else {
        resolved
    }
}
