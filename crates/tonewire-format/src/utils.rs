/// Convert snake_case or kebab-case to SCREAMING_SNAKE_CASE.
///
/// Normalizes `-` and `.` separators to `_`. Idempotent on input that is
/// already SCREAMING_SNAKE_CASE.
///
/// # Examples
/// ```
/// use tonewire_format::utils::to_const_case;
/// assert_eq!(to_const_case("note_on"), "NOTE_ON");
/// assert_eq!(to_const_case("set-pan"), "SET_PAN");
/// assert_eq!(to_const_case("NOTE_ON"), "NOTE_ON");  // idempotent
/// ```
pub fn to_const_case(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '-' | '.' => '_',
            _ => c.to_ascii_uppercase(),
        })
        .collect()
}
