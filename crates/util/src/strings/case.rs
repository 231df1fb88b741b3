/// Uppercase the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use handy_util::strings::uppercase_first_letter;
///
/// assert_eq!(uppercase_first_letter("lucy"), "Lucy");
/// ```
pub fn uppercase_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
