/// How many bytes a wide character counts for unless told otherwise.
pub const DEFAULT_WIDE_BYTES: usize = 2;

fn is_wide(ch: char) -> bool {
    u32::from(ch) > 0xFF
}

/// Check whether a string contains any double-byte (wide) character, that
/// is, any character outside `U+0000..=U+00FF`.
///
/// # Examples
///
/// ```
/// use handy_util::strings::include_double_byte;
///
/// assert!(include_double_byte("hello 世界"));
/// assert!(!include_double_byte("café"));
/// ```
pub fn include_double_byte(s: &str) -> bool {
    s.chars().any(is_wide)
}

/// Width of a string, counting wide characters as [`DEFAULT_WIDE_BYTES`].
///
/// # Examples
///
/// ```
/// use handy_util::strings::length;
///
/// assert_eq!(length("ab中文"), 6);
/// ```
pub fn length(s: &str) -> usize {
    length_with(s, DEFAULT_WIDE_BYTES)
}

/// Width of a string, counting 1 per narrow character and `bytes_each_wide`
/// per wide character.
pub fn length_with(s: &str, bytes_each_wide: usize) -> usize {
    s.chars()
        .map(|ch| if is_wide(ch) { bytes_each_wide } else { 1 })
        .sum()
}
