//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 locales)
/// - `plural_s(1)` -> `""` (1 locale)
/// - `plural_s(5)` -> `"s"` (5 locales)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "preset")` -> `"0 presets"`
/// - `plural_count(1, "preset")` -> `"1 preset"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_s() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(2), "s");
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(1, "locale"), "1 locale");
        assert_eq!(plural_count(3, "locale"), "3 locales");
    }
}
