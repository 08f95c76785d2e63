//! Pure input normalizers.
//!
//! Both functions are total and idempotent: any string in, a valid (possibly
//! empty) string out, and running one twice equals running it once. They are
//! applied synchronously inside change handlers before a value reaches the
//! form controller.

/// Strips every character that is not an ASCII digit or a decimal point.
///
/// Used by numeric and telephone field types to reduce raw keystroke/paste
/// input to its digit content.
///
/// # Examples
///
/// ```
/// use fieldkit_core::normalize_numeric;
///
/// assert_eq!(normalize_numeric("1,234.50 USD"), "1234.50");
/// assert_eq!(normalize_numeric("abc"), "");
/// ```
pub fn normalize_numeric(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Collapses runs of two or more spaces into a single space.
///
/// Generic text fields apply this on change so accidental double spaces
/// never reach the stored value. Single spaces and other whitespace are
/// left alone.
pub fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for c in raw.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keeps_digits_and_dots() {
        assert_eq!(normalize_numeric("12a3.4x"), "123.4");
        assert_eq!(normalize_numeric("+84 912"), "84912");
        assert_eq!(normalize_numeric(""), "");
    }

    #[test]
    fn numeric_is_idempotent() {
        let once = normalize_numeric("a1b2.c3");
        assert_eq!(normalize_numeric(&once), once);
    }

    #[test]
    fn whitespace_collapses_runs_only() {
        assert_eq!(collapse_whitespace("a  b   c"), "a b c");
        assert_eq!(collapse_whitespace("a b"), "a b");
        assert_eq!(collapse_whitespace("  "), " ");
    }

    #[test]
    fn whitespace_is_idempotent() {
        let once = collapse_whitespace("x    y  z");
        assert_eq!(collapse_whitespace(&once), once);
    }
}
