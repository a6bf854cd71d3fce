//! Identifier checks for names in the conceptual space.
//!
//! Conceptual names must be simple identifiers: a letter, letter number or underscore followed
//! by letters, letter numbers, decimal digits, combining marks, connector punctuation or format
//! characters. A simple identifier never contains the `.` namespace separator. A single trailing
//! line feed is tolerated, as the .NET `$` anchor does.

use std::sync::LazyLock;

use regex::Regex;

static UNDOTTED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Nd}\p{Mn}\p{Mc}\p{Pc}\p{Cf}]*\n?\z")
        .expect("identifier pattern is a valid regex")
});

/// Returns true if `name` is a valid simple (undotted) identifier
#[must_use]
pub fn is_valid_undotted_name(name: &str) -> bool {
    !name.is_empty() && UNDOTTED_NAME_RE.is_match(name)
}

/// Returns true if `name` is empty or consists of whitespace only
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Length of `name` in UTF-16 code units
#[must_use]
pub fn name_length(name: &str) -> usize {
    name.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_undotted_names() {
        for name in ["Customer", "_internal", "Order2", "Straße", "Ⅻ_Roman", "a_b_c"] {
            assert!(is_valid_undotted_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_undotted_names() {
        for name in ["", "Foo.Bar", "2Fast", "with space", "dash-ed", "@at", "."] {
            assert!(!is_valid_undotted_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_trailing_line_feed() {
        assert!(is_valid_undotted_name("Customer\n"));
        assert!(!is_valid_undotted_name("Customer\n\n"));
        assert!(!is_valid_undotted_name("Customer\r\n"));
        assert!(!is_valid_undotted_name("\n"));
    }

    #[test]
    fn test_blank_names() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        assert_eq!(name_length("abc"), 3);
        assert_eq!(name_length("Straße"), 6);
        assert_eq!(name_length("\u{1D49C}"), 2);
        assert_eq!(name_length("a\u{1D49C}b"), 4);
    }
}
