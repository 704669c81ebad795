//! # Validation Module
//!
//! Input normalization and configuration checks.
//!
//! ## Two Very Different Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  User input (form fields)                                               │
//! │  ├── Counts: normalize_count() ── never rejects, degrades to 0          │
//! │  └── Flags / package keys: taken as given                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  SelectionState (always valid by construction)                          │
//! │                                                                         │
//! │  Operator input (price table config)                                    │
//! │  └── validate_price_cents() ── rejects, startup fails loudly            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::validation::normalize_count;
//!
//! assert_eq!(normalize_count("12"), 12);
//! assert_eq!(normalize_count("-5"), 0);
//! assert_eq!(normalize_count("abc"), 0);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Count Normalization
// =============================================================================

/// Normalizes raw text from a count field into a non-negative count.
///
/// ## Rules
/// Parses the way a browser's `parseInt(value, 10)` does:
/// - leading whitespace is skipped
/// - an optional `+` or `-` sign is read
/// - the longest run of decimal digits is read; anything after it is ignored
///
/// The parsed value is kept if it is greater than zero. Everything else
/// (no digits, zero, negative) becomes 0. Values beyond `u32::MAX` saturate.
///
/// Note that this does not distinguish an empty field from `"-5"` or from
/// `"garbage"`: all three become 0.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Products field: user types                                             │
/// │                                                                         │
/// │    "4"      ──► 4                                                       │
/// │    " 12abc" ──► 12                                                      │
/// │    "3.9"    ──► 3                                                       │
/// │    "-5"     ──► 0                                                       │
/// │    ""       ──► 0                                                       │
/// │    "abc"    ──► 0                                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn normalize_count(raw: &str) -> u32 {
    // parseInt also skips a leading byte-order mark
    let text = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'));
    }

    if negative || !seen_digit {
        return 0;
    }

    value
}

/// Normalizes an already-numeric count.
///
/// Same policy as [`normalize_count`]: positive values pass through
/// (saturating at `u32::MAX`), everything else becomes 0.
pub fn normalize_quantity(qty: i64) -> u32 {
    if qty <= 0 {
        0
    } else {
        u32::try_from(qty).unwrap_or(u32::MAX)
    }
}

// =============================================================================
// Price Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free add-ons)
///
/// ## Example
/// ```rust
/// use quote_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1000).is_ok());  // $10.00
/// assert!(validate_price_cents(0).is_ok());     // Free
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_count_plain() {
        assert_eq!(normalize_count("5"), 5);
        assert_eq!(normalize_count("+7"), 7);
        assert_eq!(normalize_count("0"), 0);
    }

    #[test]
    fn test_normalize_count_degrades_to_zero() {
        assert_eq!(normalize_count(""), 0);
        assert_eq!(normalize_count("   "), 0);
        assert_eq!(normalize_count("abc"), 0);
        assert_eq!(normalize_count("-3"), 0);
        assert_eq!(normalize_count("-0"), 0);
        assert_eq!(normalize_count("-"), 0);
        assert_eq!(normalize_count("+"), 0);
    }

    #[test]
    fn test_normalize_count_reads_leading_digits() {
        assert_eq!(normalize_count("  12"), 12);
        assert_eq!(normalize_count("12abc"), 12);
        assert_eq!(normalize_count("3.9"), 3);
        assert_eq!(normalize_count("1e3"), 1);
        assert_eq!(normalize_count("007"), 7);
        assert_eq!(normalize_count("0x10"), 0);
        assert_eq!(normalize_count("abc12"), 0);
    }

    #[test]
    fn test_normalize_count_skips_leading_space_and_bom() {
        assert_eq!(normalize_count("\u{FEFF}5"), 5);
        assert_eq!(normalize_count("\u{FEFF} \t8"), 8);
        assert_eq!(normalize_count("\u{00A0}4"), 4);
        assert_eq!(normalize_count("\n\r2"), 2);
        assert_eq!(normalize_count("\u{FEFF}-5"), 0);
        assert_eq!(normalize_count("- 5"), 0);
    }

    #[test]
    fn test_normalize_count_saturates() {
        assert_eq!(normalize_count("4294967295"), u32::MAX);
        assert_eq!(normalize_count("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_normalize_quantity() {
        assert_eq!(normalize_quantity(9), 9);
        assert_eq!(normalize_quantity(0), 0);
        assert_eq!(normalize_quantity(-9), 0);
        assert_eq!(normalize_quantity(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any positive integer survives normalization unchanged.
            #[test]
            fn positive_integers_pass_through(n in 1u32..=u32::MAX) {
                prop_assert_eq!(normalize_count(&n.to_string()), n);
                prop_assert_eq!(normalize_quantity(i64::from(n)), n);
            }

            /// Property: zero and negatives always become 0.
            #[test]
            fn non_positive_integers_become_zero(n in i64::MIN..=0i64) {
                prop_assert_eq!(normalize_count(&n.to_string()), 0);
                prop_assert_eq!(normalize_quantity(n), 0);
            }

            /// Property: text without a leading number is always 0.
            #[test]
            fn non_numeric_text_becomes_zero(text in "[a-zA-Z_ ]{0,16}") {
                prop_assert_eq!(normalize_count(&text), 0);
            }

            /// Property: text and numeric paths agree.
            #[test]
            fn text_and_numeric_paths_agree(n in any::<i64>()) {
                prop_assert_eq!(normalize_count(&n.to_string()), normalize_quantity(n));
            }
        }
    }
}
