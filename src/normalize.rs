//! Input normalization applied at every lookup entry point.
//!
//! Lookups accept loosely typed input: a state code may arrive as an integer,
//! as a numeric string read from a CSV column, or not at all. Two rules turn
//! any such input into a table key:
//!
//! - Numeric keys use *leading integer* parsing. Leading whitespace and a
//!   single sign are accepted, `_` may separate digits, and parsing stops at
//!   the first other character. Input without a leading digit, or whose value
//!   overflows `i64`, becomes `0`. No reference table contains `0`, so such
//!   input ends up as an ordinary miss instead of an error.
//! - Name and abbreviation keys are uppercased. Absent input becomes the
//!   empty string, which no table contains.
//!
//! ```
//! use geolookup::normalize::{canonical_key, coerce_code};
//!
//! assert_eq!(coerce_code(&"06"), 6);
//! assert_eq!(coerce_code(&" 12 Main St"), 12);
//! assert_eq!(coerce_code(&"asdf"), 0);
//! assert_eq!(coerce_code(&None::<u32>), 0);
//!
//! assert_eq!(canonical_key(&"California"), "CALIFORNIA");
//! assert_eq!(canonical_key(&None::<&str>), "");
//! ```

/// A value that can be coerced to a numeric table key.
pub trait CodeInput {
    /// Returns the coerced code, `0` when the input has no numeric reading.
    fn to_code(&self) -> i64;
}

/// A value that can be canonicalized to a name or abbreviation table key.
pub trait KeyInput {
    /// Returns the uppercased key, empty when the input is absent.
    fn to_key(&self) -> String;
}

/// Coerces `input` to a numeric key using leading-integer parsing.
pub fn coerce_code<T: CodeInput + ?Sized>(input: &T) -> i64 { input.to_code() }

/// Canonicalizes `input` to an uppercase key.
pub fn canonical_key<T: KeyInput + ?Sized>(input: &T) -> String { input.to_key() }

/// Parses the integer prefix of `input`, returning `0` when there is none.
///
/// # Examples
///
/// ```
/// use geolookup::normalize::parse_leading_integer;
///
/// assert_eq!(parse_leading_integer("  42abc"), 42);
/// assert_eq!(parse_leading_integer("-7"), -7);
/// assert_eq!(parse_leading_integer("1_000"), 1000);
/// assert_eq!(parse_leading_integer("abc"), 0);
/// ```
pub fn parse_leading_integer(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    let mut after_underscore = false;
    for byte in digits.bytes() {
        match byte {
            b'0'..=b'9' => {
                let digit = i64::from(byte - b'0');
                let next = value.checked_mul(10).and_then(|v| {
                    if negative { v.checked_sub(digit) } else { v.checked_add(digit) }
                });
                match next {
                    Some(next) => value = next,
                    None => return 0,
                }
                seen_digit = true;
                after_underscore = false;
            }
            b'_' if seen_digit && !after_underscore => after_underscore = true,
            _ => break,
        }
    }
    value
}

/// Converts a coerced code into the key type of the reference tables.
///
/// Negative and oversized codes can never be present, so they map to `None`.
pub(crate) fn table_code<T: CodeInput + ?Sized>(input: &T) -> Option<u32> {
    u32::try_from(coerce_code(input)).ok()
}

macro_rules! impl_code_input_for_integers {
    ($($int:ty),* $(,)?) => {
        $(
            impl CodeInput for $int {
                fn to_code(&self) -> i64 { i64::try_from(*self).unwrap_or(0) }
            }
        )*
    };
}

impl_code_input_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_code_input_for_floats {
    ($($float:ty),* $(,)?) => {
        $(
            impl CodeInput for $float {
                fn to_code(&self) -> i64 {
                    let truncated = self.trunc();
                    if truncated.is_finite()
                        && truncated >= i64::MIN as $float
                        && truncated < i64::MAX as $float
                    {
                        truncated as i64
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_code_input_for_floats!(f32, f64);

impl CodeInput for str {
    fn to_code(&self) -> i64 { parse_leading_integer(self) }
}

impl CodeInput for String {
    fn to_code(&self) -> i64 { parse_leading_integer(self) }
}

impl CodeInput for char {
    fn to_code(&self) -> i64 { self.to_digit(10).map_or(0, i64::from) }
}

impl<T: CodeInput> CodeInput for Option<T> {
    fn to_code(&self) -> i64 { self.as_ref().map_or(0, CodeInput::to_code) }
}

impl<T: CodeInput + ?Sized> CodeInput for &T {
    fn to_code(&self) -> i64 { (**self).to_code() }
}

impl KeyInput for str {
    fn to_key(&self) -> String { self.to_uppercase() }
}

impl KeyInput for String {
    fn to_key(&self) -> String { self.to_uppercase() }
}

impl KeyInput for char {
    fn to_key(&self) -> String { self.to_uppercase().collect() }
}

impl<T: KeyInput> KeyInput for Option<T> {
    fn to_key(&self) -> String { self.as_ref().map(KeyInput::to_key).unwrap_or_default() }
}

impl<T: KeyInput + ?Sized> KeyInput for &T {
    fn to_key(&self) -> String { (**self).to_key() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_pass_through() {
        assert_eq!(coerce_code(&1), 1);
        assert_eq!(coerce_code(&-1i64), -1);
        assert_eq!(coerce_code(&56u8), 56);
        assert_eq!(coerce_code(&u64::MAX), 0);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(coerce_code(&"1"), 1);
        assert_eq!(coerce_code(&String::from("72")), 72);
        assert_eq!(coerce_code(&"+5"), 5);
        assert_eq!(coerce_code(&"\t 9"), 9);
        assert_eq!(coerce_code(&"3.9"), 3);
    }

    #[test]
    fn test_non_numeric_strings_coerce_to_zero() {
        assert_eq!(coerce_code(&"asdf"), 0);
        assert_eq!(coerce_code(&""), 0);
        assert_eq!(coerce_code(&"-"), 0);
        assert_eq!(coerce_code(&"_1"), 0);
    }

    #[test]
    fn test_underscores_between_digits() {
        assert_eq!(parse_leading_integer("1_2"), 12);
        assert_eq!(parse_leading_integer("1__2"), 1);
        assert_eq!(parse_leading_integer("12_"), 12);
    }

    #[test]
    fn test_overflow_coerces_to_zero() {
        assert_eq!(parse_leading_integer("99999999999999999999"), 0);
        assert_eq!(parse_leading_integer("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn test_floats_truncate() {
        assert_eq!(coerce_code(&1.9f64), 1);
        assert_eq!(coerce_code(&-2.5f32), -2);
        assert_eq!(coerce_code(&f64::NAN), 0);
        assert_eq!(coerce_code(&f64::INFINITY), 0);
    }

    #[test]
    fn test_option_and_char() {
        assert_eq!(coerce_code(&Some("6")), 6);
        assert_eq!(coerce_code(&None::<&str>), 0);
        assert_eq!(coerce_code(&'7'), 7);
        assert_eq!(coerce_code(&'x'), 0);
    }

    #[test]
    fn test_table_code_rejects_negative() {
        assert_eq!(table_code(&-1), None);
        assert_eq!(table_code(&"asdf"), Some(0));
        assert_eq!(table_code(&"01"), Some(1));
    }

    #[test]
    fn test_keys_are_uppercased() {
        assert_eq!(canonical_key(&"ca"), "CA");
        assert_eq!(canonical_key(&String::from("New York")), "NEW YORK");
        assert_eq!(canonical_key(&Some("guam")), "GUAM");
        assert_eq!(canonical_key(&None::<String>), "");
        assert_eq!(canonical_key(&'a'), "A");
    }

    #[test]
    fn test_keys_are_not_trimmed() {
        assert_eq!(canonical_key(&" al "), " AL ");
    }
}
