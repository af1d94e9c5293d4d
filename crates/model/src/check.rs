//! Classifiers for values that arrive as text but must be spliced into SQL
//! as bare numbers.
//!
//! Native integers and floats always classify as numeric. Strings are
//! trimmed of surrounding whitespace and control characters, may carry one
//! leading sign, and are then checked for digits with at most one decimal
//! point and at most one exponent marker. `0x` prefixed hex literals count
//! as numeric but never as decimal.

pub trait Numeric {
    fn is_numeric(&self) -> bool;
    fn is_decimal(&self) -> bool;
}

macro_rules! impl_native_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn is_numeric(&self) -> bool {
                    true
                }

                fn is_decimal(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_native_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Numeric for str {
    fn is_numeric(&self) -> bool {
        classify(self, true)
    }

    fn is_decimal(&self) -> bool {
        classify(self, false)
    }
}

impl Numeric for String {
    fn is_numeric(&self) -> bool {
        self.as_str().is_numeric()
    }

    fn is_decimal(&self) -> bool {
        self.as_str().is_decimal()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn is_numeric(&self) -> bool {
        (**self).is_numeric()
    }

    fn is_decimal(&self) -> bool {
        (**self).is_decimal()
    }
}

/// Whether `value` reads as a number, hex literals included.
pub fn is_numeric<T: Numeric + ?Sized>(value: &T) -> bool {
    value.is_numeric()
}

/// Whether `value` reads as a base-10 number. Hex literals are rejected.
pub fn is_decimal<T: Numeric + ?Sized>(value: &T) -> bool {
    value.is_decimal()
}

/// Strips the surrounding whitespace and control characters the classifiers
/// ignore.
pub fn trim_value(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c.is_control())
}

fn classify(raw: &str, allow_hex: bool) -> bool {
    let trimmed = trim_value(raw);
    let digits = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => rest,
        None => trimmed,
    };
    if digits.is_empty() {
        return false;
    }

    let bytes = digits.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        return allow_hex && bytes[2..].iter().all(u8::is_ascii_hexdigit);
    }

    let last = bytes.len() - 1;
    let mut seen_point = false;
    let mut seen_exponent = false;
    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' => {
                if seen_point || seen_exponent || i == last {
                    return false;
                }
                seen_point = true;
            }
            b'e' | b'E' => {
                if i == 0 || seen_exponent || i == last {
                    return false;
                }
                seen_exponent = true;
            }
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_numbers() {
        assert!(is_numeric(&42_i64));
        assert!(is_numeric(&-3_i8));
        assert!(is_numeric(&2.5_f32));
        assert!(is_decimal(&7_u64));
        assert!(is_decimal(&f64::NAN));
    }

    #[test]
    fn test_plain_strings() {
        assert!(is_numeric("0"));
        assert!(is_numeric("18"));
        assert!(is_numeric("-18"));
        assert!(is_numeric("+3.14"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("12.5e3"));
        assert!(is_numeric("1E9"));
    }

    #[test]
    fn test_rejected_strings() {
        assert!(!is_numeric(""));
        assert!(!is_numeric("-"));
        assert!(!is_numeric("+"));
        assert!(!is_numeric("12.5.3"));
        assert!(!is_numeric(".5.5"));
        assert!(!is_numeric("e5"));
        assert!(!is_numeric("5e"));
        assert!(!is_numeric("1e2e3"));
        assert!(!is_numeric("1e2.5"));
        assert!(!is_numeric("5."));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("1 2"));
        assert!(!is_numeric("0x"));
        assert!(!is_numeric("--1"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(is_numeric(" 42 "));
        assert!(is_numeric("\t-7\n"));
        assert!(is_decimal("\r\n3.5\u{0b}"));
        assert!(!is_numeric("   "));
    }

    #[test]
    fn test_hex_literals() {
        assert!(is_numeric("0x1A"));
        assert!(is_numeric("0XdeadBEEF"));
        assert!(is_numeric("-0xff"));
        assert!(!is_numeric("0x1G"));
        assert!(!is_decimal("0x1A"));
        assert!(!is_decimal("0X10"));
    }

    #[test]
    fn test_decimal_matches_numeric_outside_hex() {
        for value in ["0", "18", "-2.5", "12.5e3", "", "e5", "12.5.3", "abc"] {
            assert_eq!(is_numeric(value), is_decimal(value), "value {value:?}");
        }
    }

    #[test]
    fn test_owned_and_borrowed_strings() {
        let owned = String::from("99");
        let borrowed: &str = "0x1A";
        assert!(is_numeric(&owned));
        assert!(is_decimal(&owned));
        assert!(is_numeric(&borrowed));
        assert!(!is_decimal(&borrowed));
    }
}
