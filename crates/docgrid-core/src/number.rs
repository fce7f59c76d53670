//! Loose numeric coercion for table coordinates
//!
//! Coordinates come from free text in HTML cells. A coordinate counts as
//! numeric when it converts the way a dynamic-language `Number()` call
//! converts strings, not only when it is a strict decimal integer:
//!
//! | input            | value        |
//! |------------------|--------------|
//! | `""`, `"  "`     | `0`          |
//! | `" 12 "`         | `12`         |
//! | `"0x1F"`         | `31`         |
//! | `"1e3"`, `".5"`  | `1000`, `0.5`|
//! | `"-Infinity"`    | `-inf`       |
//! | `"abc"`, `"inf"` | not a number |

/// Returns true if `input` coerces to a number
///
/// # Example
///
/// ```
/// use docgrid_core::is_number;
///
/// assert!(is_number("42"));
/// assert!(is_number(""));
/// assert!(!is_number("y-coordinate"));
/// ```
pub fn is_number(input: &str) -> bool {
    coerce_number(input).is_some()
}

/// Converts `input` to a number using loose coercion rules
///
/// # Returns
///
/// `None` where the conversion would produce not-a-number
pub fn coerce_number(input: &str) -> Option<f64> {
    let s = input.trim_matches(is_coercion_whitespace);

    if s.is_empty() {
        return Some(0.0);
    }

    if let Some(radix) = radix_prefix(s) {
        return parse_radix_digits(&s[2..], radix);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // f64::from_str also takes "inf" and "nan", so check the shape first
    if is_decimal_literal(s) {
        s.parse::<f64>().ok()
    } else {
        None
    }
}

/// Whitespace stripped before coercion, BOM included
pub(crate) fn is_coercion_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn radix_prefix(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    match bytes[1] {
        b'x' | b'X' => Some(16),
        b'o' | b'O' => Some(8),
        b'b' | b'B' => Some(2),
        _ => None,
    }
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// Decimal literal: `[sign] (digits [. digits?] | . digits) [(e|E) [sign] digits]`
fn is_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
