// Loose string-to-number coercion for the hour-like threshold check.
//
// Pieces of a pair token are compared against a number without ever being
// validated, so this has to accept the same sloppy spellings the logs use
// ("07", " 13\r", "") and turn everything else into "not a number" instead of
// an error.

/// Numerators at or below this never produce a row.
pub const THRESHOLD: f64 = 12.;

pub fn coerce(text: &str) -> Option<f64> {
    let s = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if s.is_empty() {
        return Some(0.);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let digits = s
            .strip_prefix(prefix)
            .or_else(|| s.strip_prefix(&prefix.to_ascii_uppercase()));
        if let Some(digits) = digits {
            if digits.is_empty() {
                return None;
            }
            return digits.chars().try_fold(0f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
            });
        }
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64's FromStr also takes "inf"/"nan" spellings, which must not count.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse().ok()
}

/// `true` only when `text` coerces to a number strictly above `bound`.
#[inline]
pub fn exceeds(text: &str, bound: f64) -> bool {
    coerce(text).is_some_and(|v| v > bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("13", Some(13.))]
    #[case("07", Some(7.))]
    #[case(" 15\r", Some(15.))]
    #[case("\u{FEFF}13", Some(13.))]
    #[case("", Some(0.))]
    #[case("  ", Some(0.))]
    #[case("13.5", Some(13.5))]
    #[case(".5", Some(0.5))]
    #[case("1e2", Some(100.))]
    #[case("+4", Some(4.))]
    #[case("-3", Some(-3.))]
    #[case("0x1F", Some(31.))]
    #[case("0b101", Some(5.))]
    #[case("0o17", Some(15.))]
    #[case("Infinity", Some(f64::INFINITY))]
    #[case("-Infinity", Some(f64::NEG_INFINITY))]
    #[case("0x", None)]
    #[case("0xZZ", None)]
    #[case("2023-01-01", None)]
    #[case("abc", None)]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("1e", None)]
    #[case("12abc", None)]
    fn test_coerce(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(coerce(input), expected);
    }

    #[rstest]
    #[case("13", true)]
    #[case("12", false)]
    #[case("12.01", true)]
    #[case("07", false)]
    #[case("", false)]
    #[case("2023-01-01", false)]
    #[case("morning", false)]
    fn test_exceeds_threshold(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(exceeds(input, THRESHOLD), expected);
    }
}
