//! Numeric field types for G-Code values

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// Parse an axis value the permissive way
///
/// Takes the longest prefix of `text` that reads as a decimal floating point
/// number (optional sign, digits, fraction and exponent) and ignores the rest.
/// Text with no such prefix reads as `0.0`.
pub fn parse_axis(text: &str) -> f64 {
    number(text)
        .ok()
        .and_then(|(_, n)| n.parse().ok())
        .unwrap_or(0.0)
}

fn number(input: &str) -> IResult<&str, &str> {
    fn mantissa(input: &str) -> IResult<&str, &str> {
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        ))(input)
    }

    fn exponent(input: &str) -> IResult<&str, &str> {
        recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
    }

    fn special(input: &str) -> IResult<&str, &str> {
        alt((tag_no_case("infinity"), tag_no_case("inf"), tag_no_case("nan")))(input)
    }

    recognize(pair(
        opt(one_of("+-")),
        alt((recognize(pair(mantissa, opt(exponent))), special)),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::parse_axis;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_axis("1.000000"), 1.0);
        assert_eq!(parse_axis("-12.5"), -12.5);
        assert_eq!(parse_axis("+3"), 3.0);
        assert_eq!(parse_axis("7."), 7.0);
        assert_eq!(parse_axis(".42"), 0.42);
        assert_eq!(parse_axis("-.42"), -0.42);
        assert_eq!(parse_axis("1.5e2"), 150.0);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_axis("2.5F100"), 2.5);
        assert_eq!(parse_axis("10e"), 10.0);
        assert_eq!(parse_axis("4.0.1"), 4.0);
    }

    #[test]
    fn malformed_reads_as_zero() {
        assert_eq!(parse_axis(""), 0.0);
        assert_eq!(parse_axis("abc"), 0.0);
        assert_eq!(parse_axis("."), 0.0);
        assert_eq!(parse_axis("-"), 0.0);
    }

    #[test]
    fn special_values() {
        assert!(parse_axis("inf").is_infinite());
        assert!(parse_axis("NaN").is_nan());
    }
}
