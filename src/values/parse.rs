//! Lexical grammars shared by the value adapters.

use nom::{
    IResult, Parser,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0, u8 as byte},
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, preceded},
};

/// Parse whitespace around an inner parser
fn ws<'a, P, O>(inner: P) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parse the leading number of a quantity
fn leading_number(input: &str) -> IResult<&str, f64> {
    preceded(multispace0, double).parse(input)
}

/// Split `"12.5 km/h"` into `(12.5, "km/h")`. The unit part is trimmed and
/// may be empty. Returns `None` when the text does not start with a number.
pub(crate) fn split_quantity(text: &str) -> Option<(f64, &str)> {
    let (rest, value) = leading_number(text).ok()?;
    Some((value, rest.trim()))
}

/// Parse a finite floating point number occupying the whole text
pub(crate) fn finite_double(text: &str) -> Option<f64> {
    let (_, value) = all_consuming(ws(double)).parse(text).ok()?;
    value.is_finite().then_some(value)
}

/// Parse `RGB(r, g, b)` (case-insensitive) into its three components
pub(crate) fn rgb_triplet(text: &str) -> Option<(u8, u8, u8)> {
    let (_, components) = all_consuming(ws(delimited(
        tag_no_case("RGB("),
        separated_list1(ws(char(',')), ws(byte)),
        char(')'),
    )))
    .parse(text)
    .ok()?;
    match components.as_slice() {
        [r, g, b] => Some((*r, *g, *b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_quantity() {
        assert_eq!(split_quantity("0.0 s"), Some((0.0, "s")));
        assert_eq!(split_quantity("  1h "), Some((1.0, "h")));
        assert_eq!(split_quantity("100km/h"), Some((100.0, "km/h")));
        assert_eq!(split_quantity("-2.5e1 m"), Some((-25.0, "m")));
        assert_eq!(split_quantity("42"), Some((42.0, "")));
        assert_eq!(split_quantity("m"), None);
    }

    #[test]
    fn test_finite_double() {
        assert_eq!(finite_double("1.0"), Some(1.0));
        assert_eq!(finite_double(" .5 "), Some(0.5));
        assert_eq!(finite_double("1.0x"), None);
        assert_eq!(finite_double("inf"), None);
        assert_eq!(finite_double(""), None);
    }

    #[test]
    fn test_rgb_triplet() {
        assert_eq!(rgb_triplet("RGB(255, 0, 12)"), Some((255, 0, 12)));
        assert_eq!(rgb_triplet("rgb(1,2,3)"), Some((1, 2, 3)));
        assert_eq!(rgb_triplet("RGB(1,2)"), None);
        assert_eq!(rgb_triplet("RGB(256,0,0)"), None);
    }
}
