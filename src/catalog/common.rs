//! Shared nom combinators used across the per-family catalog modules.
//!
//! Every catalog parser has the same outer shape: take the whole framed
//! payload, fully consume it, return a [`FieldMap`]. `full_match` adapts an
//! ordinary nom parser (which may leave a remainder) into that contract.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::{char, digit1, one_of, satisfy};
use nom::combinator::{map, map_res, opt, recognize};
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;

use crate::field::FieldMap;

/// Runs `parser` over `input` and succeeds only if it consumes the input
/// in full, matching the spec's "pattern anchored at both ends" semantics.
pub fn full_match<'a, O>(
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    input: &'a str,
) -> Option<O> {
    match parser(input) {
        Ok(("", out)) => Some(out),
        _ => None,
    }
}

/// A literal mnemonic with no arguments, e.g. `"AL"`.
pub fn literal(expected: &'static str) -> impl Fn(&str) -> Option<FieldMap> {
    move |input| full_match(tag::<_, _, nom::error::Error<&str>>(expected), input).map(|_| FieldMap::new())
}

/// Optional single space, as LX200 frequently tolerates `Sr12:34:56` and
/// `Sr 12:34:56` equally.
pub fn opt_space(input: &str) -> IResult<&str, Option<char>> {
    opt(char(' '))(input)
}

fn digits_n(n: usize) -> impl FnMut(&str) -> IResult<&str, &str> {
    take_while_m_n(n, n, |c: char| c.is_ascii_digit())
}

/// An unsigned integer of exactly `n` digits.
pub fn uint_n(n: usize) -> impl FnMut(&str) -> IResult<&str, i64> {
    map_res(digits_n(n), |s: &str| s.parse::<i64>())
}

/// A plain unsigned integer of 1 or more digits.
pub fn uint(input: &str) -> IResult<&str, i64> {
    map_res(digit1, |s: &str| s.parse::<i64>())(input)
}

/// A leading sign, `+` or `-`.
pub fn sign(input: &str) -> IResult<&str, i64> {
    map(one_of("+-"), |c| if c == '-' { -1 } else { 1 })(input)
}

/// A signed integer of exactly `n` digits after the sign.
pub fn signed_int_n(n: usize) -> impl FnMut(&str) -> IResult<&str, i64> {
    map(pair(sign, digits_n(n)), |(sign, digits): (i64, &str)| {
        sign * digits.parse::<i64>().unwrap_or(0)
    })
}

/// `NN.N`: two digits, a dot, one digit, as a float.
pub fn float_nn_n(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((digits_n(2), char('.'), digits_n(1)))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// `sNN.N`: a sign followed by `NN.N`.
pub fn signed_float_nn_n(input: &str) -> IResult<&str, f64> {
    map(pair(sign, float_nn_n), |(sign, value)| sign as f64 * value)(input)
}

/// A `HH:MM:SS` time triple, colon-separated.
pub fn time_triple(input: &str) -> IResult<&str, (i64, i64, i64)> {
    tuple((uint_n(2), preceded(char(':'), uint_n(2)), preceded(char(':'), uint_n(2))))(input)
}

/// A signed DMS triple `sDD<sep1>MM<sep2>SS`, negating minutes/seconds when
/// degrees is negative so the caller has a consistent signed triple, per
/// the "signed DMS semantics" rule.
pub fn signed_dms_triple(
    sep1: char,
    sep2: char,
) -> impl Fn(&str) -> IResult<&str, (i64, i64, i64)> {
    move |input| {
        let (input, deg_sign) = sign(input)?;
        let (input, degrees) = digits_n(2)(input)?;
        let degrees: i64 = degrees.parse().unwrap_or(0);
        let (input, _) = char(sep1)(input)?;
        let (input, minutes) = uint_n(2)(input)?;
        let (input, _) = char(sep2)(input)?;
        let (input, seconds) = uint_n(2)(input)?;

        let signed_degrees = deg_sign * degrees;
        let (minutes, seconds) = if signed_degrees < 0 {
            (-minutes, -seconds)
        } else {
            (minutes, seconds)
        };

        Ok((input, (signed_degrees, minutes, seconds)))
    }
}

/// A signed DM pair `sDDD<sep>MM` (no seconds), same sign propagation rule.
pub fn signed_dm_pair(sep: char) -> impl Fn(&str) -> IResult<&str, (i64, i64)> {
    move |input| {
        let (input, deg_sign) = sign(input)?;
        let (input, degrees) = digits_n(3)(input)?;
        let degrees: i64 = degrees.parse().unwrap_or(0);
        let (input, _) = char(sep)(input)?;
        let (input, minutes) = uint_n(2)(input)?;

        let signed_degrees = deg_sign * degrees;
        let minutes = if signed_degrees < 0 { -minutes } else { minutes };

        Ok((input, (signed_degrees, minutes)))
    }
}

/// An unsigned DM pair `DDD<sep>MM` (azimuth and similar 0-360 fields that
/// carry no sign).
pub fn unsigned_dm_pair(sep: char) -> impl Fn(&str) -> IResult<&str, (i64, i64)> {
    move |input| {
        let (input, degrees) = uint_n(3)(input)?;
        let (input, _) = char(sep)(input)?;
        let (input, minutes) = uint_n(2)(input)?;
        Ok((input, (degrees, minutes)))
    }
}

/// `idx`: a single digit 1-9, used by the focuser preset commands.
pub fn preset_idx(input: &str) -> IResult<&str, i64> {
    map(satisfy(|c| ('1'..='9').contains(&c)), |c| {
        c.to_digit(10).unwrap() as i64
    })(input)
}

/// A name field: word characters and spaces, up to 15 characters (the
/// spec's stated limit for site/preset names).
pub fn name_string(input: &str) -> IResult<&str, String> {
    map(
        take_while_m_n(0, 15, |c: char| c.is_ascii_alphanumeric() || c == ' '),
        |s: &str| s.to_string(),
    )(input)
}

/// One of the four cardinal directions used by guide/move/focuser commands.
pub fn direction_nsew(input: &str) -> IResult<&str, char> {
    alt((char('n'), char('s'), char('e'), char('w')))(input)
}
