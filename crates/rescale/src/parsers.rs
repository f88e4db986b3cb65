//! Library of parser functions for the affine formula grammar
//!
//! A formula is split on the reserved variable before these parsers run, so
//! each fragment parser sees only the text on its side of the variable. The
//! caller wraps them in `all_consuming` so that trailing junk is rejected.

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{eof, map, map_parser, opt, recognize, value};
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::{pair, terminated, tuple};
use nom::IResult;

/// Coefficients contributed by the fragment after the variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Trailing {
    pub scale: f64,
    pub divisor: f64,
    pub offset: f64,
}

impl Default for Trailing {
    fn default() -> Self {
        Self {
            scale: 1.0,
            divisor: 1.0,
            offset: 0.0,
        }
    }
}

/// Unsigned numeric literal, decimal or scientific e.g. `2`, `2.`, `.5`, `1e-3`
///
/// The exponent sign is part of the literal, but a leading sign is not. Sign
/// characters ahead of a literal belong to the surrounding fragment grammar.
pub(crate) fn unsigned_decimal(i: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(i)
}

/// Numeric literal with an optional leading sign e.g. `-1e3`
fn signed_decimal(i: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), unsigned_decimal))(i)
}

/// Unsigned numeric literal parsed to an f64 value
fn unsigned_f64(i: &str) -> IResult<&str, f64> {
    map_parser(unsigned_decimal, double)(i)
}

/// Classify the term before the variable into a scale coefficient
///
/// Accepts empty (coefficient 1), a bare sign (coefficient ±1), or a signed
/// numeric literal immediately followed by `*` e.g. `2.5*`, `-1e3*`.
pub(crate) fn leading_fragment(i: &str) -> IResult<&str, f64> {
    alt((
        terminated(map_parser(signed_decimal, double), char('*')),
        map(one_of("+-"), |sign| if sign == '-' { -1.0 } else { 1.0 }),
        value(1.0, eof),
    ))(i)
}

/// Classify the term after the variable into scale/divisor/offset coefficients
///
/// Accepts empty, or one of `+ - * /` followed by an unsigned numeric
/// literal, then any run of further `±<number>` offset terms. The first
/// operator decides whether its literal scales or offsets; every later term
/// may only add or subtract.
pub(crate) fn trailing_fragment(i: &str) -> IResult<&str, Trailing> {
    alt((value(Trailing::default(), eof), trailing_terms))(i)
}

/// Non-empty trailing fragment e.g. `/2-1.5e1`, `*2`, `+3-4`
fn trailing_terms(i: &str) -> IResult<&str, Trailing> {
    let (i, operator) = one_of("+-*/")(i)?;
    let (i, first) = unsigned_f64(i)?;
    let (i, rest) = many0(pair(one_of("+-"), unsigned_f64))(i)?;

    let mut trailing = Trailing::default();
    match operator {
        '*' => trailing.scale = first,
        '/' => trailing.divisor = first,
        '+' => trailing.offset = first,
        _ => trailing.offset = -first,
    }
    for (sign, term) in rest {
        match sign {
            '+' => trailing.offset += term,
            _ => trailing.offset -= term,
        }
    }

    Ok((i, trailing))
}
