//! Text parsers for rationals and base units.
//!
//! The grammar is small enough to state in full:
//!
//! ```bnf
//! integer   ::= [+ | -] digit+
//! rational  ::= integer [/ integer]
//! base_unit ::= symbol [^ rational]
//! unit      ::= base_unit { ' ' base_unit }
//! ```
//!
//! A symbol is any run of characters other than `^` and whitespace. The
//! combinators here only recognise a single token; the `FromStr` impls on
//! [`Rational`], [`BaseUnit`](crate::BaseUnit) and [`Unit`](crate::Unit)
//! insist that the whole input is consumed.

use log::warn;
use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::{char, digit1, one_of},
    combinator::{cut, map, map_res, opt, recognize},
    sequence::{pair, preceded},
};
use thiserror::Error;

use crate::Rational;

/// Errors raised while parsing rationals, base units or units from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is empty or whitespace only.
    #[error("Empty input")]
    Empty,

    /// A numeric segment is not a valid `i64`.
    #[error("Invalid integer in '{0}'")]
    InvalidInteger(String),

    /// A base unit token has an exponent but no symbol, e.g. `^2`.
    #[error("Missing unit symbol in '{0}'")]
    EmptySymbol(String),

    /// The token was recognised but characters remain after it.
    #[error("Unexpected trailing characters in '{0}': '{1}'")]
    TrailingInput(String, String),
}

/// Parse a signed decimal integer.
fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        if s.starts_with('+') {
            warn!("Integer '{}' starts with a redundant '+' sign, ignoring.", s);
        }
        s.parse::<i64>()
    })
    .parse(input)
}

/// Parse `N` or `N/D`.
pub(crate) fn rational(input: &str) -> IResult<&str, Rational> {
    map(
        pair(integer, opt(preceded(char('/'), cut(integer)))),
        |(numerator, denominator)| Rational::new(numerator, denominator.unwrap_or(1)),
    )
    .parse(input)
}

/// Parse a unit symbol: everything up to `^` or whitespace.
fn symbol(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '^' || c.is_whitespace()).parse(input)
}

/// Parse `symbol`, `symbol^N` or `symbol^N/D`. A missing exponent is `None`.
pub(crate) fn base_unit(input: &str) -> IResult<&str, (&str, Option<Rational>)> {
    pair(symbol, opt(preceded(char('^'), cut(rational)))).parse(input)
}

fn ensure_consumed(input: &str, rest: &str) -> Result<(), ParseError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::TrailingInput(
            input.to_string(),
            rest.to_string(),
        ))
    }
}

/// Parse a complete rational from `text`, ignoring surrounding whitespace.
pub(crate) fn parse_rational(text: &str) -> Result<Rational, ParseError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let (rest, value) =
        rational(input).map_err(|_| ParseError::InvalidInteger(input.to_string()))?;
    ensure_consumed(input, rest)?;
    Ok(value)
}

/// Parse a complete base unit token into its symbol and exponent.
pub(crate) fn parse_base_unit(text: &str) -> Result<(&str, Rational), ParseError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let (rest, (symbol, exponent)) =
        base_unit(input).map_err(|_| ParseError::InvalidInteger(input.to_string()))?;
    if symbol.is_empty() {
        return Err(ParseError::EmptySymbol(input.to_string()));
    }
    ensure_consumed(input, rest)?;

    Ok((symbol, exponent.unwrap_or(Rational::ONE)))
}
