//! Number scanners.
//!
//! The floating-point scan must be tried before the integer scan: digits
//! alone would stop at a decimal point or exponent marker and leave the rest
//! of the literal behind. A span the float scan finds but cannot convert
//! fails the number outright.

use super::value::JsonValue;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::pattern::{digits, numeric_literal};

/// Expectation reported for a numeric span that is not a number
pub const MALFORMED_FLOAT: &str = "float";

/// Scan a span of numeric-literal characters and convert it to a number
///
/// A span that does not form a number (`1e`, `--1`, a lone `.`) fails with
/// [`MALFORMED_FLOAT`] at the starting cursor.
pub fn float(cursor: Cursor<'_>) -> ParseResult<'_, f64> {
    let (span, next) = numeric_literal().parse(cursor)?;
    match span.parse::<f64>() {
        Ok(value) => Ok((value, next)),
        Err(_) => Err(ParseError::expected(MALFORMED_FLOAT, cursor)),
    }
}

/// Scan one or more digits as a non-negative number
pub fn integer(cursor: Cursor<'_>) -> ParseResult<'_, f64> {
    let (span, next) = digits().parse(cursor)?;
    match span.parse::<f64>() {
        Ok(value) => Ok((value, next)),
        Err(_) => Err(ParseError::expected("integer", cursor)),
    }
}

/// JSON number: a float scan, falling back to an integer scan only when no
/// numeric span was found at all
pub fn number(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    let (value, next) = match float(cursor) {
        Ok(success) => success,
        Err(error) if error.expectation() == MALFORMED_FLOAT => return Err(error),
        Err(_) => integer(cursor)?,
    };
    Ok((JsonValue::Number(value), next))
}
