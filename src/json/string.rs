//! Hand-written scanner for string literals.
//!
//! A backslash copies the character after it verbatim: `\"` yields `"`, `\\`
//! yields `\`, and `\n` yields `n`. Standard escape codes and `\u` sequences
//! are not interpreted.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};

/// Scan a double-quoted string literal and return its unescaped contents
///
/// Fails with "`\"`" at the given cursor when the input does not start with a
/// quote, and with "closing quote" at the end of input when the text runs out
/// before an unescaped closing quote.
pub fn string_literal(cursor: Cursor<'_>) -> ParseResult<'_, String> {
    if cursor.peek() != Some('"') {
        return Err(ParseError::expected("`\"`", cursor));
    }

    let body = cursor.advance(1);
    let mut value = String::new();
    let mut escaped = false;

    for (i, c) in body.rest().char_indices() {
        if escaped {
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return Ok((value, body.advance(i + 1)));
        } else {
            value.push(c);
        }
    }

    let end = body.advance(body.rest().len());
    Err(ParseError::expected("closing quote", end))
}
