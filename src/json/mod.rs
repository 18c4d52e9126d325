//! A JSON value parser assembled from the combinators.
//!
//! Every grammar rule in [`grammar`] is a parser on its own and can be
//! composed or tested independently. [`parse`] and [`parse_complete`] are
//! convenience entry points that start from the beginning of a text.

pub mod grammar;
pub mod number;
pub mod string;
pub mod value;

pub use grammar::json_value;
pub use value::JsonValue;

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::pattern::whitespace;
use tracing::{debug, instrument, trace};

/// Parse a JSON value from the start of `text`
///
/// Input after the value is ignored, exactly as when running
/// [`json_value`] directly.
#[instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn parse(text: &str) -> Result<JsonValue, ParseError<'_>> {
    match json_value(Cursor::new(text)) {
        Ok((value, cursor)) => {
            trace!(consumed = cursor.position(), "parsed JSON value");
            Ok(value)
        }
        Err(error) => {
            debug!(
                position = error.position(),
                expected = error.expectation(),
                "invalid JSON"
            );
            Err(error)
        }
    }
}

/// Parse a JSON value that must make up the whole of `text`
///
/// Trailing whitespace is allowed. Anything else after the value fails with
/// "end of input" at the first unconsumed character.
#[instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn parse_complete(text: &str) -> Result<JsonValue, ParseError<'_>> {
    let parsed = json_value(Cursor::new(text)).and_then(|(value, cursor)| {
        let (_, cursor) = whitespace().parse(cursor)?;
        if cursor.is_at_end() {
            Ok(value)
        } else {
            Err(ParseError::expected("end of input", cursor))
        }
    });

    match &parsed {
        Ok(_) => trace!("parsed complete JSON document"),
        Err(error) => debug!(
            position = error.position(),
            expected = error.expectation(),
            "invalid JSON document"
        ),
    }

    parsed
}
