use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// On success the matched slice of the input is returned. On failure nothing
/// is consumed and the error points at the cursor the parser was given.
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Literal {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.rest().starts_with(self.expected.as_ref()) {
            let next = cursor.advance(self.expected.len());
            Ok((cursor.slice_to(&next), next))
        } else {
            Err(ParseError::expected(
                format!("`{}`", self.expected),
                cursor,
            ))
        }
    }
}

/// Match `expected` exactly at the cursor
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
