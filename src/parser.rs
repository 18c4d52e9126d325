use crate::cursor::Cursor;
use crate::error::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to a [`ParseResult`]. It holds no
/// mutable state, so the same parser may be run on many cursors, including
/// from several threads at once.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor just past the consumed input on
    /// success. On failure the reported cursor is never past `cursor`.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Plain functions and closures are parsers
///
/// This is what lets grammar rules refer to each other by name: a rule
/// written as `fn rule(cursor: Cursor) -> ParseResult<T>` is only resolved
/// when it is called, so mutually recursive rules need no forward
/// declarations.
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        self(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    fn letter_a(cursor: Cursor<'_>) -> ParseResult<'_, char> {
        match cursor.peek() {
            Some('a') => Ok(('a', cursor.advance(1))),
            _ => Err(ParseError::expected("`a`", cursor)),
        }
    }

    #[test]
    fn test_function_is_parser() {
        let (value, cursor) = letter_a.parse(Cursor::new("ab")).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_closure_is_parser() {
        let parser = |cursor: Cursor<'static>| -> ParseResult<'static, usize> {
            Ok((cursor.rest().len(), cursor))
        };

        let (len, cursor) = parser.parse(Cursor::new("four")).unwrap();
        assert_eq!(len, 4);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_function_failure_keeps_cursor() {
        let cursor = Cursor::new("xyz");
        let error = letter_a.parse(cursor).unwrap_err();
        assert_eq!(error.cursor(), cursor);
    }
}
