use crate::cursor::Cursor;
use std::borrow::Cow;
use thiserror::Error;

/// Outcome of running a parser
///
/// `Ok((value, cursor))` carries the produced value and the cursor just past
/// the consumed input. `Err` carries the failure and where it happened.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), ParseError<'code>>;

/// Description used when every branch of an alternation failed
pub const NO_PARSER_MATCHED: &str = "no parser matched";

/// A parse failure
///
/// The cursor of a failure is never further along than the cursor the
/// failing parser was handed. Callers resume from their own saved cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<'code> {
    /// The input at the cursor did not match what a primitive required
    #[error("expected {expected} at {cursor}")]
    Expected {
        expected: Cow<'static, str>,
        cursor: Cursor<'code>,
    },
    /// Every alternative of an ordered alternation failed
    #[error("no parser matched at {cursor}")]
    NoParserMatched { cursor: Cursor<'code> },
}

impl<'code> ParseError<'code> {
    pub fn expected(expected: impl Into<Cow<'static, str>>, cursor: Cursor<'code>) -> Self {
        ParseError::Expected {
            expected: expected.into(),
            cursor,
        }
    }

    pub fn no_parser_matched(cursor: Cursor<'code>) -> Self {
        ParseError::NoParserMatched { cursor }
    }

    /// Human-readable description of what was expected at the failure point
    pub fn expectation(&self) -> &str {
        match self {
            ParseError::Expected { expected, .. } => expected,
            ParseError::NoParserMatched { .. } => NO_PARSER_MATCHED,
        }
    }

    /// The cursor at the point of failure
    pub fn cursor(&self) -> Cursor<'code> {
        match self {
            ParseError::Expected { cursor, .. } | ParseError::NoParserMatched { cursor } => *cursor,
        }
    }

    /// Byte offset at the point of failure
    pub fn position(&self) -> usize {
        self.cursor().position()
    }

    /// Multi-line report with the surrounding source lines
    pub fn report(&self) -> String {
        let mut report = format!("Syntax error: {}\n\n", self);
        for line in self.cursor().context_lines() {
            report.push_str(&line);
            report.push('\n');
        }
        report
    }
}
