use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// The set of characters a pattern accepts
#[derive(Debug, Clone)]
pub enum CharClass {
    /// ASCII digits `0-9`
    Digit,
    /// Unicode whitespace
    Whitespace,
    /// Any character in the given set
    OneOf(Cow<'static, str>),
    /// Any character the predicate accepts
    Predicate(fn(char) -> bool),
}

impl CharClass {
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Whitespace => c.is_whitespace(),
            CharClass::OneOf(set) => set.contains(c),
            CharClass::Predicate(accepts) => accepts(c),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrMore,
    OneOrMore,
}

/// Anchored pattern matcher
///
/// Matches the longest run of characters from a [`CharClass`] starting exactly
/// at the cursor. The match never skips ahead to search for a later
/// occurrence. Returns the matched slice of the input.
pub struct Pattern {
    description: Cow<'static, str>,
    class: CharClass,
    quantifier: Quantifier,
}

impl Pattern {
    pub fn new(
        description: impl Into<Cow<'static, str>>,
        class: CharClass,
        quantifier: Quantifier,
    ) -> Self {
        Pattern {
            description: description.into(),
            class,
            quantifier,
        }
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !self.class.contains(c))
            .map_or(rest.len(), |(i, _)| i);

        if len == 0 && self.quantifier == Quantifier::OneOrMore {
            return Err(ParseError::expected(self.description.clone(), cursor));
        }

        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Match a run of `class` characters, reporting `description` when the run
/// must be non-empty and is not
pub fn pattern(
    description: impl Into<Cow<'static, str>>,
    class: CharClass,
    quantifier: Quantifier,
) -> Pattern {
    Pattern::new(description, class, quantifier)
}

/// One or more ASCII digits
pub fn digits() -> Pattern {
    pattern("digits", CharClass::Digit, Quantifier::OneOrMore)
}

/// One or more characters that may appear in a numeric literal: digits, `.`,
/// `e`, `E`, `+` and `-`
///
/// This only delimits a candidate span; whether the span is a well-formed
/// number is decided by whoever converts it.
pub fn numeric_literal() -> Pattern {
    pattern(
        "numeric literal",
        CharClass::OneOf(Cow::Borrowed("0123456789.eE+-")),
        Quantifier::OneOrMore,
    )
}

/// Zero or more whitespace characters; never fails
pub fn whitespace() -> Pattern {
    pattern("whitespace", CharClass::Whitespace, Quantifier::ZeroOrMore)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_match() {
        let (matched, cursor) = digits().parse(Cursor::new("123abc")).unwrap();
        assert_eq!(matched, "123");
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_digits_is_anchored() {
        // Digits later in the input must not be found
        let cursor = Cursor::new("abc123");
        let error = digits().parse(cursor).unwrap_err();
        assert_eq!(error.expectation(), "digits");
        assert_eq!(error.cursor(), cursor);
    }

    #[test]
    fn test_digits_at_end_of_input() {
        let cursor = Cursor::new("12").advance(2);
        assert!(digits().parse(cursor).is_err());
    }

    #[test]
    fn test_digits_rejects_non_ascii_digits() {
        assert!(digits().parse(Cursor::new("٣")).is_err());
    }

    #[test]
    fn test_numeric_literal() {
        let (matched, cursor) = numeric_literal().parse(Cursor::new("-1.5e+2]")).unwrap();
        assert_eq!(matched, "-1.5e+2");
        assert_eq!(cursor.rest(), "]");
    }

    #[test]
    fn test_numeric_literal_stops_at_comma() {
        let (matched, _) = numeric_literal().parse(Cursor::new("1,2")).unwrap();
        assert_eq!(matched, "1");
    }

    #[test]
    fn test_whitespace_zero_matches() {
        let cursor = Cursor::new("abc");
        let (matched, next) = whitespace().parse(cursor).unwrap();
        assert_eq!(matched, "");
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_whitespace_multiple() {
        let (matched, cursor) = whitespace().parse(Cursor::new(" \t\r\n x")).unwrap();
        assert_eq!(matched, " \t\r\n ");
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_whitespace_all_input() {
        let (_, cursor) = whitespace().parse(Cursor::new("   ")).unwrap();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_predicate_class() {
        let letters = pattern(
            "letters",
            CharClass::Predicate(char::is_alphabetic),
            Quantifier::OneOrMore,
        );
        let (matched, cursor) = letters.parse(Cursor::new("héllo1")).unwrap();
        assert_eq!(matched, "héllo");
        assert_eq!(cursor.rest(), "1");
    }
}
