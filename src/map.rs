use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Runs a parser and passes its value through a function
///
/// The cursor of a success is left as the inner parser returned it, and a
/// failure passes through untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Wrap `parser` so its value is passed through `mapper`
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Method form of [`map`]: `parser.map(f)`
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::any;
    use crate::literal::literal;
    use crate::pattern::digits;

    #[derive(Debug, PartialEq)]
    enum Token {
        Keyword(String),
        Number(u64),
    }

    #[test]
    fn test_map_digits_to_number() {
        let parser = digits().map(|d: &str| d.len());
        let (len, cursor) = parser.parse(Cursor::new("123x")).unwrap();
        assert_eq!(len, 3);
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_map_to_enum_with_any() {
        let keyword = literal("let").map(|k: &str| Token::Keyword(k.to_string()));
        let number = digits().map(|d: &str| Token::Number(d.parse().unwrap_or_default()));
        let parser = any((keyword, number));

        let (token, _) = parser.parse(Cursor::new("42")).unwrap();
        assert_eq!(token, Token::Number(42));

        let (token, _) = parser.parse(Cursor::new("let")).unwrap();
        assert_eq!(token, Token::Keyword("let".to_string()));
    }

    #[test]
    fn test_map_chaining() {
        let parser = literal("5")
            .map(|s: &str| s.chars().next())
            .map(|c| c.and_then(|c| c.to_digit(10)))
            .map(|d| format!("Digit: {:?}", d));

        let (result, cursor) = parser.parse(Cursor::new("5")).unwrap();
        assert_eq!(result, "Digit: Some(5)");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_map_preserves_errors() {
        let cursor = Cursor::new("xyz").advance(1);
        let plain = literal("A").parse(cursor).unwrap_err();
        let mapped = literal("A").map(|_| 1).parse(cursor).unwrap_err();
        assert_eq!(plain, mapped);
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(literal("9"), |s: &str| s.len());
        let (len, cursor) = parser.parse(Cursor::new("9")).unwrap();
        assert_eq!(len, 1);
        assert!(cursor.is_at_end());
    }
}
