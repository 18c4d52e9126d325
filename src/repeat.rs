use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Applies the inner parser until it fails and returns every value collected
/// so far, together with the cursor after the last success. The failing
/// attempt is discarded, so `Repeat` itself never fails.
///
/// The inner parser must not be able to succeed without consuming input,
/// otherwise this loops forever.
pub struct Repeat<P> {
    parser: P,
}

impl<P> Repeat<P> {
    pub fn new(parser: P) -> Self {
        Repeat { parser }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Apply `parser` until it fails, collecting every value
pub fn repeat<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::pattern::digits;
    use crate::sequence::sequence;
    use proptest::prelude::*;

    #[test]
    fn test_repeat_zero_matches() {
        let cursor = Cursor::new("xyz");
        let (results, next) = repeat(literal("a")).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_repeat_one_match() {
        let (results, cursor) = repeat(literal("a")).parse(Cursor::new("abc")).unwrap();
        assert_eq!(results, vec!["a"]);
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_repeat_multiple_matches() {
        let (results, cursor) = repeat(literal("a")).parse(Cursor::new("aaabcd")).unwrap();
        assert_eq!(results, vec!["a", "a", "a"]);
        assert_eq!(cursor.rest(), "bcd");
    }

    #[test]
    fn test_repeat_all_input() {
        let (results, cursor) = repeat(literal("a")).parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(results.len(), 4);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_repeat_empty_input() {
        let (results, cursor) = repeat(literal("a")).parse(Cursor::new("")).unwrap();
        assert!(results.is_empty());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_repeat_discards_partial_attempt() {
        // The third attempt matches "1" then fails on ";", so the cursor must
        // stay after the second complete item
        let item = sequence((digits(), literal(";")));
        let (results, cursor) = repeat(item).parse(Cursor::new("1;2;1")).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(cursor.rest(), "1");
    }

    proptest! {
        #[test]
        fn test_repeat_never_fails(input in "\\PC{0,40}") {
            let cursor = Cursor::new(&input);
            let (results, next) = repeat(digits()).parse(cursor).unwrap();
            prop_assert!(results.len() <= 1);
            prop_assert!(next.position() >= cursor.position());
        }

        #[test]
        fn test_repeat_collects_every_item(count in 0usize..50) {
            let input = "ab".repeat(count);
            let (results, cursor) = repeat(literal("ab")).parse(Cursor::new(&input)).unwrap();
            prop_assert_eq!(results.len(), count);
            prop_assert!(cursor.is_at_end());
        }
    }
}
