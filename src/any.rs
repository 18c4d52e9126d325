use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// An ordered collection of parsers sharing one output type
///
/// Implemented for tuples of up to eight parsers, arrays, and `Vec`s. Tuples
/// allow each alternative to be a different parser type; arrays and `Vec`s
/// need a single type, typically [`BoxedParser`](crate::boxed::BoxedParser).
pub trait Alternatives<'code> {
    type Output;

    /// Run each alternative against `cursor` in order and return the first
    /// success, or `None` when every alternative failed
    fn first_success(&self, cursor: Cursor<'code>) -> Option<(Self::Output, Cursor<'code>)>;
}

macro_rules! impl_alternatives_for_tuple {
    ($($parser:ident $index:tt),+) => {
        impl<'code, T, $($parser),+> Alternatives<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code, Output = T>,)+
        {
            type Output = T;

            fn first_success(&self, cursor: Cursor<'code>) -> Option<(T, Cursor<'code>)> {
                $(
                    if let Ok(success) = self.$index.parse(cursor) {
                        return Some(success);
                    }
                )+
                None
            }
        }
    };
}

impl_alternatives_for_tuple!(P0 0);
impl_alternatives_for_tuple!(P0 0, P1 1);
impl_alternatives_for_tuple!(P0 0, P1 1, P2 2);
impl_alternatives_for_tuple!(P0 0, P1 1, P2 2, P3 3);
impl_alternatives_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_alternatives_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_alternatives_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_alternatives_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);

impl<'code, P, const N: usize> Alternatives<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn first_success(&self, cursor: Cursor<'code>) -> Option<(Self::Output, Cursor<'code>)> {
        self.iter().find_map(|parser| parser.parse(cursor).ok())
    }
}

impl<'code, P> Alternatives<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn first_success(&self, cursor: Cursor<'code>) -> Option<(Self::Output, Cursor<'code>)> {
        self.iter().find_map(|parser| parser.parse(cursor).ok())
    }
}

/// Parser combinator that tries alternatives in order and returns the first
/// success
///
/// Every alternative is tried from the same starting cursor. If all of them
/// fail, their individual errors are discarded and a single
/// [`ParseError::NoParserMatched`] is returned at the starting cursor.
///
/// Order matters: when two alternatives can both match a prefix of the input,
/// the one listed first wins, so longer or more specific alternatives belong
/// before shorter or more general ones.
pub struct Any<A> {
    alternatives: A,
}

impl<A> Any<A> {
    pub fn new(alternatives: A) -> Self {
        Any { alternatives }
    }
}

impl<'code, A> Parser<'code> for Any<A>
where
    A: Alternatives<'code>,
{
    type Output = A::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.alternatives
            .first_success(cursor)
            .ok_or_else(|| ParseError::no_parser_matched(cursor))
    }
}

/// Try `alternatives` in order and keep the first success
pub fn any<'code, A>(alternatives: A) -> Any<A>
where
    A: Alternatives<'code>,
{
    Any::new(alternatives)
}
