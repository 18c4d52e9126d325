use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// A fixed-arity, possibly heterogeneous, ordered list of parsers
///
/// Implemented for tuples of up to eight parsers. The output is the tuple of
/// every parser's output, in order.
pub trait Steps<'code> {
    type Output;

    /// Run each step in order, threading the cursor forward, and stop at the
    /// first failure
    fn run(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

macro_rules! impl_steps_for_tuple {
    ($($parser:ident $value:ident $index:tt),+) => {
        impl<'code, $($parser),+> Steps<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code>,)+
        {
            type Output = ($($parser::Output,)+);

            fn run(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
                $(
                    let ($value, cursor) = self.$index.parse(cursor)?;
                )+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_steps_for_tuple!(P0 v0 0);
impl_steps_for_tuple!(P0 v0 0, P1 v1 1);
impl_steps_for_tuple!(P0 v0 0, P1 v1 1, P2 v2 2);
impl_steps_for_tuple!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3);
impl_steps_for_tuple!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4);
impl_steps_for_tuple!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5);
impl_steps_for_tuple!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6);
impl_steps_for_tuple!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7);

/// Parser combinator that runs parsers one after another
///
/// On success the outputs come back as a flat tuple. On the first failure
/// that failure is returned as is, and later parsers are never run.
///
/// Example:
/// ```
/// use jsoncomb::{Cursor, Parser};
/// use jsoncomb::literal::literal;
/// use jsoncomb::pattern::digits;
/// use jsoncomb::sequence::sequence;
///
/// let cursor = Cursor::new("123.456");
/// let ((int_part, _, frac_part), cursor) = sequence((digits(), literal("."), digits()))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(int_part, "123");
/// assert_eq!(frac_part, "456");
/// assert!(cursor.is_at_end());
/// ```
pub struct Sequence<S> {
    steps: S,
}

impl<S> Sequence<S> {
    pub fn new(steps: S) -> Self {
        Sequence { steps }
    }
}

impl<'code, S> Parser<'code> for Sequence<S>
where
    S: Steps<'code>,
{
    type Output = S::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.steps.run(cursor)
    }
}

/// Run the tuple of parsers in `steps` one after another
pub fn sequence<'code, S>(steps: S) -> Sequence<S>
where
    S: Steps<'code>,
{
    Sequence::new(steps)
}
