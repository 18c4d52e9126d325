use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// A type-erased parser
///
/// Lets parsers of different concrete types live in one `Vec` or array, for
/// example as the alternatives of [`any`](crate::any::any).
pub struct BoxedParser<'code, T> {
    inner: Box<dyn Parser<'code, Output = T> + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new(parser: impl Parser<'code, Output = T> + 'code) -> Self {
        BoxedParser {
            inner: Box::new(parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
