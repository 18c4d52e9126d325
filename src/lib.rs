//! # JsonComb - Parser Combinator Engine
//!
//! Small parsers are combined into larger ones: match a literal, match an
//! anchored pattern, try alternatives in order, repeat, sequence, transform.
//! The [`json`] module assembles a complete JSON value parser from these
//! pieces.
//!
//! The library is built around a few rules:
//!
//! - **Immutable cursors**: a [`Cursor`] is a `Copy` `(text, offset)` pair.
//!   Backtracking is keeping the old cursor and trying again from it.
//! - **Failures are values**: every parser returns a [`ParseResult`]; nothing
//!   panics and a failing parser never reports a position past where it
//!   started, except where documented.
//! - **No shared state**: parsers hold no mutable state and may be run
//!   concurrently on independent cursors.
//!
//! ```
//! use jsoncomb::json::{self, JsonValue};
//!
//! let value = json::parse(r#"{"a":1,"b":[true,null]}"#).unwrap();
//! assert_eq!(value.get("a"), Some(&JsonValue::Number(1.0)));
//! ```

pub mod any;
pub mod boxed;
pub mod cursor;
pub mod error;
pub mod json;
pub mod literal;
pub mod map;
pub mod optional;
pub mod parser;
pub mod pattern;
pub mod repeat;
pub mod sequence;

pub use any::{Alternatives, Any, any};
pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::Cursor;
pub use error::{NO_PARSER_MATCHED, ParseError, ParseResult};
pub use literal::{Literal, literal};
pub use map::{Map, MapExt, map};
pub use optional::{Optional, optional};
pub use parser::Parser;
pub use pattern::{CharClass, Pattern, Quantifier, digits, numeric_literal, pattern, whitespace};
pub use repeat::{Repeat, repeat};
pub use sequence::{Sequence, Steps, sequence};
