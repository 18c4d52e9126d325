//! JSON grammar rules built from the combinators.
//!
//! Each rule is a plain function from a cursor to a result, which makes it a
//! parser in its own right. Rules refer to each other by name and are only
//! resolved when called, so `array` and `object` can contain `json_value`
//! while `json_value` contains them.
//!
//! The grammar is deliberately permissive in one place: inside arrays and
//! objects the comma after an element is optional, so `[1 2]` and `[1,2,]`
//! both parse. Whitespace is only accepted around an element, not on its
//! own, so `[ ]` and `{ }` are rejected while `[]` and `{}` parse.

use super::string::string_literal;
use super::value::JsonValue;
use crate::any::any;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::literal::literal;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::Parser;
use crate::pattern::whitespace;
use crate::repeat::repeat;
use crate::sequence::sequence;

pub use super::number::number;

/// A string literal as a JSON value
pub fn string(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    string_literal.map(JsonValue::String).parse(cursor)
}

/// `true` or `false`
pub fn boolean(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    any((literal("true"), literal("false")))
        .map(|keyword: &str| JsonValue::Bool(keyword == "true"))
        .parse(cursor)
}

/// `null`
pub fn null(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    literal("null").map(|_| JsonValue::Null).parse(cursor)
}

/// Any non-structured value: number, boolean, string or null
pub fn primitive(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    any((number, boolean, string, null)).parse(cursor)
}

/// `[` then any number of values, each optionally followed by a comma, then `]`
pub fn array(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    let member = sequence((
        whitespace(),
        any((object, array, primitive)),
        whitespace(),
        optional(literal(",")),
    ))
    .map(|(_, value, _, _)| value);

    sequence((literal("["), repeat(member), literal("]")))
        .map(|(_, values, _)| JsonValue::Array(values))
        .parse(cursor)
}

/// `"key": value` with whitespace allowed around the colon and an optional
/// trailing comma
fn key_value_pair(cursor: Cursor<'_>) -> ParseResult<'_, (String, JsonValue)> {
    sequence((
        whitespace(),
        string_literal,
        sequence((whitespace(), literal(":"), whitespace())),
        json_value,
        whitespace(),
        optional(literal(",")),
    ))
    .map(|(_, key, _, value, _, _)| (key, value))
    .parse(cursor)
}

/// `{` then any number of key/value pairs, then `}`
///
/// Pairs are collected in the order they appear. A repeated key keeps its
/// first position and takes the last value.
pub fn object(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    sequence((literal("{"), repeat(key_value_pair), literal("}")))
        .map(|(_, pairs, _)| JsonValue::Object(pairs.into_iter().collect()))
        .parse(cursor)
}

/// Entry point of the grammar: an object, an array or a primitive
pub fn json_value(cursor: Cursor<'_>) -> ParseResult<'_, JsonValue> {
    any((object, array, primitive)).parse(cursor)
}
