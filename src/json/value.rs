//! The JSON value type produced by the grammar.

use indexmap::IndexMap;
use std::fmt;

/// A parsed JSON value
///
/// Objects keep their keys in the order they were first encountered. When a
/// key appears more than once the last value wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(IndexMap<String, JsonValue>),
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key if this is an object
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonValue::Array(values)
    }
}

/// Writes a string literal that reads back under the grammar's escape rule,
/// where a backslash takes the next character verbatim
fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("\"")
}

/// Compact JSON text
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(b) => write!(f, "{}", b),
            // Non-finite numbers have no JSON spelling
            JsonValue::Number(n) if !n.is_finite() => f.write_str("null"),
            JsonValue::Number(n) => write!(f, "{}", n),
            JsonValue::String(s) => write_string(f, s),
            JsonValue::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            JsonValue::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_string(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(JsonValue::Null.is_null());
        assert_eq!(JsonValue::from(true).as_bool(), Some(true));
        assert_eq!(JsonValue::from(1.5).as_f64(), Some(1.5));
        assert_eq!(JsonValue::from("hi").as_str(), Some("hi"));
        assert_eq!(JsonValue::from(1.5).as_str(), None);
        assert!(JsonValue::from(vec![JsonValue::Null]).is_array());
    }

    #[test]
    fn test_get() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), JsonValue::from(1.0));
        let object = JsonValue::Object(map);

        assert_eq!(object.get("a"), Some(&JsonValue::Number(1.0)));
        assert_eq!(object.get("b"), None);
        assert_eq!(JsonValue::Null.get("a"), None);
    }

    #[test]
    fn test_display_compact() {
        let mut map = IndexMap::new();
        map.insert("b".to_string(), JsonValue::from(vec![true.into(), JsonValue::Null]));
        map.insert("a".to_string(), JsonValue::from(-1.5));
        let object = JsonValue::Object(map);

        assert_eq!(object.to_string(), r#"{"b":[true,null],"a":-1.5}"#);
    }

    #[test]
    fn test_display_escapes_quotes_and_backslashes() {
        let value = JsonValue::from(r#"say "hi" \o/"#);
        assert_eq!(value.to_string(), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn test_display_non_finite() {
        assert_eq!(JsonValue::from(f64::INFINITY).to_string(), "null");
    }
}
