use crate::error::SchemaError;
use shapegen_schema::{JsonType, Property};

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

pub fn error(msg: &str, line: usize, column: usize) -> SchemaError {
    SchemaError::ParseError {
        msg: msg.to_string(),
        line,
        column,
    }
}

/// Bounds a builder chain can carry as `.min()`/`.max()`: lengths on strings,
/// values on integers, item counts on arrays. Other types have no such calls.
pub fn chained_bounds(property: &Property) -> (Option<i64>, Option<i64>) {
    match property.type_ {
        JsonType::String                    => (property.min_length, property.max_length),
        JsonType::Integer | JsonType::Array => (property.minimum, property.maximum),
        _                                   => (None, None),
    }
}
