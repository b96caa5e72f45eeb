use serde::{Serialize, Serializer};
use std::fmt;

/// A JSON-Schema `type` keyword value.
///
/// The three DSL scalar aliases (`Integer`, `String`, `Boolean`) have their own
/// variants. Any other type name is carried through lower-cased in
/// [Custom](#variant.Custom), so `Foo` becomes `"foo"` in the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JsonType {
    Integer,
    String,
    Boolean,
    Array,
    Custom(String),
}

impl JsonType {
    /// Resolves a raw scalar type token from the DSL.
    ///
    /// Never returns [Array](#variant.Array); array-ness is a property of the
    /// field, not of the token.
    pub fn resolve(raw: &str) -> JsonType {
        let lowered = raw.trim().to_lowercase();
        match lowered.as_str() {
            "integer" => JsonType::Integer,
            "string"  => JsonType::String,
            "boolean" => JsonType::Boolean,
            _         => JsonType::Custom(lowered),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            JsonType::Integer      => "integer",
            JsonType::String       => "string",
            JsonType::Boolean      => "boolean",
            JsonType::Array        => "array",
            JsonType::Custom(name) => name,
        }
    }

    pub fn is_string(&self) -> bool {
        *self == JsonType::String
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JsonType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
