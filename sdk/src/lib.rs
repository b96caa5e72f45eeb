//! shapegen
//!
//! One-call entry points for turning a shape declaration into a JSON Schema
//! or validator source.
//!
//! - `translate` (declaration text + `Target` → validator module source)
//! - `translate_to_json_schema` (declaration text → canonical JSON Schema)
//! - Re-exports of the compiler, schema model and `SchemaError`.

pub use shapegen_compiler::error::SchemaError;
pub use shapegen_compiler::traits::Emitter;
pub use shapegen_compiler::{compile_declaration, compile_schema, parse_field, parse_schema_text, Target};
pub use shapegen_schema::{CanonicalSchema, JsonType, Property};

/// Compile declaration text and render it for `target`.
pub fn translate(text: &str, target: Target) -> Result<String, SchemaError> {
    let schema = compile_schema(text)?;
    target.emit(&schema)
}

/// Compile declaration text into pretty-printed canonical JSON Schema.
pub fn translate_to_json_schema(text: &str) -> Result<String, SchemaError> {
    let schema = compile_schema(text)?;
    schema
        .to_json_pretty()
        .map_err(|e| SchemaError::EncodeError(e.to_string()))
}

pub mod error {
    pub use shapegen_compiler::error::SchemaError;
}

pub mod schema {
    pub use shapegen_schema::*;
}

pub mod types {
    pub use shapegen_compiler::types::*;
}
