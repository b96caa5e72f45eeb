use crate::error::SchemaError;
use shapegen_schema::CanonicalSchema;

/// Renders a canonical schema as source code for one validation library.
/// Implementations must be deterministic: equal schemas give byte-identical output.
pub trait Emitter {
    fn name(&self) -> &'static str;
    fn emit(&self, schema: &CanonicalSchema) -> Result<String, SchemaError>;
}
