use shapegen_schema::CanonicalSchema;
use crate::{error::SchemaError, traits::Emitter};

/// Emits an Ajv module with the canonical schema embedded as a JSON literal.
pub struct AjvEmitter;

impl Emitter for AjvEmitter {
    fn name(&self) -> &'static str {
        "ajv"
    }

    fn emit(&self, schema: &CanonicalSchema) -> Result<String, SchemaError> {
        compile_schema_to_ajv(schema)
    }
}

pub fn compile_schema_to_ajv(schema: &CanonicalSchema) -> Result<String, SchemaError> {
    let json = schema
        .to_json_pretty()
        .map_err(|e| SchemaError::EncodeError(e.to_string()))?;

    let code = vec![
        "const Ajv = require('ajv');".to_string(),
        "const ajv = new Ajv();".to_string(),
        format!("const schema = {};", json),
        "const validate = ajv.compile(schema);".to_string(),
        "module.exports = validate;".to_string(),
        "".to_string(),
    ];

    Ok(code.join("\n"))
}
