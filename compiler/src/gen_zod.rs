use shapegen_schema::{CanonicalSchema, JsonType, Property};
use crate::{error::SchemaError, traits::Emitter, utils::chained_bounds};

/// Emits a Zod `z.object` builder chain.
///
/// Zod treats every key as required, so only fields missing from `required`
/// get `.optional()`. A schema without a `required` key marks every field.
pub struct ZodEmitter;

impl Emitter for ZodEmitter {
    fn name(&self) -> &'static str {
        "zod"
    }

    fn emit(&self, schema: &CanonicalSchema) -> Result<String, SchemaError> {
        Ok(compile_schema_to_zod(schema))
    }
}

fn builder(type_: &JsonType) -> String {
    match type_ {
        JsonType::String       => "z.string()".to_string(),
        JsonType::Integer      => "z.number().int()".to_string(),
        JsonType::Boolean      => "z.boolean()".to_string(),
        JsonType::Array        => "z.array(z.unknown())".to_string(),
        JsonType::Custom(name) => format!("z.{}()", name),
    }
}

fn property_expression(key: &str, property: &Property, schema: &CanonicalSchema) -> String {
    let mut expr = match (&property.type_, &property.items) {
        (JsonType::Array, Some(items)) => format!("z.array({})", builder(&items.type_)),
        (type_, _) => builder(type_),
    };

    let (lower, upper) = chained_bounds(property);
    if let Some(n) = lower {
        expr.push_str(&format!(".min({})", n));
    }
    if let Some(n) = upper {
        expr.push_str(&format!(".max({})", n));
    }
    if property.type_.is_string() && property.format.as_deref() == Some("email") {
        expr.push_str(".email()");
    }
    if !schema.is_required(key) {
        expr.push_str(".optional()");
    }
    expr
}

pub fn compile_schema_to_zod(schema: &CanonicalSchema) -> String {
    let mut code: Vec<String> = Vec::new();

    code.push("const { z } = require('zod');".to_string());
    code.push("const schema = z.object({".to_string());

    for (key, property) in &schema.properties {
        code.push(format!("  {}: {},", key, property_expression(key, property, schema)));
    }

    code.push("});".to_string());
    code.push("module.exports = schema;".to_string());
    code.push("".to_string());

    code.join("\n")
}
