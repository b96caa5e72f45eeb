use shapegen_schema::{CanonicalSchema, JsonType, Property};
use crate::{error::SchemaError, traits::Emitter, utils::chained_bounds};

/// Emits a Joi `Joi.object` builder chain.
///
/// Joi keys are optional by default, so required fields get `.required()`
/// and optional ones are left unmarked.
pub struct JoiEmitter;

impl Emitter for JoiEmitter {
    fn name(&self) -> &'static str {
        "joi"
    }

    fn emit(&self, schema: &CanonicalSchema) -> Result<String, SchemaError> {
        Ok(compile_schema_to_joi(schema))
    }
}

fn builder(type_: &JsonType) -> String {
    match type_ {
        JsonType::String       => "Joi.string()".to_string(),
        JsonType::Integer      => "Joi.number().integer()".to_string(),
        JsonType::Boolean      => "Joi.boolean()".to_string(),
        JsonType::Array        => "Joi.array()".to_string(),
        JsonType::Custom(name) => format!("Joi.{}()", name),
    }
}

fn property_expression(key: &str, property: &Property, schema: &CanonicalSchema) -> String {
    let mut expr = builder(&property.type_);
    if let Some(items) = &property.items {
        expr.push_str(&format!(".items({})", builder(&items.type_)));
    }

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
    if schema.is_required(key) {
        expr.push_str(".required()");
    }
    expr
}

pub fn compile_schema_to_joi(schema: &CanonicalSchema) -> String {
    let mut code: Vec<String> = Vec::new();

    code.push("const Joi = require('joi');".to_string());
    code.push("const schema = Joi.object({".to_string());

    for (key, property) in &schema.properties {
        code.push(format!("  {}: {},", key, property_expression(key, property, schema)));
    }

    code.push("});".to_string());
    code.push("module.exports = schema;".to_string());
    code.push("".to_string());

    code.join("\n")
}
