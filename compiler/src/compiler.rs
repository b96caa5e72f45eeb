use shapegen_schema::{CanonicalSchema, IgnoredConstraint, Property};
use tracing::{debug, warn};
use crate::{
    types::{Constraint, Declaration, Field, FieldType},
    verifier::verify_declaration,
    tokenizer::tokenize_declaration,
    parser::{check_envelope, parse_declaration},
    error::SchemaError,
};

/// Compile declaration text into its `CanonicalSchema`.
/// Returns `Err(SchemaError)` if tokenization/parsing/verification fails.
pub fn compile_schema(text: &str) -> Result<CanonicalSchema, SchemaError> {
    check_envelope(text)?;
    let tokens = tokenize_declaration(text)?;
    let declaration = parse_declaration(&tokens)?;
    verify_declaration(&declaration)?;
    Ok(compile_declaration(&declaration))
}

/// Maps a parsed declaration onto the canonical schema.
///
/// Properties keep field order. Constraints apply in order, so a later `min`
/// or `max` overwrites an earlier one. `required` lists the non-optional
/// fields and is left out entirely when every field is optional.
pub fn compile_declaration(declaration: &Declaration) -> CanonicalSchema {
    let mut schema   = CanonicalSchema::new(declaration.name.as_str());
    let mut required = Vec::new();

    for field in &declaration.fields {
        let mut property = match &field.type_ {
            FieldType::Scalar(type_) => Property::new(type_.clone()),
            FieldType::Array(item)   => Property::array_of(item.clone()),
        };

        for constraint in &field.constraints {
            apply_constraint(&mut property, constraint, field, &mut schema.ignored);
        }

        if !field.optional {
            required.push(field.name.clone());
        }
        schema.properties.insert(field.name.clone(), property);
    }

    if !required.is_empty() {
        schema.required = Some(required);
    }

    debug!(
        title      = %schema.title,
        properties = schema.properties.len(),
        ignored    = schema.ignored.len(),
        "compiled canonical schema"
    );
    schema
}

fn apply_constraint(
    property:   &mut Property,
    constraint: &Constraint,
    field:      &Field,
    ignored:    &mut Vec<IgnoredConstraint>,
) {
    let is_string = property.type_.is_string();

    match constraint {
        Constraint::Min(n) if is_string => property.set_min_length(*n),
        Constraint::Min(n)              => property.set_minimum(*n),
        Constraint::Max(n) if is_string => property.set_max_length(*n),
        Constraint::Max(n)              => property.set_maximum(*n),
        Constraint::Email => {
            if !is_string {
                warn!(field = %field.name, type_ = %property.type_, "email format on a non-string property");
            }
            property.set_format("email");
        }
        Constraint::Unrecognized { name, .. } => {
            warn!(field = %field.name, constraint = %name, "ignoring unrecognized constraint");
            ignored.push(IgnoredConstraint {
                field: field.name.clone(),
                name:  name.clone(),
            });
        }
    }
}
