use std::collections::HashSet;
use crate::{
    types::Declaration,
    error::SchemaError,
};

/// Returns `Ok(())` if verification passed, or `Err(SchemaError::DuplicateField)`
/// pointing at the second field that reuses a name.
pub fn verify_declaration(declaration: &Declaration) -> Result<(), SchemaError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for field in &declaration.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                declaration: declaration.name.clone(),
                field:       field.name.clone(),
                line:        field.line,
                column:      field.column,
            });
        }
    }

    Ok(())
}
