use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid declaration format")]
    InvalidDeclaration,

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("Malformed constraint {constraint} at line {line}, column {column}: {reason}")]
    MalformedConstraint {
        constraint: String,
        reason:     String,
        line:       usize,
        column:     usize,
    },

    #[error("The field \"{field}\" is declared twice in \"{declaration}\" (line {line}, column {column})")]
    DuplicateField {
        declaration: String,
        field:       String,
        line:        usize,
        column:      usize,
    },

    #[error("Unknown target \"{0}\" (expected one of: ajv, zod, joi)")]
    UnknownTarget(String),

    #[error("Schema encode error: {0}")]
    EncodeError(String),
}
