use shapegen_schema::JsonType;

/// One parsed `Name { ... }` declaration. Field order is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name:   String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name:        String,
    pub line:        usize,
    pub column:      usize,
    pub optional:    bool,
    pub type_:       FieldType,
    pub constraints: Vec<Constraint>,
}

/// Resolved field type. The inner `JsonType` is never `JsonType::Array`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Scalar(JsonType),
    Array(JsonType),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Min(i64),
    Max(i64),
    Email,
    Unrecognized {
        name:  String,
        value: ConstraintValue,
    },
}

/// Argument of a constraint: `name` alone is a flag, `name(N)` carries a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintValue {
    Flag,
    Number(i64),
}
