//! Canonical schema model for shapegen.
//!
//! A [CanonicalSchema](struct.CanonicalSchema.html) is the JSON-Schema shaped
//! intermediate form every emitter reads from. It is independent of any target
//! validation library and serializes as a draft-07 object.
//!
//! ```
//! use shapegen_schema::*;
//!
//! let mut schema = CanonicalSchema::new("Point");
//! schema.properties.insert("x".to_owned(), Property::new(JsonType::Integer));
//! schema.required = Some(vec!["x".to_owned()]);
//!
//! let json = schema.to_json_pretty().unwrap();
//! assert!(json.starts_with("{\n  \"$schema\": \"http://json-schema.org/draft-07/schema#\""));
//! ```

pub mod json_type;
pub mod schema;

pub use json_type::*;
pub use schema::*;
