//! shapegen-compiler
//!
//! This crate implements:
//!  1) A tokenizer + parser for `Name { field: Type & constraint }` declarations,
//!  2) A verifier (duplicate field names),
//!  3) `compile_schema` / `compile_declaration` producing a `CanonicalSchema`,
//!  4) Emitters for Ajv, Zod and Joi behind the `Emitter` trait and `Target`,
//!  5) The error type (`SchemaError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod tokenizer;
pub mod parser;
pub mod verifier;
pub mod compiler;
pub mod traits;
pub mod gen_ajv;
pub mod gen_zod;
pub mod gen_joi;
pub mod target;

pub use compiler::compile_schema;
pub use compiler::compile_declaration;
pub use parser::{parse_field, parse_schema_text};
pub use gen_ajv::compile_schema_to_ajv;
pub use gen_zod::compile_schema_to_zod;
pub use gen_joi::compile_schema_to_joi;
pub use target::Target;
