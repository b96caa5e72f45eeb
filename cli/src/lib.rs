//! Command handlers for the `shapegen` binary.
//!
//! Every handler reads the whole input, translates it, and only then touches
//! the output path, so a failed translation never leaves a partial file.

use std::fs;
use std::path::{Path, PathBuf};

use shapegen::{compile_schema, SchemaError, Target};
use tracing::debug;

/// `clap` value parser for `--target`; anything outside ajv|zod|joi is a usage error.
pub fn parse_target(s: &str) -> Result<Target, String> {
    s.parse::<Target>().map_err(|e| e.to_string())
}

/// Translate `input` to the canonical JSON Schema.
pub fn run_compile(input: &Path, output: Option<&Path>) -> Result<(), SchemaError> {
    let text   = fs::read_to_string(input)?;
    let schema = compile_schema(&text)?;
    let json   = schema
        .to_json_pretty()
        .map_err(|e| SchemaError::EncodeError(e.to_string()))?;
    write_output(output, &format!("{}\n", json))
}

/// Translate `input` into validator source for `target`.
pub fn run_gen(input: &Path, output: Option<&Path>, target: Target) -> Result<(), SchemaError> {
    let text   = fs::read_to_string(input)?;
    let schema = compile_schema(&text)?;
    debug!(%target, title = %schema.title, "emitting validator");
    let code   = target.emit(&schema)?;
    write_output(output, &code)
}

/// Default output path: the input with its extension replaced by `extension`.
pub fn default_output(input: &Path, extension: &str) -> PathBuf {
    let mut path = input.to_path_buf();
    path.set_extension(extension);
    path
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<(), SchemaError> {
    match output {
        Some(path) => {
            fs::write(path, contents)?;
            debug!(path = %path.display(), bytes = contents.len(), "wrote output");
        }
        None => print!("{}", contents),
    }
    Ok(())
}
