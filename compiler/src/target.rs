use std::fmt;
use std::str::FromStr;
use shapegen_schema::CanonicalSchema;
use crate::{
    error::SchemaError,
    traits::Emitter,
    gen_ajv::AjvEmitter,
    gen_joi::JoiEmitter,
    gen_zod::ZodEmitter,
};

/// The validation library an artifact is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Ajv,
    Zod,
    Joi,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Ajv, Target::Zod, Target::Joi];

    pub fn emitter(&self) -> &'static dyn Emitter {
        match self {
            Target::Ajv => &AjvEmitter,
            Target::Zod => &ZodEmitter,
            Target::Joi => &JoiEmitter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.emitter().name()
    }

    pub fn emit(&self, schema: &CanonicalSchema) -> Result<String, SchemaError> {
        self.emitter().emit(schema)
    }
}

impl FromStr for Target {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownTarget(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
