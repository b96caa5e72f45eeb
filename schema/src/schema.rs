use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::JsonType;

pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// The library-agnostic JSON-Schema object produced from one declaration.
///
/// Serializes as a draft-07 object. Keys come out in declaration order:
/// `$schema`, `title`, `type`, `properties`, then `required` when present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalSchema {
    #[serde(rename = "$schema")]
    pub schema:     &'static str,
    pub title:      String,
    #[serde(rename = "type")]
    pub type_:      &'static str,
    pub properties: IndexMap<String, Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required:   Option<Vec<String>>,

    /// Constraints the compiler did not understand, kept for diagnostics.
    #[serde(skip)]
    pub ignored:    Vec<IgnoredConstraint>,
}

/// One entry of `properties`.
///
/// Constraint keys serialize in the order they were first set, like keys
/// added to a JSON object. Overwriting a key keeps its original position.
/// `type` and `items` always come first.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub type_:      JsonType,
    pub items:      Option<Items>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub minimum:    Option<i64>,
    pub maximum:    Option<i64>,
    pub format:     Option<String>,
    order:          Vec<&'static str>,
}

static CONSTRAINT_KEYS: [&str; 5] = ["minLength", "maxLength", "minimum", "maximum", "format"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Items {
    #[serde(rename = "type")]
    pub type_: JsonType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IgnoredConstraint {
    pub field: String,
    pub name:  String,
}

impl CanonicalSchema {
    pub fn new(title: impl Into<String>) -> Self {
        CanonicalSchema {
            schema:     DRAFT_07,
            title:      title.into(),
            type_:      "object",
            properties: IndexMap::new(),
            required:   None,
            ignored:    Vec::new(),
        }
    }

    /// Whether `name` appears in the `required` list.
    ///
    /// With no `required` key at all, nothing is required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .map_or(false, |required| required.iter().any(|r| r == name))
    }

    /// Stable pretty JSON: insertion-ordered keys, 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Property {
    pub fn new(type_: JsonType) -> Self {
        Property {
            type_,
            items:      None,
            min_length: None,
            max_length: None,
            minimum:    None,
            maximum:    None,
            format:     None,
            order:      Vec::new(),
        }
    }

    pub fn array_of(item: JsonType) -> Self {
        Property {
            items: Some(Items { type_: item }),
            ..Property::new(JsonType::Array)
        }
    }

    pub fn set_min_length(&mut self, n: i64) {
        self.touch("minLength");
        self.min_length = Some(n);
    }

    pub fn set_max_length(&mut self, n: i64) {
        self.touch("maxLength");
        self.max_length = Some(n);
    }

    pub fn set_minimum(&mut self, n: i64) {
        self.touch("minimum");
        self.minimum = Some(n);
    }

    pub fn set_maximum(&mut self, n: i64) {
        self.touch("maximum");
        self.maximum = Some(n);
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        self.touch("format");
        self.format = Some(format.into());
    }

    fn touch(&mut self, key: &'static str) {
        if !self.order.contains(&key) {
            self.order.push(key);
        }
    }

    /// Keys in first-set order, then any assigned directly through the
    /// public fields in their fixed order.
    fn constraint_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied().chain(
            CONSTRAINT_KEYS
                .iter()
                .copied()
                .filter(move |key| !self.order.contains(key)),
        )
    }

    fn bound(&self, key: &str) -> Option<i64> {
        match key {
            "minLength" => self.min_length,
            "maxLength" => self.max_length,
            "minimum"   => self.minimum,
            "maximum"   => self.maximum,
            _           => None,
        }
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.type_)?;
        if let Some(items) = &self.items {
            map.serialize_entry("items", items)?;
        }
        for key in self.constraint_keys() {
            if key == "format" {
                if let Some(format) = &self.format {
                    map.serialize_entry(key, format)?;
                }
            } else if let Some(n) = self.bound(key) {
                map.serialize_entry(key, &n)?;
            }
        }
        map.end()
    }
}
