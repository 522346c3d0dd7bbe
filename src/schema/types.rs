//! Record declaration types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Primitive field types recognized by the inferencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Int,
    Float,
    Bool,
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::String => write!(f, "string"),
            Primitive::Int => write!(f, "int"),
            // `float` is the template spelling, not a compilable Go type
            Primitive::Float => write!(f, "float"),
            Primitive::Bool => write!(f, "bool"),
        }
    }
}

/// Inferred type of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A scalar value
    Primitive(Primitive),
    /// Reference to another registered record, by name
    Record(String),
    /// Arrays always render as `[]string` regardless of element type
    Array,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Primitive(p) => write!(f, "{p}"),
            FieldType::Record(name) => write!(f, "{name}"),
            FieldType::Array => write!(f, "[]string"),
        }
    }
}

/// One declared field within a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Capitalized, public-style field name
    pub name: String,

    /// Original JSON key, used in the rendered field tag
    pub key: String,

    /// Inferred type
    #[serde(rename = "type")]
    pub ty: FieldType,

    /// True when the source value was null
    #[serde(default)]
    pub optional: bool,
}

impl Field {
    /// Create a required field
    pub fn new(name: impl Into<String>, key: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            ty,
            optional: false,
        }
    }

    /// Create an optional field (source value was null)
    pub fn optional(name: impl Into<String>, key: impl Into<String>, ty: FieldType) -> Self {
        Self {
            optional: true,
            ..Self::new(name, key, ty)
        }
    }
}

/// A named record declaration with ordered fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record name, derived from the capitalized JSON key
    pub name: String,

    /// Fields in the order they were visited during inference
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Record {
    /// Create an empty record
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving visit order
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Look up a field by its capitalized name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Uppercase the first character of an identifier (Unicode-aware)
pub fn capitalize(s: &str) -> Result<String> {
    let mut chars = s.chars();
    let first = chars.next().ok_or(Error::EmptyKey)?;
    Ok(first.to_uppercase().chain(chars).collect())
}
