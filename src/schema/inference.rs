//! Struct template inference from JSON values

use super::registry::{CollisionPolicy, Registry};
use super::types::{capitalize, Field, FieldType, Primitive, Record};
use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Struct inferrer with configuration options
#[derive(Debug, Clone)]
pub struct StructInferrer {
    /// Name given to the root record
    root_name: String,
    /// Duplicate record name handling
    collision: CollisionPolicy,
    /// Register `<Key>Item` records for object elements of arrays
    array_item_records: bool,
}

impl Default for StructInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl StructInferrer {
    /// Create a new inferrer with default settings
    pub fn new() -> Self {
        Self {
            root_name: "MyStruct".to_string(),
            collision: CollisionPolicy::default(),
            array_item_records: true,
        }
    }

    /// Set the name of the root record
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set the duplicate-name handling policy
    #[must_use]
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    /// Enable/disable `<Key>Item` records for object elements of arrays
    #[must_use]
    pub fn with_array_item_records(mut self, enabled: bool) -> Self {
        self.array_item_records = enabled;
        self
    }

    /// Infer record declarations for a JSON document.
    ///
    /// The root must be an object; every object found in the tree, at any
    /// depth, registers one record named after its capitalized key.
    pub fn infer(&self, value: &Value) -> Result<Registry> {
        let Value::Object(map) = value else {
            return Err(Error::non_object_root(json_kind(value)));
        };

        let mut registry = Registry::new();
        self.infer_object(&mut registry, &self.root_name, map)?;
        Ok(registry)
    }

    /// Register one record for `map`, recursing into nested objects
    fn infer_object(
        &self,
        registry: &mut Registry,
        name: &str,
        map: &Map<String, Value>,
    ) -> Result<()> {
        // Claim the slot up front so parents render before their children
        let slot = registry.claim(name, self.collision)?;
        let mut record = Record::new(name);

        for (key, value) in map {
            let field_name = capitalize(key)?;
            let field = match value {
                // Null carries no type information; default to string and
                // mark the field optional
                Value::Null => Field::optional(
                    field_name,
                    key,
                    FieldType::Primitive(Primitive::String),
                ),
                Value::Bool(_) => Field::new(field_name, key, FieldType::Primitive(Primitive::Bool)),
                Value::Number(n) => {
                    Field::new(field_name, key, FieldType::Primitive(infer_number(n)))
                }
                Value::String(_) => {
                    Field::new(field_name, key, FieldType::Primitive(Primitive::String))
                }
                Value::Array(items) => {
                    if self.array_item_records {
                        let item_name = format!("{field_name}Item");
                        for item in items {
                            if let Value::Object(m) = item {
                                self.infer_object(registry, &item_name, m)?;
                            }
                        }
                    }
                    Field::new(field_name, key, FieldType::Array)
                }
                Value::Object(m) => {
                    self.infer_object(registry, &field_name, m)?;
                    let ty = FieldType::Record(field_name.clone());
                    Field::new(field_name, key, ty)
                }
            };
            record.add_field(field);
        }

        tracing::debug!(name, fields = record.fields.len(), "inferred record");
        if let Some(slot) = slot {
            registry.commit(slot, record);
        }
        Ok(())
    }
}

/// Infer record declarations with default settings (convenience function)
pub fn infer_structs(value: &Value) -> Result<Registry> {
    StructInferrer::new().infer(value)
}

/// Integral numbers map to `int`, everything else to `float`.
///
/// A float with zero fractional part (e.g. `4.0`) counts as integral.
fn infer_number(n: &serde_json::Number) -> Primitive {
    if n.is_i64() || n.is_u64() {
        Primitive::Int
    } else if n.as_f64().is_some_and(|f| f == f.trunc()) {
        Primitive::Int
    } else {
        Primitive::Float
    }
}

/// Human-readable JSON value category for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
