//! Declaration registry
//!
//! Collects the records discovered during one inference pass. Backed by a
//! `Vec` so records keep first-registered order; one run produces one
//! registry and nothing persists across runs.

use super::types::Record;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How to handle two records that would share the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The latest definition wins; the collision is logged at WARN
    #[default]
    Overwrite,
    /// The first definition wins; later ones are dropped with a WARN
    KeepFirst,
    /// A duplicate name fails inference
    Reject,
}

/// Insertion-ordered collection of record declarations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    records: Vec<Record>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `name`, applying the collision policy.
    ///
    /// Claiming before the record's fields are populated keeps parents
    /// ahead of their children in render order. Returns `None` when an
    /// existing definition is kept.
    pub(crate) fn claim(&mut self, name: &str, policy: CollisionPolicy) -> Result<Option<usize>> {
        if let Some(pos) = self.records.iter().position(|r| r.name == name) {
            match policy {
                CollisionPolicy::Overwrite => {
                    tracing::warn!(name, "duplicate record name, keeping latest definition");
                    Ok(Some(pos))
                }
                CollisionPolicy::KeepFirst => {
                    tracing::warn!(name, "duplicate record name, keeping first definition");
                    Ok(None)
                }
                CollisionPolicy::Reject => Err(Error::collision(name)),
            }
        } else {
            self.records.push(Record::new(name));
            Ok(Some(self.records.len() - 1))
        }
    }

    /// Store the finished record in a previously claimed slot
    pub(crate) fn commit(&mut self, slot: usize, record: Record) {
        self.records[slot] = record;
    }

    /// Look up a record by name
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Check whether a record with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-registered order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records in first-registered order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
