//! Rendering record declarations as struct template text
//!
//! Produces one `type <Name> struct { ... }` block per record. Every field
//! carries a well-formed `` `json:"<key>,omitempty"` `` tag.

use crate::schema::{Record, Registry};

/// Render a single record as a struct declaration block.
///
/// Fields appear in the order they were visited during inference; an empty
/// record renders an empty-body declaration.
pub fn render_record(record: &Record) -> String {
    let mut out = format!("type {} struct {{\n", record.name);
    for field in &record.fields {
        out.push_str(&format!(
            "  {} {} `json:\"{},omitempty\"`\n",
            field.name, field.ty, field.key
        ));
    }
    out.push_str("}\n");
    out
}

/// Render every registered record, one block per record in
/// first-registered order, separated by blank lines.
pub fn render_registry(registry: &Registry) -> String {
    registry
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}
