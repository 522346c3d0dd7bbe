//! # structgen
//!
//! Infer Go-style struct templates from arbitrary JSON documents.
//!
//! Given a parsed JSON document whose root is an object, the inferencer
//! synthesizes one named record declaration per object in the tree, and the
//! renderer prints them as `type X struct { ... }` blocks with `json` field
//! tags.
//!
//! ## Quick start
//!
//! ```rust
//! use structgen::render::render_registry;
//! use structgen::schema::StructInferrer;
//!
//! let value = serde_json::json!({"id": 1, "name": "widget"});
//! let registry = StructInferrer::new().infer(&value)?;
//! print!("{}", render_registry(&registry));
//! # Ok::<(), structgen::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! JSON text ──serde_json──▶ StructInferrer ──▶ Registry ──render──▶ stdout
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for structgen
pub mod error;

/// Struct template inference from JSON data
pub mod schema;

/// Rendering record declarations as text
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use render::{render_record, render_registry};
pub use schema::{infer_structs, CollisionPolicy, Registry, StructInferrer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
