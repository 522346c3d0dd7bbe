//! Struct template inference
//!
//! Walks a parsed JSON document and synthesizes one named record
//! declaration per object encountered, at any depth.
//!
//! # Features
//!
//! - **Type inference**: scalar values map to `string`/`int`/`float`/`bool`
//! - **Nested objects**: every object registers its own record, named after its key
//! - **Array element records**: object elements of arrays register `<Key>Item` records
//! - **Collision policies**: duplicate record names can overwrite, keep-first, or fail

mod inference;
mod registry;
mod types;

pub use inference::{infer_structs, StructInferrer};
pub use registry::{CollisionPolicy, Registry};
pub use types::{capitalize, Field, FieldType, Primitive, Record};
