#![deny(missing_docs)]

//! # Type Graph Module
//!
//! - **models**: read-only type graph definitions.
//! - **flatten**: inheritance-aware field flattening.

pub mod flatten;
pub mod models;

// Re-export public API to keep caller paths flat
pub use flatten::{flatten_fields, flatten_fields_into};
pub use models::{
    Field, ObjectType, Operation, Response, ScalarKind, ScalarType, TupleType, TypeNode,
    UnionType, UnionVariant,
};
