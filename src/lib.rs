#![deny(missing_docs)]

//! # apigraph
//!
//! Resolution engine between a declarative API-description type graph and a
//! schema emitter.
//!
//! Given an operation with zero or more declared responses, the engine
//! answers read-only semantic queries over the (already validated) type
//! graph: which responses classify as success outcomes, what the full
//! inheritance-flattened field set of a body type is, and which response
//! carries a field matching an arbitrary predicate. Classification failures
//! are surfaced through a diagnostic sink instead of aborting the caller's
//! pipeline.

/// Shared error types.
pub mod error;

/// Read-only type graph model and field flattening.
pub mod graph;

/// Response shape normalization, success classification and field search.
pub mod resolve;

/// Diagnostic reporting boundary.
pub mod diag;

/// Operation storage keyed by identifier.
pub mod registry;

pub use diag::{codes, CollectingSink, Diagnostic, DiagnosticSink};
pub use error::{AppError, AppResult};
pub use graph::{
    flatten_fields, flatten_fields_into, Field, ObjectType, Operation, Response, ScalarKind,
    ScalarType, TupleType, TypeNode, UnionType, UnionVariant,
};
pub use registry::OperationRegistry;
pub use resolve::{
    collect_response_models, find_field_in_responses, find_model_field, is_success_status,
    placeholder_model, require_success_model, select_error_model, select_success_model,
};
