#![deny(missing_docs)]

//! # Field Search
//!
//! Composes normalization, flattening and predicate matching to locate a
//! field across an operation's declared response bodies.

use crate::error::AppResult;
use crate::graph::flatten::flatten_fields;
use crate::graph::models::{Field, ObjectType, Operation};
use crate::resolve::normalize::collect_response_models;
use std::sync::Arc;

/// Finds the first response body containing a field matching `predicate`,
/// and the first matching field within it.
///
/// Candidate bodies are tested against their flattened field set, so
/// inherited fields count. Within the chosen body the match follows the
/// flattened insertion order: most-derived declarations first.
pub fn find_field_in_responses<P>(
    op: &Operation,
    mut predicate: P,
) -> AppResult<Option<(Arc<ObjectType>, Field)>>
where
    P: FnMut(&Field) -> bool,
{
    let candidates = collect_response_models(op, |model| {
        let fields = flatten_fields(model)?;
        Ok(fields.values().any(&mut predicate))
    })?;
    let Some(owner) = candidates.and_then(|models| models.into_iter().next()) else {
        return Ok(None);
    };

    // The selecting predicate guaranteed a match; re-resolve it rather than
    // assume, falling back to "absent" if it is somehow gone.
    let fields = flatten_fields(&owner)?;
    let found = fields.values().find(|field| predicate(field)).cloned();
    Ok(found.map(|field| (owner, field)))
}

/// Finds the first field of one model's flattened field set matching
/// `predicate`.
pub fn find_model_field<P>(model: &ObjectType, mut predicate: P) -> AppResult<Option<Field>>
where
    P: FnMut(&Field) -> bool,
{
    let fields = flatten_fields(model)?;
    Ok(fields.values().find(|field| predicate(field)).cloned())
}
