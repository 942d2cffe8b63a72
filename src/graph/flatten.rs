#![deny(missing_docs)]

//! # Field Flattening
//!
//! Walks an object type's inheritance chain and produces the merged,
//! override-aware field set.

use crate::error::{AppError, AppResult};
use crate::graph::models::{Field, ObjectType};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Flattens the full field set of `model` across its inheritance chain.
///
/// The result contains every field name reachable from `model`, each mapped
/// to the declaration from the most-derived type that declares it. A type
/// with no fields and no supertype yields an empty map.
pub fn flatten_fields(model: &ObjectType) -> AppResult<IndexMap<String, Field>> {
    let mut acc = IndexMap::new();
    flatten_fields_into(model, &mut acc)?;
    Ok(acc)
}

/// Flattens `model` into a pre-seeded accumulator.
///
/// Entries already present in `acc` are never overwritten; combined with the
/// leaf-to-base walk this makes the most-derived declaration win.
///
/// The walk is iterative, so arbitrarily deep chains cannot exhaust the
/// stack. Type names are unique within a well-formed graph, so revisiting a
/// name along one chain means the upstream acyclicity contract was violated;
/// flattening refuses to continue rather than loop.
pub fn flatten_fields_into(model: &ObjectType, acc: &mut IndexMap<String, Field>) -> AppResult<()> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = model;
    loop {
        if !visited.insert(current.name.as_str()) {
            return Err(AppError::CyclicInheritance(current.name.clone()));
        }
        for (name, field) in &current.fields {
            if !acc.contains_key(name) {
                acc.insert(name.clone(), field.clone());
            }
        }
        match &current.base {
            Some(base) => current = base,
            None => return Ok(()),
        }
    }
}
