#![deny(missing_docs)]

//! # Operation Registry
//!
//! Stores externally supplied operations for identifier-based lookup and
//! batch resolution. No I/O is performed; the registry is the reference
//! implementation of the host-side accessor that maps an abstract operation
//! identifier to its resolved responses.

use crate::diag::DiagnosticSink;
use crate::error::{AppError, AppResult};
use crate::graph::models::{ObjectType, Operation};
use crate::resolve::success::require_success_model;
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry mapping operation identifiers to their `Operation` values.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    ops: IndexMap<String, Operation>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operation under its name.
    pub fn register(&mut self, op: Operation) -> AppResult<()> {
        if self.ops.contains_key(&op.name) {
            return Err(AppError::DuplicateOperation(op.name));
        }
        self.ops.insert(op.name.clone(), op);
        Ok(())
    }

    /// Looks up an operation by identifier.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.ops.get(name)
    }

    /// Iterates operations in registration order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.ops.values()
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Resolves the success body of every operation, in registration order.
    ///
    /// Operations without a qualifying success body contribute the shared
    /// placeholder and one diagnostic each; the batch never aborts on them.
    /// Only graph contract violations (cyclic inheritance) abort.
    pub fn resolve_success_bodies(
        &self,
        sink: &dyn DiagnosticSink,
    ) -> AppResult<Vec<(String, Arc<ObjectType>)>> {
        let mut resolved = Vec::with_capacity(self.ops.len());
        for op in self.ops.values() {
            let model = require_success_model(op, sink)?;
            resolved.push((op.name.clone(), model));
        }
        Ok(resolved)
    }
}
