#![deny(missing_docs)]

//! # Success Classification
//!
//! Applies the error-marking and status-code-range heuristic to pick the
//! response body representing an operation's success outcome, and hosts the
//! reporting boundary that turns "no success body" into a diagnostic instead
//! of a hard failure.

use crate::diag::{codes, DiagnosticSink};
use crate::error::AppResult;
use crate::graph::flatten::flatten_fields;
use crate::graph::models::{Field, ObjectType, Operation, TypeNode};
use crate::resolve::normalize::collect_response_models;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;

static PLACEHOLDER: Lazy<Arc<ObjectType>> = Lazy::new(|| Arc::new(ObjectType::new("")));

/// Returns the shared placeholder model handed out when an operation lacks a
/// qualifying success response.
///
/// Hosts that need to recognize the sentinel can compare with
/// `Arc::ptr_eq`.
pub fn placeholder_model() -> Arc<ObjectType> {
    Arc::clone(&PLACEHOLDER)
}

/// Decides whether a status-code field denotes a 2xx-class outcome.
///
/// Recognized literal shapes: a string starting with `"2"` (covers `"200"`
/// as well as range forms like `"2XX"`), or a number in `[200, 300)`. A
/// status-code field of any other shape never qualifies.
pub fn is_success_status(field: &Field) -> bool {
    let TypeNode::Scalar(scalar) = &field.ty else {
        return false;
    };
    match &scalar.literal {
        Some(Value::String(text)) => text.starts_with('2'),
        Some(Value::Number(code)) => code
            .as_f64()
            .map_or(false, |code| (200.0..300.0).contains(&code)),
        _ => false,
    }
}

/// Selects the first response body that classifies as a success outcome.
///
/// Candidates are the non-error object types reachable from the responses,
/// in declaration order. A candidate survives when its flattened field set
/// declares no status-code field at all (an omitted code is an implicit
/// default success) or when the status-code field carries a recognized 2xx
/// literal.
pub fn select_success_model(op: &Operation) -> AppResult<Option<Arc<ObjectType>>> {
    let Some(candidates) = collect_response_models(op, |model| Ok(!model.is_error))? else {
        return Ok(None);
    };

    for model in candidates {
        let fields = flatten_fields(&model)?;
        match fields.values().find(|field| field.is_status_code) {
            None => return Ok(Some(model)),
            Some(status) if is_success_status(status) => return Ok(Some(model)),
            Some(_) => {}
        }
    }
    Ok(None)
}

/// Selects the first response body marked as an error shape.
///
/// The dual of [`select_success_model`]: the error marking alone qualifies a
/// candidate, no status-code filtering is applied.
pub fn select_error_model(op: &Operation) -> AppResult<Option<Arc<ObjectType>>> {
    let candidates = collect_response_models(op, |model| Ok(model.is_error))?;
    Ok(candidates.and_then(|models| models.into_iter().next()))
}

/// Resolves the success body of `op`, reporting through `sink` when absent.
///
/// Emits one `expected-success-response` diagnostic targeted at the
/// operation and returns the shared placeholder so a batch pipeline keeps
/// going; the host decides later whether accumulated diagnostics are fatal.
/// Contract violations in the graph itself (cyclic inheritance) still
/// propagate as hard errors.
pub fn require_success_model(
    op: &Operation,
    sink: &dyn DiagnosticSink,
) -> AppResult<Arc<ObjectType>> {
    match select_success_model(op)? {
        Some(model) => Ok(model),
        None => {
            sink.report(codes::EXPECTED_SUCCESS_RESPONSE, &op.name);
            Ok(placeholder_model())
        }
    }
}
