#![deny(missing_docs)]

//! # Resolution Module
//!
//! Read-only semantic queries over an operation's declared responses.
//!
//! - **normalize**: enumerates candidate object types per response body.
//! - **success**: classifies candidates into success / error outcomes.
//! - **search**: locates fields across response bodies by predicate.

pub mod normalize;
pub mod search;
pub mod success;

// Re-export public API to keep caller paths flat
pub use normalize::collect_response_models;
pub use search::{find_field_in_responses, find_model_field};
pub use success::{
    is_success_status, placeholder_model, require_success_model, select_error_model,
    select_success_model,
};
