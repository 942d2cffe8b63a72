//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A base-type walk revisited a type name: the upstream guarantee of an
    /// acyclic inheritance graph was violated.
    #[from(ignore)]
    #[display("Cyclic inheritance detected at type '{_0}'")]
    CyclicInheritance(String),

    /// An operation identifier was registered twice.
    #[from(ignore)]
    #[display("Operation '{_0}' is already registered")]
    DuplicateOperation(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        // Test that String defaults to General, not one of the named variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_cycle_display() {
        let app_err = AppError::CyclicInheritance("Widget".into());
        assert_eq!(
            format!("{}", app_err),
            "Cyclic inheritance detected at type 'Widget'"
        );
    }

    #[test]
    fn test_duplicate_manual_creation() {
        // Duplicate errors must be created explicitly
        let app_err = AppError::DuplicateOperation("listWidgets".into());
        assert_eq!(
            format!("{}", app_err),
            "Operation 'listWidgets' is already registered"
        );
    }
}
