//! Request validation utilities for consistent validation across handlers
//!
//! This module provides a `RequestValidation` trait and helper macros to
//! centralize validation logic and ensure consistent error messages.

use crate::error::ApiError;

/// Trait for validating request payloads
///
/// Implement this trait for all create/update request types so handlers
/// can validate before any data access.
pub trait RequestValidation {
    /// Validates the request and returns an error if validation fails
    fn validate(&self) -> Result<(), ApiError>;
}

/// Macro for validating fields with custom predicates
///
/// # Usage
///
/// ```rust,ignore
/// validate_field!(self.username, !self.username.trim().is_empty(), "Username is required");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Macro for validating required fields (non-empty strings)
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        validate_field!($field, !$field.trim().is_empty(), $message);
    };
}

/// Macro for validating string length
#[macro_export]
macro_rules! validate_length {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {
        let len = $field.len();
        validate_field!($field, len >= $min && len <= $max, $message);
    };
}

/// Macro for validating email format (basic check)
#[macro_export]
macro_rules! validate_email {
    ($field:expr, $message:expr) => {
        validate_field!($field, $field.contains('@') && $field.contains('.'), $message);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRequest {
        username: String,
        email: String,
    }

    impl RequestValidation for TestRequest {
        fn validate(&self) -> Result<(), ApiError> {
            validate_required!(self.username, "Username is required");
            validate_length!(
                self.username,
                1,
                150,
                "Username must be between 1 and 150 characters"
            );
            validate_email!(self.email, "Invalid email format");
            Ok(())
        }
    }

    #[test]
    fn test_validation_success() {
        let request = TestRequest {
            username: "testuser".to_string(),
            email: "john@example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_username() {
        let request = TestRequest {
            username: "  ".to_string(),
            email: "john@example.com".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_email() {
        let request = TestRequest {
            username: "testuser".to_string(),
            email: "invalid-email".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
