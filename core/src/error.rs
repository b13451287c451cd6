//! Error types for the employee API client.
//!
//! # Design
//! Server rejections are split by what the user can act on. A 4xx carries
//! a `detail` text explaining the rejection when the server provides one,
//! and surfaces as `Validation` (or `NotFound` for a 404). Anything the user
//! cannot fix from the form, such as a dropped connection or a 5xx without
//! a text `detail`, lands in `Transport` and is shown as a generic message.

use thiserror::Error;

use crate::types::FieldError;

/// Shown when the server rejects a payload without explaining why.
pub const VALIDATION_FALLBACK: &str = "Please verify the information you provided.";

/// Shown when the list cannot be fetched.
pub const LOAD_FALLBACK: &str = "Failed to load employees.";

/// Shown when a mutation fails for a reason other than a rejected payload.
pub const SAVE_FALLBACK: &str = "Failed to save employee.";

pub(crate) const NOT_FOUND_FALLBACK: &str = "Employee not found";

/// Errors returned by `EmployeeClient` and recorded by the components.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The form failed required-field or integer checks; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] FieldError),

    /// The server rejected the payload.
    #[error("{0}")]
    Validation(String),

    /// A by-id operation addressed a record that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Text to show inline in place of the failed operation's result.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Invalid(err) => err.to_string(),
            ApiError::Validation(detail) | ApiError::NotFound(detail) => detail.clone(),
            ApiError::Transport(_)
            | ApiError::Deserialization(_)
            | ApiError::Serialization(_) => fallback.to_string(),
        }
    }
}
