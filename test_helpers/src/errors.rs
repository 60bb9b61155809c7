//! Error values for populating failed results in tests.

use std::sync::Arc;

use operation_result::SharedError;
use thiserror::Error;

/// Error with a fixed message, compared by message in assertions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SampleError(pub String);

impl SampleError {
    /// Create an error with `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Create a shared handle to an error with `message`.
    #[must_use]
    pub fn shared(message: impl Into<String>) -> SharedError {
        Arc::new(Self::new(message))
    }
}

/// Shared errors named `error-1` .. `error-n`.
#[must_use]
pub fn numbered(count: usize) -> Vec<SharedError> {
    (1..=count)
        .map(|i| SampleError::shared(format!("error-{i}")))
        .collect()
}

/// Display text of each error, in order.
#[must_use]
pub fn texts(errors: &[SharedError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
