//! Conversion of a failed result into a single raisable error.

use std::sync::Arc;

use thiserror::Error;

use super::{AggregatedErrors, SharedError};
use crate::{Detailed, FailureResult};

/// Separator placed between messages in [`OperationFailedError`]'s text.
pub const MESSAGE_SEPARATOR: &str = ";\n";

/// A failed result raised as a standard error.
///
/// The display text is the failure's messages joined with
/// [`MESSAGE_SEPARATOR`]; the source is the [`AggregatedErrors`] holding every
/// error the failure collected, oldest first.
///
/// # Examples
///
/// ```
/// use std::error::Error as _;
/// use operation_result::{Detailed, failed};
///
/// let failure = failed()
///     .with_messages(["upload rejected", "retry later"])?
///     .with_error("checksum mismatch");
/// let raised = failure.into_error();
/// assert_eq!(raised.to_string(), "upload rejected;\nretry later");
/// assert!(raised.source().is_some());
/// # Ok::<(), operation_result::OperationResultError>(())
/// ```
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct OperationFailedError {
    message: String,
    code: Option<String>,
    #[source]
    errors: AggregatedErrors,
}

impl OperationFailedError {
    /// Joined message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Code of the failure this error was raised from, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Errors collected by the failure.
    #[must_use]
    pub const fn errors(&self) -> &AggregatedErrors {
        &self.errors
    }

    /// Consume the error, returning the collected inner errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<SharedError> {
        self.errors.into_iter().collect()
    }

    /// Wrap the error for sharing, e.g. to store it on another failure.
    #[must_use]
    pub fn into_shared(self) -> SharedError {
        Arc::new(self)
    }
}

impl<T> From<FailureResult<T>> for OperationFailedError {
    fn from(failure: FailureResult<T>) -> Self {
        let message = failure.messages().join(MESSAGE_SEPARATOR);
        let code = failure.code().map(str::to_owned);
        Self {
            message,
            code,
            errors: AggregatedErrors::new(failure.into_errors()),
        }
    }
}
