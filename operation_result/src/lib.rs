//! A success/failure result type carrying diagnostics instead of panicking.
//!
//! Operations return an [`OperationResult`]: either a [`SuccessResult`]
//! (optionally carrying a typed payload) or a [`FailureResult`] (carrying the
//! errors that caused it). Both variants carry a caller-defined code, ordered
//! messages, and key-unique [`Arguments`]. Results are built with the factory
//! functions below, enriched through the fluent methods of [`Detailed`], and
//! merged with [`OperationResult::combine`].
//!
//! ```
//! use operation_result::{Detailed, failed, succeeded};
//!
//! let validated = succeeded().with_message("schema ok")?;
//! let stored = failed()
//!     .with_code("E_STORE")?
//!     .with_message("write refused")?
//!     .with_error("read-only filesystem");
//!
//! let outcome = validated.combine(stored)?;
//! assert!(outcome.has_failed());
//! assert_eq!(outcome.code(), Some("E_STORE"));
//!
//! let raised = outcome.into_data().unwrap_err();
//! assert_eq!(raised.to_string(), "write refused");
//! # Ok::<(), operation_result::OperationResultError>(())
//! ```

mod arguments;
mod detailed;
mod details;
mod diagnostics;
mod error;
mod info;
mod result;

pub use arguments::{ArgumentValue, Arguments};
pub use detailed::{Detailed, Status};
pub use details::ResultDetails;
pub use error::{
    AggregatedErrors, ErrorKind, MESSAGE_SEPARATOR, OperationFailedError, OperationResultError,
    SharedError,
};
pub use info::{FailureInfo, ResultInfo, SuccessInfo};
pub use result::{FailureResult, IntoOperationResult, OperationResult, SuccessResult};

/// Create an untyped success.
#[must_use]
pub fn succeeded() -> SuccessResult {
    SuccessResult::new(())
}

/// Create a success carrying `data`.
#[must_use]
pub fn succeeded_with<T>(data: T) -> SuccessResult<T> {
    SuccessResult::new(data)
}

/// Create an untyped success seeded from `info`.
///
/// # Errors
///
/// Returns an [`OperationResultError`] when the seeded code, messages, or
/// arguments are rejected.
pub fn succeeded_from(info: SuccessInfo) -> Result<SuccessResult, OperationResultError> {
    SuccessResult::from_info((), info)
}

/// Create a success carrying `data`, seeded from `info`.
///
/// # Errors
///
/// Returns an [`OperationResultError`] when the seeded code, messages, or
/// arguments are rejected.
pub fn succeeded_with_info<T>(
    data: T,
    info: SuccessInfo,
) -> Result<SuccessResult<T>, OperationResultError> {
    SuccessResult::from_info(data, info)
}

/// Create an untyped failure.
///
/// Use [`FailureResult::new`] for a failure typed to a payload.
#[must_use]
pub fn failed() -> FailureResult {
    FailureResult::new()
}

/// Create an untyped failure seeded from `info`.
///
/// # Errors
///
/// Returns an [`OperationResultError`] when the seeded code, messages, or
/// arguments are rejected.
pub fn failed_from(info: FailureInfo) -> Result<FailureResult, OperationResultError> {
    FailureResult::from_info(info)
}
