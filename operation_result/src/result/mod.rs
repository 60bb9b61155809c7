//! The success/failure sum type and conversions into it.

mod combine;
mod failure;
mod success;

use std::error::Error;

pub use failure::FailureResult;
pub use success::SuccessResult;

use crate::{Detailed, OperationFailedError, ResultDetails, SharedError, Status};

/// Outcome of an operation: a [`SuccessResult`] or a [`FailureResult`].
///
/// `OperationResult` (with the default `T = ()`) is the untyped form;
/// `OperationResult<T>` additionally carries a payload on success.
///
/// # Examples
///
/// ```
/// use operation_result::{Detailed, IntoOperationResult, OperationResult};
///
/// let parsed: OperationResult<u16> = "8080".parse::<u16>().into_operation_result();
/// assert!(parsed.has_succeeded());
/// assert_eq!(parsed.data(), Some(&8080));
/// ```
#[derive(Clone, Debug)]
pub enum OperationResult<T = ()> {
    /// The operation succeeded.
    Success(SuccessResult<T>),
    /// The operation failed.
    Failure(FailureResult<T>),
}

impl<T> OperationResult<T> {
    /// Borrow the success, if this is one.
    #[must_use]
    pub const fn as_success(&self) -> Option<&SuccessResult<T>> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure, if this is one.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&FailureResult<T>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Take the success, if this is one.
    #[must_use]
    pub fn into_success(self) -> Option<SuccessResult<T>> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Take the failure, if this is one.
    #[must_use]
    pub fn into_failure(self) -> Option<FailureResult<T>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// The payload of a success.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(success) => Some(success.data()),
            Self::Failure(_) => None,
        }
    }

    /// Errors of a failure; always empty for a success.
    #[must_use]
    pub fn errors(&self) -> &[SharedError] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(failure) => failure.errors(),
        }
    }

    /// Convert into a standard `Result`, raising a failure as an
    /// [`OperationFailedError`].
    ///
    /// # Errors
    ///
    /// Returns the raised failure when this is a [`OperationResult::Failure`].
    pub fn into_data(self) -> Result<T, OperationFailedError> {
        match self {
            Self::Success(success) => Ok(success.into_data()),
            Self::Failure(failure) => Err(failure.into_error()),
        }
    }
}

impl<T: Default + PartialEq> OperationResult<T> {
    /// Returns `true` for a success whose payload differs from
    /// `T::default()`.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.as_success().is_some_and(SuccessResult::has_data)
    }
}

impl<T> Detailed for OperationResult<T> {
    fn details(&self) -> &ResultDetails {
        match self {
            Self::Success(success) => success.details(),
            Self::Failure(failure) => failure.details(),
        }
    }

    fn details_mut(&mut self) -> &mut ResultDetails {
        match self {
            Self::Success(success) => success.details_mut(),
            Self::Failure(failure) => failure.details_mut(),
        }
    }

    fn status(&self) -> Status {
        match self {
            Self::Success(_) => Status::Succeeded,
            Self::Failure(_) => Status::Failed,
        }
    }
}

impl<T> From<SuccessResult<T>> for OperationResult<T> {
    fn from(success: SuccessResult<T>) -> Self {
        Self::Success(success)
    }
}

impl<T> From<FailureResult<T>> for OperationResult<T> {
    fn from(failure: FailureResult<T>) -> Self {
        Self::Failure(failure)
    }
}

/// Values that can take part in [`OperationResult::combine`].
///
/// Implemented by both variants, by [`OperationResult`] itself, and by
/// standard `Result`s whose error is a thread-safe [`Error`]: `Ok` becomes a
/// success carrying the value, `Err` a failure carrying the error.
///
/// # Examples
///
/// ```
/// use operation_result::{Detailed, IntoOperationResult};
///
/// let result = "x".parse::<i32>().into_operation_result();
/// assert!(result.has_failed());
/// assert_eq!(result.errors().len(), 1);
/// ```
pub trait IntoOperationResult {
    /// Payload type of the resulting success.
    type Payload;

    /// Perform the conversion.
    fn into_operation_result(self) -> OperationResult<Self::Payload>;
}

impl<T> IntoOperationResult for OperationResult<T> {
    type Payload = T;

    fn into_operation_result(self) -> Self {
        self
    }
}

impl<T, E> IntoOperationResult for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    type Payload = T;

    fn into_operation_result(self) -> OperationResult<T> {
        match self {
            Ok(data) => OperationResult::Success(SuccessResult::new(data)),
            Err(error) => OperationResult::Failure(FailureResult::new().with_error(error)),
        }
    }
}
