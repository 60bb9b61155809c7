//! The success variant.

use crate::{
    Detailed, IntoOperationResult, OperationResult, OperationResultError, ResultDetails, Status,
    SuccessInfo,
};

/// A successful result carrying a payload of type `T`.
///
/// The untyped form is `SuccessResult<()>`, whose payload never counts as
/// data. A success never carries errors.
///
/// # Examples
///
/// ```
/// use operation_result::{Detailed, succeeded_with};
///
/// let result = succeeded_with(42_u32).with_message("answer computed")?;
/// assert!(result.has_succeeded());
/// assert!(result.has_data());
/// assert_eq!(*result.data(), 42);
/// # Ok::<(), operation_result::OperationResultError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuccessResult<T = ()> {
    details: ResultDetails,
    data: T,
}

impl<T> SuccessResult<T> {
    /// Create a success carrying `data`.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            details: ResultDetails::new(),
            data,
        }
    }

    /// Create a success carrying `data`, seeded from `info`.
    ///
    /// # Errors
    ///
    /// Returns an [`OperationResultError`] when the seeded code, messages, or
    /// arguments are rejected.
    pub fn from_info(data: T, info: SuccessInfo) -> Result<Self, OperationResultError> {
        Ok(Self {
            details: ResultDetails::from_info(info.info)?,
            data,
        })
    }

    /// The payload.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Consume the result, returning the payload.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Consume the result, returning its details and payload.
    #[must_use]
    pub fn into_parts(self) -> (ResultDetails, T) {
        (self.details, self.data)
    }

    /// Replace the payload in place.
    pub fn set_data(&mut self, data: T) {
        self.data = data;
    }

    /// Replace the payload.
    #[must_use]
    pub fn with_data(mut self, data: T) -> Self {
        self.set_data(data);
        self
    }

    /// Combine with `other`; see [`OperationResult::combine`].
    ///
    /// # Errors
    ///
    /// Never fails for a success base; the signature matches
    /// [`OperationResult::combine`].
    pub fn combine<R>(self, other: R) -> Result<OperationResult<T>, OperationResultError>
    where
        R: IntoOperationResult,
    {
        OperationResult::Success(self).combine(other)
    }
}

impl<T: Default + PartialEq> SuccessResult<T> {
    /// Returns `true` when the payload differs from `T::default()`.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.data != T::default()
    }
}

impl<T> Detailed for SuccessResult<T> {
    fn details(&self) -> &ResultDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut ResultDetails {
        &mut self.details
    }

    fn status(&self) -> Status {
        Status::Succeeded
    }
}

impl<T> IntoOperationResult for SuccessResult<T> {
    type Payload = T;

    fn into_operation_result(self) -> OperationResult<T> {
        OperationResult::Success(self)
    }
}
