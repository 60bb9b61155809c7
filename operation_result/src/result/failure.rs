//! The failure variant and its error collection.

use std::{error::Error, fmt, marker::PhantomData, sync::Arc};

use crate::{
    Detailed, FailureInfo, IntoOperationResult, OperationFailedError, OperationResult,
    OperationResultError, ResultDetails, SharedError, Status, diagnostics::rejected,
};

/// A failed result for an operation that would have produced a `T`.
///
/// Carries the shared details plus the ordered list of errors that caused the
/// failure. The untyped form is `FailureResult<()>`.
pub struct FailureResult<T = ()> {
    details: ResultDetails,
    errors: Vec<SharedError>,
    payload: PhantomData<fn() -> T>,
}

impl<T> FailureResult<T> {
    /// Create a failure with no details and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::from_details(ResultDetails::new(), Vec::new())
    }

    /// Create a failure seeded from `info`.
    ///
    /// # Errors
    ///
    /// Returns an [`OperationResultError`] when the seeded code, messages, or
    /// arguments are rejected.
    pub fn from_info(info: FailureInfo) -> Result<Self, OperationResultError> {
        let FailureInfo { info, errors } = info;
        let mut failure = Self::from_details(ResultDetails::from_info(info)?, Vec::new());
        if !errors.is_empty() {
            failure.add_errors(errors)?;
        }
        Ok(failure)
    }

    pub(crate) const fn from_details(details: ResultDetails, errors: Vec<SharedError>) -> Self {
        Self {
            details,
            errors,
            payload: PhantomData,
        }
    }

    /// Errors in the order they were added.
    #[must_use]
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    /// Consume the failure, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<SharedError> {
        self.errors
    }

    /// Consume the failure, returning its details and errors.
    #[must_use]
    pub fn into_parts(self) -> (ResultDetails, Vec<SharedError>) {
        (self.details, self.errors)
    }

    /// Append `errors` in order.
    ///
    /// # Errors
    ///
    /// [`OperationResultError::EmptyCollection`] when `errors` is empty.
    pub fn add_errors<I>(&mut self, errors: I) -> Result<(), OperationResultError>
    where
        I: IntoIterator<Item = SharedError>,
    {
        let batch: Vec<SharedError> = errors.into_iter().collect();
        if batch.is_empty() {
            return Err(rejected("errors", OperationResultError::empty("errors")));
        }
        self.errors.extend(batch);
        Ok(())
    }

    /// Append a single error.
    pub fn add_error(&mut self, error: impl Into<Box<dyn Error + Send + Sync>>) {
        self.errors.push(Arc::from(error.into()));
    }

    /// Append `errors` in order.
    ///
    /// # Errors
    ///
    /// See [`FailureResult::add_errors`].
    pub fn with_errors<I>(mut self, errors: I) -> Result<Self, OperationResultError>
    where
        I: IntoIterator<Item = SharedError>,
    {
        self.add_errors(errors)?;
        Ok(self)
    }

    /// Append a single error.
    ///
    /// Accepts any error type as well as plain strings.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        self.add_error(error);
        self
    }

    /// Re-target the failure at a different payload type.
    ///
    /// Details and errors move over unchanged.
    #[must_use]
    pub fn into_typed<U>(self) -> FailureResult<U> {
        FailureResult::from_details(self.details, self.errors)
    }

    /// Raise the failure as a single error.
    #[must_use]
    pub fn into_error(self) -> OperationFailedError {
        OperationFailedError::from(self)
    }

    /// Combine with `other`; see [`OperationResult::combine`].
    ///
    /// # Errors
    ///
    /// See [`OperationResult::combine`].
    pub fn combine<R>(self, other: R) -> Result<OperationResult<T>, OperationResultError>
    where
        R: IntoOperationResult,
    {
        OperationResult::Failure(self).combine(other)
    }

    /// Merge `later` after `self`: errors, messages, and arguments are
    /// appended, the code of `self` is kept.
    pub(crate) fn merge(self, later: Self) -> Result<Self, OperationResultError> {
        let Self {
            mut details,
            mut errors,
            payload,
        } = self;
        details.absorb(later.details)?;
        errors.extend(later.errors);
        Ok(Self {
            details,
            errors,
            payload,
        })
    }
}

impl<T> Default for FailureResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FailureResult<T> {
    fn clone(&self) -> Self {
        Self::from_details(self.details.clone(), self.errors.clone())
    }
}

impl<T> fmt::Debug for FailureResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureResult")
            .field("details", &self.details)
            .field("errors", &self.errors)
            .finish()
    }
}

impl<T> Detailed for FailureResult<T> {
    fn details(&self) -> &ResultDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut ResultDetails {
        &mut self.details
    }

    fn status(&self) -> Status {
        Status::Failed
    }
}

impl<T> IntoOperationResult for FailureResult<T> {
    type Payload = T;

    fn into_operation_result(self) -> OperationResult<T> {
        OperationResult::Failure(self)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{ErrorKind, ResultInfo};

    fn shared(message: &str) -> SharedError {
        Arc::new(io::Error::other(message.to_owned()))
    }

    #[test]
    fn with_errors_rejects_empty_batch() {
        let err = FailureResult::<()>::new()
            .with_errors(Vec::new())
            .expect_err("empty batch must be rejected");
        assert_eq!(err, OperationResultError::EmptyCollection { parameter: "errors" });
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn with_errors_appends_in_order() {
        let first = shared("one");
        let second = shared("two");
        let failure = FailureResult::<()>::new()
            .with_errors([Arc::clone(&first)])
            .and_then(|f| f.with_errors([Arc::clone(&second)]))
            .expect("non-empty batches");
        assert_eq!(failure.errors().len(), 2);
        assert!(Arc::ptr_eq(&failure.errors()[0], &first));
        assert!(Arc::ptr_eq(&failure.errors()[1], &second));
    }

    #[test]
    fn with_error_accepts_strings() {
        let failure = FailureResult::<()>::new().with_error("plain text");
        assert_eq!(failure.errors()[0].to_string(), "plain text");
    }

    #[test]
    fn from_info_seeds_errors_then_with_error_appends() {
        let info = FailureInfo::new().error(shared("ex1"));
        let failure = FailureResult::<()>::from_info(info)
            .expect("valid info")
            .with_error(io::Error::other("ex2"));
        let texts: Vec<_> = failure.errors().iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["ex1", "ex2"]);
    }

    #[test]
    fn typed_from_info_seeds_every_field() {
        let info = FailureInfo::from(ResultInfo::new().code("E1").message("broken").argument("n", 1))
            .error(shared("cause"));
        let failure = FailureResult::<String>::from_info(info).expect("valid info");
        assert_eq!(failure.code(), Some("E1"));
        assert_eq!(failure.messages(), ["broken"]);
        assert_eq!(failure.arguments().len(), 1);
        assert_eq!(failure.errors().len(), 1);
    }

    #[test]
    fn into_typed_keeps_details_and_errors() {
        let failure = FailureResult::<()>::new()
            .with_code("E")
            .expect("valid code")
            .with_error("cause");
        let typed: FailureResult<Vec<u8>> = failure.into_typed();
        assert_eq!(typed.code(), Some("E"));
        assert_eq!(typed.errors().len(), 1);
    }
}
