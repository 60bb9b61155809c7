//! Merging two results into one.

use super::{IntoOperationResult, OperationResult};
use crate::{OperationResultError, diagnostics::combined};

impl<T> OperationResult<T> {
    /// Combine `self` (the base) with `other`.
    ///
    /// | base    | other   | outcome |
    /// |---------|---------|---------|
    /// | success | success | base, payload preserved |
    /// | success | failure | other, re-typed to `T`; base payload dropped |
    /// | failure | success | base |
    /// | failure | failure | new failure: base errors, messages, and arguments followed by those of other; base code |
    ///
    /// # Errors
    ///
    /// [`OperationResultError::DuplicateArgumentKey`] when two failures carry
    /// the same argument key. No result is produced in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{Detailed, failed};
    ///
    /// let first = failed().with_code("A")?.with_message("first")?;
    /// let second = failed().with_code("B")?.with_message("second")?;
    /// let merged = first.combine(second)?;
    /// assert!(merged.has_failed());
    /// assert_eq!(merged.code(), Some("A"));
    /// assert_eq!(merged.messages(), ["first", "second"]);
    /// # Ok::<(), operation_result::OperationResultError>(())
    /// ```
    pub fn combine<R>(self, other: R) -> Result<Self, OperationResultError>
    where
        R: IntoOperationResult,
    {
        match (self, other.into_operation_result()) {
            (Self::Success(base), OperationResult::Success(_)) => {
                combined("success/success");
                Ok(Self::Success(base))
            }
            (Self::Success(_), OperationResult::Failure(failure)) => {
                combined("success/failure");
                Ok(Self::Failure(failure.into_typed()))
            }
            (Self::Failure(base), OperationResult::Success(_)) => {
                combined("failure/success");
                Ok(Self::Failure(base))
            }
            (Self::Failure(base), OperationResult::Failure(failure)) => {
                combined("failure/failure");
                base.merge(failure.into_typed()).map(Self::Failure)
            }
        }
    }

    /// Fold `results` left to right with [`OperationResult::combine`].
    ///
    /// Returns `Ok(None)` when `results` is empty.
    ///
    /// # Errors
    ///
    /// The first error raised by [`OperationResult::combine`].
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{Detailed, OperationResult, failed, succeeded};
    ///
    /// let merged = OperationResult::combine_all([
    ///     OperationResult::from(succeeded()),
    ///     failed().with_error("first").into(),
    ///     failed().with_error("second").into(),
    /// ])?
    /// .expect("non-empty input");
    /// assert!(merged.has_failed());
    /// assert_eq!(merged.errors().len(), 2);
    /// # Ok::<(), operation_result::OperationResultError>(())
    /// ```
    pub fn combine_all<I>(results: I) -> Result<Option<Self>, OperationResultError>
    where
        I: IntoIterator,
        I::Item: IntoOperationResult<Payload = T>,
    {
        let mut results = results.into_iter();
        let Some(first) = results.next() else {
            return Ok(None);
        };
        results
            .try_fold(first.into_operation_result(), Self::combine)
            .map(Some)
    }
}
