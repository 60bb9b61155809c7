//! Ordered collection of the errors carried by a failed result.

use std::{error::Error, fmt, sync::Arc};

use super::SharedError;

/// Errors collected by a failure, in the order they were added.
///
/// Used as the source of [`super::OperationFailedError`] so callers walking
/// the error chain reach every inner error.
///
/// # Examples
///
/// ```
/// use operation_result::failed;
///
/// let failure = failed().with_error("disk full").with_error("quota exceeded");
/// let raised = failure.into_error();
/// assert_eq!(raised.errors().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AggregatedErrors(Vec<SharedError>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<SharedError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Error + Send + Sync + 'static)> {
        self.0.iter().map(Arc::as_ref)
    }

    /// The contained errors as shared handles.
    #[must_use]
    pub fn as_slice(&self) -> &[SharedError] {
        &self.0
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no errors were collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a SharedError;
    type IntoIter = std::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = SharedError;
    type IntoIter = std::vec::IntoIter<SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
