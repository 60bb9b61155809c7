//! Primary error enum for result construction and mutation.

use std::{error::Error as StdError, sync::Arc};

use thiserror::Error;

/// Caller-supplied error stored on a failed result.
///
/// Errors are reference counted so results stay cheap to clone and the
/// aggregate conversion can hand the same values to its source chain.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Coarse classification of an [`OperationResultError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// An input was blank or conflicted with the argument map.
    InvalidArgument,
    /// The operation needs at least one error and was given none.
    InvalidOperation,
}

/// Errors raised when a result mutator rejects its input.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum OperationResultError {
    /// A code or message was empty or whitespace-only.
    #[error("invalid argument '{parameter}': value must not be blank")]
    BlankArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// A batch that must carry at least one entry was empty.
    #[error("'{parameter}' must contain at least one entry")]
    EmptyCollection {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// An argument key is already present on the target result.
    #[error("invalid argument: argument '{key}' is already present")]
    DuplicateArgumentKey {
        /// The colliding key.
        key: String,
    },
}

impl OperationResultError {
    /// Returns the taxonomy bucket this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{ErrorKind, OperationResultError};
    ///
    /// let err = OperationResultError::EmptyCollection { parameter: "errors" };
    /// assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    ///
    /// let err = OperationResultError::EmptyCollection { parameter: "arguments" };
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCollection { parameter } if *parameter == "errors" => {
                ErrorKind::InvalidOperation
            }
            Self::BlankArgument { .. }
            | Self::EmptyCollection { .. }
            | Self::DuplicateArgumentKey { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) const fn blank(parameter: &'static str) -> Self {
        Self::BlankArgument { parameter }
    }

    pub(crate) const fn empty(parameter: &'static str) -> Self {
        Self::EmptyCollection { parameter }
    }

    pub(crate) fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateArgumentKey { key: key.into() }
    }
}
