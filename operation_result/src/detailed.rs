//! The interface shared by every result variant.

use crate::{ArgumentValue, Arguments, OperationResultError, ResultDetails};

/// Which side of the success/failure split a result is on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// The operation succeeded.
    Succeeded,
    /// The operation failed.
    Failed,
}

impl Status {
    /// Returns `true` for [`Status::Succeeded`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Returns `true` for [`Status::Failed`].
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Accessors and fluent mutators common to all results.
///
/// Implementors only expose their [`ResultDetails`] and [`Status`]; every
/// other method is provided. The `with_*` methods consume and return `Self`,
/// so a chain started on a [`crate::SuccessResult<T>`] stays a
/// `SuccessResult<T>`.
///
/// A rejected `with_*` call drops its receiver along with everything already
/// stored on it. When the result must survive a rejection, go through the
/// in-place appliers on [`Detailed::details_mut`] instead; they leave the
/// result untouched on error.
///
/// ```
/// use operation_result::{Detailed, failed};
///
/// let mut failure = failed().with_error("disk full").with_argument("k", 1)?;
/// assert!(failure.details_mut().add_arguments([("k", 2)]).is_err());
/// assert_eq!(failure.errors().len(), 1);
/// assert_eq!(failure.arguments().get("k"), Some(&serde_json::Value::from(1)));
/// # Ok::<(), operation_result::OperationResultError>(())
/// ```
///
/// # Examples
///
/// ```
/// use operation_result::{Detailed, failed};
///
/// let failure = failed()
///     .with_code("E_TIMEOUT")?
///     .with_message("upstream did not answer")?
///     .with_argument("timeout_ms", 500)?;
/// assert!(failure.has_failed());
/// assert_eq!(failure.code(), Some("E_TIMEOUT"));
/// # Ok::<(), operation_result::OperationResultError>(())
/// ```
pub trait Detailed: Sized {
    /// Shared fields.
    fn details(&self) -> &ResultDetails;

    /// Mutable access to the shared fields.
    fn details_mut(&mut self) -> &mut ResultDetails;

    /// Variant tag.
    fn status(&self) -> Status;

    /// Returns `true` when the result is a success.
    fn has_succeeded(&self) -> bool {
        self.status().is_success()
    }

    /// Returns `true` when the result is a failure.
    fn has_failed(&self) -> bool {
        self.status().is_failure()
    }

    /// Caller-defined classification code.
    fn code(&self) -> Option<&str> {
        self.details().code()
    }

    /// Messages in the order they were added.
    fn messages(&self) -> &[String] {
        self.details().messages()
    }

    /// Structured metadata.
    fn arguments(&self) -> &Arguments {
        self.details().arguments()
    }

    /// Set the code, replacing any previous one.
    ///
    /// # Errors
    ///
    /// See [`ResultDetails::set_code`].
    fn with_code(mut self, code: impl Into<String>) -> Result<Self, OperationResultError> {
        self.details_mut().set_code(code)?;
        Ok(self)
    }

    /// Append messages in order.
    ///
    /// # Errors
    ///
    /// See [`ResultDetails::add_messages`].
    fn with_messages<I, S>(mut self, messages: I) -> Result<Self, OperationResultError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details_mut().add_messages(messages)?;
        Ok(self)
    }

    /// Append a single message.
    ///
    /// # Errors
    ///
    /// See [`ResultDetails::add_messages`].
    fn with_message(self, message: impl Into<String>) -> Result<Self, OperationResultError> {
        let message: String = message.into();
        self.with_messages([message])
    }

    /// Insert several arguments.
    ///
    /// # Errors
    ///
    /// See [`ResultDetails::add_arguments`].
    fn with_arguments<I, K, V>(mut self, arguments: I) -> Result<Self, OperationResultError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        self.details_mut().add_arguments(arguments)?;
        Ok(self)
    }

    /// Insert a single argument.
    ///
    /// # Errors
    ///
    /// See [`ResultDetails::add_arguments`].
    fn with_argument(
        self,
        key: impl Into<String>,
        value: impl Into<ArgumentValue>,
    ) -> Result<Self, OperationResultError> {
        let pair: (String, ArgumentValue) = (key.into(), value.into());
        self.with_arguments([pair])
    }

    /// Insert a single argument given as a key/value pair.
    ///
    /// # Errors
    ///
    /// See [`ResultDetails::add_arguments`].
    fn with_argument_pair<K, V>(self, (key, value): (K, V)) -> Result<Self, OperationResultError>
    where
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        self.with_argument(key, value)
    }
}
