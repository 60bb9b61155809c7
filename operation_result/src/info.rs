//! Plain carriers used to seed a result at construction time.
//!
//! These structs perform no validation of their own. Their contents are run
//! through the result's appliers when the result is built, so the usual rules
//! apply there.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{ArgumentValue, SharedError};

/// Fields common to [`SuccessInfo`] and [`FailureInfo`].
///
/// Deserializes from an object whose fields are all optional, so a seed can
/// be read from JSON or any other `serde` format.
///
/// ```
/// use operation_result::{Detailed, ResultInfo, SuccessInfo, succeeded_from};
///
/// let info: ResultInfo = serde_json::from_str(r#"{"code": "OK", "arguments": {"n": 1}}"#)
///     .expect("valid seed");
/// let result = succeeded_from(SuccessInfo::from(info))?;
/// assert_eq!(result.code(), Some("OK"));
/// # Ok::<(), operation_result::OperationResultError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResultInfo {
    /// Code to apply; skipped when absent or empty.
    pub code: Option<String>,
    /// Messages to append, in order.
    pub messages: Vec<String>,
    /// Arguments to insert, in order.
    pub arguments: IndexMap<String, ArgumentValue>,
}

impl ResultInfo {
    /// Create an empty carrier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Append a message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Store an argument, replacing an earlier value for the same key.
    #[must_use]
    pub fn argument(mut self, key: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}

/// Seed for a successful result.
///
/// # Examples
///
/// ```
/// use operation_result::{Detailed, ResultInfo, SuccessInfo, succeeded_from};
///
/// let info = SuccessInfo::from(ResultInfo::new().code("CREATED").message("user stored"));
/// let result = succeeded_from(info)?;
/// assert_eq!(result.code(), Some("CREATED"));
/// # Ok::<(), operation_result::OperationResultError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuccessInfo {
    /// Shared fields.
    pub info: ResultInfo,
}

impl SuccessInfo {
    /// Create an empty carrier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<ResultInfo> for SuccessInfo {
    fn from(info: ResultInfo) -> Self {
        Self { info }
    }
}

/// Seed for a failed result.
#[derive(Clone, Debug, Default)]
pub struct FailureInfo {
    /// Shared fields.
    pub info: ResultInfo,
    /// Errors to append, in order; skipped when empty.
    pub errors: Vec<SharedError>,
}

impl FailureInfo {
    /// Create an empty carrier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error.
    #[must_use]
    pub fn error(mut self, error: SharedError) -> Self {
        self.errors.push(error);
        self
    }
}

impl From<ResultInfo> for FailureInfo {
    fn from(info: ResultInfo) -> Self {
        Self {
            info,
            errors: Vec::new(),
        }
    }
}
