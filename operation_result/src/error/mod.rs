//! Error types produced while building, combining, and raising results.

mod aggregate;
mod failed;
mod types;

pub use aggregate::AggregatedErrors;
pub use failed::{MESSAGE_SEPARATOR, OperationFailedError};
pub use types::{ErrorKind, OperationResultError, SharedError};
