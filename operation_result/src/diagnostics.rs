//! Structured diagnostic events.
//!
//! Compiled to nothing when the `tracing` feature is disabled.

use crate::OperationResultError;

/// Record a rejected mutation and hand the error back to the caller.
pub(crate) fn rejected(field: &'static str, err: OperationResultError) -> OperationResultError {
    #[cfg(feature = "tracing")]
    tracing::debug!(field, kind = ?err.kind(), error = %err, "rejected result mutation");
    #[cfg(not(feature = "tracing"))]
    let _ = field;
    err
}

/// Record which branch of the combination table was taken.
pub(crate) fn combined(branch: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(branch, "combined operation results");
    #[cfg(not(feature = "tracing"))]
    let _ = branch;
}
