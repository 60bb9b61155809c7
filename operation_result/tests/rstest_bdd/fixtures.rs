//! Scenario state shared between behavioural steps.

use operation_result::{FailureResult, OperationFailedError, OperationResult, OperationResultError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State for combining two results.
#[derive(Debug, Default, ScenarioState)]
pub struct CombineContext {
    pub base: Slot<OperationResult>,
    pub other: Slot<OperationResult>,
    pub outcome: Slot<Result<OperationResult, OperationResultError>>,
}

/// Creates an empty combination context.
#[fixture]
pub fn combine_context() -> CombineContext {
    CombineContext::default()
}

/// State for building and raising a failure.
#[derive(Debug, Default, ScenarioState)]
pub struct RaiseContext {
    pub failure: Slot<FailureResult>,
    pub raised: Slot<OperationFailedError>,
    pub rejection: Slot<OperationResultError>,
}

/// Creates an empty raising context.
#[fixture]
pub fn raise_context() -> RaiseContext {
    RaiseContext::default()
}
