//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{CombineContext, RaiseContext, combine_context, raise_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/combination.feature",
    fixtures = [combine_context: CombineContext]
);
scenarios!(
    "tests/features/raising.feature",
    fixtures = [raise_context: RaiseContext]
);
