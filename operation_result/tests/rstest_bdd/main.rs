//! `rstest-bdd` harness for `operation_result`.
//!
//! [`fixtures`] holds the per-scenario state, while [`behaviour`] binds the
//! `.feature` files under `tests/features` to the step registry.

mod behaviour;
mod fixtures;
