//! Test helpers shared across crates.
//!
//! Provides a small error type for populating failures and text helpers for
//! behavioural step arguments.

pub mod errors;
pub mod text;
