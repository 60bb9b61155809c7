//! Step implementations live under [`steps`]; [`scenarios`] binds them to
//! the feature files.

mod scenarios;
pub mod steps;
