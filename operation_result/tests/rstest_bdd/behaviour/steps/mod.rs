//! Behavioural step modules registered with `rstest-bdd`.

pub mod combine_steps;
pub mod raise_steps;
