//! Common utilities for integration tests

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{Lcg, random_problem, textbook_problem};
pub use test_helpers::{assert_replays, plan_tuples};
