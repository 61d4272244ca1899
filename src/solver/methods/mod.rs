//! Transportation methods
//!
//! This module contains the concrete implementation of the
//! [`Solver`](crate::solver::Solver) trait and the building blocks it is
//! composed of.
//!
//! # Architecture
//!
//! One VAM iteration is three steps, each in its own module:
//!
//! - **[`penalty`]**: penalty scan of every open row and column
//!   ([`Penalty`], [`LinePenalty`])
//! - **[`selection`]**: reconciliation of the strongest row and column into
//!   one [`Candidate`] cell, under a [`SelectionRule`](crate::solver::SelectionRule)
//! - **[`vogel`]**: the allocation loop ([`VogelSolver`])
//!
//! The scan and selection functions are public so that other greedy
//! methods, or step-by-step visualisations, can reuse them.

pub mod penalty;
pub mod selection;
pub mod vogel;

// Re-exports for convenience
pub use penalty::{LinePenalty, Penalty};
pub use selection::Candidate;
pub use vogel::VogelSolver;
