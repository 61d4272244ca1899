//! Transportation problems
//!
//! This module describes WHAT is being solved: the problem instance and the
//! bookkeeping of a single run over it.
//!
//! # Core Concepts
//!
//! - **Transport Problem**: supply per origin, demand per destination and
//!   the unit cost of every origin/destination cell
//! - **Solver State**: remaining quantities and open/closed lines of one run
//! - **Allocation**: one shipment `(origin, destination, quantity)` of the plan
//!
//! # Architecture
//!
//! Problems are **separate from solvers**:
//! - The problem provides the **data** (immutable once built)
//! - The solver provides the **method** and owns a fresh `SolverState`
//!   for every run
//!
//! A `TransportProblem` is never mutated by a solve, so the same instance
//! can be solved repeatedly (or concurrently) with identical results.
//!
//! # Example
//!
//! ```rust
//! use vogel_rs::problem::{SolverState, TransportProblem};
//!
//! # fn main() -> Result<(), vogel_rs::solver::SolverError> {
//! let problem = TransportProblem::from_rows(
//!     vec![10],
//!     vec![4, 6],
//!     &[vec![1, 2]],
//! )?;
//!
//! problem.validate()?;
//! assert!(problem.is_balanced());
//!
//! let state = SolverState::new(&problem);
//! assert_eq!(state.open_rows().count(), 1);
//! assert_eq!(state.open_cols().count(), 2);
//! # Ok(())
//! # }
//! ```

// module declaration
pub mod instance;
pub mod state;
pub mod allocation;

// re-export commonly used types for convenience
pub use allocation::Allocation;
pub use instance::{Entry, TransportProblem};
pub use state::SolverState;
