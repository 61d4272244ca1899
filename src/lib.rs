//! vogel-rs: Transportation Problem Initial Solutions
//!
//! Computes an initial basic feasible solution for a transportation problem
//! (supplies at origins, demands at destinations, a per-cell shipping cost)
//! using Vogel's Approximation Method (VAM).
//!
//! # Architecture
//!
//! vogel-rs keeps the same separation as a numerical solver framework:
//!
//! 1. **Problem** (`problem`) - WHAT to solve
//!    - `TransportProblem`: supply, demand and cost matrix
//!    - `SolverState`: remaining quantities and closed lines of one run
//!    - `Allocation`: one shipment of the resulting plan
//!
//! 2. **Solver** (`solver`) - HOW to solve
//!    - `SolverConfiguration`: selection rule and balance policy
//!    - `Solver` trait and the `VogelSolver` method
//!    - `Solution`: total cost, allocation trace and final state
//!
//! 3. **Output** (`output`) - exporting the shipping plan
//!
//! # Quick Start
//!
//! ```rust
//! use vogel_rs::problem::TransportProblem;
//! use vogel_rs::solver::{Solver, SolverConfiguration, VogelSolver};
//!
//! # fn main() -> Result<(), vogel_rs::solver::SolverError> {
//! let problem = TransportProblem::from_rows(
//!     vec![14, 16, 5],
//!     vec![6, 10, 15, 4],
//!     &[
//!         vec![2, 3, 11, 7],
//!         vec![1, 0, 6, 1],
//!         vec![5, 8, 15, 9],
//!     ],
//! )?;
//!
//! let solution = VogelSolver::new().solve(&problem, &SolverConfiguration::default())?;
//!
//! assert_eq!(solution.total_cost, 166);
//! assert_eq!(solution.shipped(), 35);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`problem`]: Problem instance and per-run state
//! - [`solver`]: Solver trait, configuration and the VAM method
//! - [`output`]: Plan export

pub mod problem;
pub mod solver;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use vogel_rs::prelude::*;
    //! ```
    pub use crate::problem::{Allocation,
                             SolverState,
                             TransportProblem};
    pub use crate::solver::{BalancePolicy,
                            SelectionRule,
                            Solution,
                            Solver,
                            SolverConfiguration,
                            SolverError,
                            VogelSolver,
                            solve_transport};
}
