//! Transportation solvers
//!
//! This module provides the solver trait, its configuration and result
//! types, and the Vogel's Approximation Method implementation.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Problem** (`TransportProblem`) - WHAT to solve
//!    - Supply, demand, cost matrix
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Selection rule (tie-break between row and column candidates)
//!    - Balance policy (tolerate or reject unbalanced problems)
//!
//! 3. **Solver** (`Solver` trait) - The method
//!    - Validates, allocates, returns a `Solution`
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverConfiguration`, `SelectionRule`,
//!   `BalancePolicy`, `Solution`
//! - **`error`**: `SolverError`
//! - **`methods`**: penalty scan, cell selection and `VogelSolver`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────────┐
//! │ TransportProblem │   │ SolverConfiguration  │
//! └────────┬─────────┘   └──────────┬───────────┘
//!          └────────────┬───────────┘
//!                ┌──────▼───────┐
//!                │ VogelSolver  │  validate → scan → select → allocate
//!                └──────┬───────┘
//!                ┌──────▼───────┐
//!                │   Solution   │  total cost + allocations + final state
//!                └──────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use vogel_rs::solver::solve_transport;
//!
//! # fn main() -> Result<(), vogel_rs::solver::SolverError> {
//! let solution = solve_transport(
//!     &[20, 30, 50],
//!     &[30, 40, 30],
//!     &[vec![4, 6, 8], vec![5, 3, 7], vec![6, 9, 2]],
//! )?;
//!
//! assert_eq!(solution.total_cost, 370);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All solver entry points return `Result<_, SolverError>`. Validation
//! errors are raised before any allocation:
//!
//! ```rust
//! use vogel_rs::solver::{SolverError, solve_transport};
//!
//! let result = solve_transport(&[5, 5, 5], &[5, 10], &[vec![1, 2], vec![3, 4]]);
//! assert!(matches!(result, Err(SolverError::DimensionMismatch { .. })));
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod error;
pub mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Only consulted when the crate is built with the `parallel` feature: a
// penalty scan over at least this many open lines runs on the rayon pool.
// Relaxed ordering is enough, the value is a performance hint.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of open lines from which a penalty scan goes parallel.
///
/// Each line scan is O(n) over the crossing lines; below a few hundred
/// lines the rayon dispatch costs more than it saves.
const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-scan threshold.
///
/// # Example
///
/// ```rust
/// use vogel_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-scan threshold.
///
/// # Panics
///
/// Panics when `threshold == 0`.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serialises tests that touch the global threshold.
#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Saves the threshold on construction, restores it on drop.
///
/// Holds `THRESHOLD_LOCK` for its whole lifetime, so guards must not nest.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    BalancePolicy,
    SelectionRule,
    Solution,
    Solver,
    SolverConfiguration,
};

pub use error::SolverError;

pub use methods::VogelSolver;

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::problem::TransportProblem;

/// Solve a problem given as plain slices with the default configuration
///
/// Inputs are copied; the caller's vectors are left untouched.
///
/// # Errors
///
/// Any [`SolverError`] raised by validation, see [`TransportProblem::validate`].
pub fn solve_transport(
    supply: &[i64],
    demand: &[i64],
    costs: &[Vec<i64>],
) -> Result<Solution, SolverError> {
    let problem = TransportProblem::from_rows(supply.to_vec(), demand.to_vec(), costs)?;
    VogelSolver::new().solve(&problem, &SolverConfiguration::default())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn large_problem(n: usize) -> TransportProblem {
        let supply = vec![10; n];
        let demand = vec![10; n];
        let rows: Vec<Vec<i64>> = (0..n)
            .map(|i| (0..n).map(|j| ((i * 37 + j * 11) % 97) as i64).collect())
            .collect();
        TransportProblem::from_rows(supply, demand, &rows).unwrap()
    }

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 256);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let guard = ThresholdGuard::save(42);
        assert_eq!(parallel_threshold(), 42);
        let previous = guard.previous;
        drop(guard);

        // Every guard restores on drop, so the next one sees the same value
        let guard = ThresholdGuard::save(7);
        assert_eq!(guard.previous, previous);
    }

    #[test]
    fn test_result_independent_of_threshold() {
        let problem = large_problem(24);
        let config = SolverConfiguration::default();

        let reference = {
            let _guard = ThresholdGuard::save(usize::MAX);
            VogelSolver::new().solve(&problem, &config).unwrap()
        };
        let low = {
            let _guard = ThresholdGuard::save(1);
            VogelSolver::new().solve(&problem, &config).unwrap()
        };

        assert_eq!(reference.total_cost, low.total_cost);
        assert_eq!(reference.allocations, low.allocations);
    }

    #[test]
    fn test_solve_transport_leaves_inputs_untouched() {
        let supply = vec![14, 16, 5];
        let demand = vec![6, 10, 15, 4];
        let costs = vec![vec![2, 3, 11, 7], vec![1, 0, 6, 1], vec![5, 8, 15, 9]];

        let solution = solve_transport(&supply, &demand, &costs).unwrap();

        assert_eq!(solution.total_cost, 166);
        assert_eq!(supply, vec![14, 16, 5]);
        assert_eq!(demand, vec![6, 10, 15, 4]);
    }
}
