//! Vogel's Approximation Method
//!
//! # Background
//!
//! VAM builds an initial basic feasible solution of a transportation
//! problem greedily. Every iteration:
//!
//! ```text
//! 1. penalty scan   : penalty of every open row and every open column
//! 2. cell selection : cheapest cell of the line with the strongest penalty
//! 3. allocation     : ship min(remaining supply, remaining demand) there
//! ```
//!
//! Shipping exhausts the row, the column, or both (a degenerate step), and
//! exhausted lines are closed for good. The loop stops as soon as either
//! the total remaining supply or the total remaining demand reaches zero.
//!
//! # Characteristics
//!
//! - **Result**: feasible, usually close to optimal, not guaranteed optimal
//! - **Iterations**: at most `origins + destinations - 1`
//! - **Cost per iteration**: O(origins × destinations) for the scans
//!
//! # Example
//!
//! ```rust
//! use vogel_rs::problem::TransportProblem;
//! use vogel_rs::solver::{Solver, SolverConfiguration, VogelSolver};
//!
//! # fn main() -> Result<(), vogel_rs::solver::SolverError> {
//! let problem = TransportProblem::from_rows(vec![10], vec![4, 6], &[vec![1, 2]])?;
//! let solution = VogelSolver::new().solve(&problem, &SolverConfiguration::default())?;
//!
//! assert_eq!(solution.total_cost, 4 * 1 + 6 * 2);
//! # Ok(())
//! # }
//! ```

use crate::problem::{Allocation, SolverState, TransportProblem};
use crate::solver::methods::penalty::{column_penalties, row_penalties};
use crate::solver::methods::selection::{self, Candidate};
use crate::solver::{BalancePolicy, SelectionRule, Solution, Solver, SolverConfiguration, SolverError};

// =================================================================================================
// Vogel Solver
// =================================================================================================

/// Vogel's Approximation Method
///
/// Stateless: every call to [`solve`](Solver::solve) works on its own
/// [`SolverState`], so one instance can serve any number of problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct VogelSolver;

impl VogelSolver {
    /// Create a new VAM solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use vogel_rs::solver::{Solver, VogelSolver};
    ///
    /// let solver = VogelSolver::new();
    /// assert_eq!(solver.name(), "Vogel's Approximation");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Cell allocated next from `state`, or `None` when no line is open
    ///
    /// Runs both penalty scans and reconciles their strongest lines
    /// under `rule`.
    pub fn next_cell(
        problem: &TransportProblem,
        state: &SolverState,
        rule: SelectionRule,
    ) -> Option<Candidate> {
        let rows = row_penalties(problem, state);
        let cols = column_penalties(problem, state);

        let row = selection::strongest(&rows, rule).map(Candidate::from_row);
        let col = selection::strongest(&cols, rule).map(Candidate::from_column);

        selection::select(row, col, rule, problem.origins(), problem.destinations())
    }
}

impl Solver for VogelSolver {
    fn solve(
        &self,
        problem: &TransportProblem,
        config: &SolverConfiguration,
    ) -> Result<Solution, SolverError> {
        // ====== Step 1: Validation ======

        config.validate(problem)?;

        if config.balance == BalancePolicy::Tolerate && !problem.is_balanced() {
            log::warn!(
                "unbalanced problem (supply {}, demand {}); the residual will stay unshipped",
                problem.total_supply(),
                problem.total_demand()
            );
        }

        // ====== Step 2: Setup ======

        let mut state = SolverState::new(problem);
        let mut allocations: Vec<Allocation> =
            Vec::with_capacity(problem.origins() + problem.destinations());
        let mut total_cost: i64 = 0;

        // ====== Step 3: Allocation loop ======

        while state.is_running() {
            let Some(cell) = Self::next_cell(problem, &state, config.selection) else {
                break;
            };

            let quantity = state.ship(cell.row, cell.col);
            allocations.push(Allocation::new(cell.row, cell.col, quantity));

            total_cost = quantity
                .checked_mul(problem.cost(cell.row, cell.col))
                .and_then(|step| total_cost.checked_add(step))
                .ok_or(SolverError::CostOverflow { allocations: allocations.len() })?;

            log::debug!(
                "step {}: ship {} from origin {} to destination {} (penalty {:?}, unit cost {})",
                allocations.len(),
                quantity,
                cell.row,
                cell.col,
                cell.penalty,
                cell.cost
            );
        }

        log::info!(
            "{} finished after {} allocations, total cost {}",
            self.name(),
            allocations.len(),
            total_cost
        );

        // ====== Step 4: Build Result ======

        let iterations = allocations.len();
        let mut solution = Solution::new(total_cost, allocations, state);

        solution.add_metadata("solver", self.name());
        solution.add_metadata("selection", config.selection.name());
        solution.add_metadata("balance", config.balance.name());
        solution.add_metadata("iterations", &iterations.to_string());

        Ok(solution)
    }

    fn name(&self) -> &'static str {
        "Vogel's Approximation"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
