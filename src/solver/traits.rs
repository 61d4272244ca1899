//! Solver traits and types
//!
//! # Design Philosophy
//!
//! - `SolverConfiguration` says HOW to solve: which selection rule to apply
//!   and how to treat unbalanced problems
//! - `Solver` is the method itself, independent of any particular problem
//! - `Solution` carries the outputs plus free-form metadata for diagnostics
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: STABLE since v0.1.0
//! - `SelectionRule`, `BalancePolicy`: EXTENSIBLE (new variants can be added)
//! - `Solution`: STABLE (fields won't be removed)

use std::collections::HashMap;

use nalgebra::DMatrix;

use crate::problem::{Allocation, SolverState, TransportProblem};
use crate::solver::SolverError;

// =================================================================================================
// Selection Rule
// =================================================================================================

/// How the row-scan and column-scan candidates are reconciled each iteration
///
/// # Variants
///
/// - `ShapeAware` (default): the historical rule of this crate. When the row
///   candidate has the lower penalty it still wins if its cheapest cost is
///   strictly lower than the column candidate's. Otherwise the outcome
///   depends on the matrix shape: with more rows than columns a strictly
///   higher row penalty hands the step to the column candidate.
///
/// - `Textbook`: classical VAM. The line with the single greatest penalty
///   over all open rows and columns wins; ties go to the lower cheapest
///   cost, then to rows, then to the lower index.
///
/// The two rules yield the same cost on most instances but can ship in a
/// different order, and occasionally to different cells, when penalties tie.
///
/// # Example
///
/// ```rust
/// use vogel_rs::solver::SelectionRule;
///
/// assert_eq!(SelectionRule::default(), SelectionRule::ShapeAware);
/// assert_eq!(SelectionRule::Textbook.name(), "Textbook");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionRule {
    /// Cost-first on penalty deficit, shape-dependent otherwise
    #[default]
    ShapeAware,

    /// Global maximum penalty, then lowest cost
    Textbook,
}

impl SelectionRule {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            SelectionRule::ShapeAware => "ShapeAware",
            SelectionRule::Textbook => "Textbook",
        }
    }
}

// =================================================================================================
// Balance Policy
// =================================================================================================

/// Treatment of problems whose total supply differs from total demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BalancePolicy {
    /// Solve anyway and stop as soon as either side is exhausted
    ///
    /// The residual stays visible on [`Solution::final_state`].
    #[default]
    Tolerate,

    /// Reject with [`SolverError::Unbalanced`] before solving
    Strict,
}

impl BalancePolicy {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            BalancePolicy::Tolerate => "Tolerate",
            BalancePolicy::Strict => "Strict",
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a transportation solver
///
/// # Examples
///
/// ```rust
/// use vogel_rs::solver::{BalancePolicy, SelectionRule, SolverConfiguration};
///
/// // Defaults: shape-aware selection, tolerate imbalance
/// let config = SolverConfiguration::default();
/// assert_eq!(config.selection, SelectionRule::ShapeAware);
///
/// // Reject unbalanced problems, use the classical tie-break
/// let config = SolverConfiguration::strict()
///     .with_selection(SelectionRule::Textbook);
/// assert_eq!(config.balance, BalancePolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfiguration {
    /// Reconciliation of row and column candidates
    pub selection: SelectionRule,

    /// Treatment of unbalanced problems
    pub balance: BalancePolicy,
}

impl SolverConfiguration {
    /// Create a configuration from its parts
    pub fn new(selection: SelectionRule, balance: BalancePolicy) -> Self {
        Self { selection, balance }
    }

    /// Default selection, rejecting unbalanced problems
    pub fn strict() -> Self {
        Self::new(SelectionRule::default(), BalancePolicy::Strict)
    }

    /// Builder pattern: set selection rule
    pub fn with_selection(mut self, selection: SelectionRule) -> Self {
        self.selection = selection;
        self
    }

    /// Builder pattern: set balance policy
    pub fn with_balance(mut self, balance: BalancePolicy) -> Self {
        self.balance = balance;
        self
    }

    /// Check `problem` against this configuration
    ///
    /// Runs [`TransportProblem::validate`] and, under
    /// [`BalancePolicy::Strict`], the balance check.
    pub fn validate(&self, problem: &TransportProblem) -> Result<(), SolverError> {
        problem.validate()?;

        if self.balance == BalancePolicy::Strict && !problem.is_balanced() {
            return Err(SolverError::Unbalanced {
                supply: problem.total_supply(),
                demand: problem.total_demand(),
            });
        }

        Ok(())
    }
}

// =================================================================================================
// Solution
// =================================================================================================

/// Result of a solve
///
/// - `total_cost`: Σ quantity × unit cost over all allocations
/// - `allocations`: the shipping plan, in the order it was built
/// - `final_state`: remaining quantities and closed lines after the last step
/// - `metadata`: solver name, selection rule, iteration count, ...
#[derive(Debug, Clone)]
pub struct Solution {
    pub total_cost: i64,
    pub allocations: Vec<Allocation>,
    pub final_state: SolverState,
    pub metadata: HashMap<String, String>,
}

impl Solution {
    pub fn new(total_cost: i64, allocations: Vec<Allocation>, final_state: SolverState) -> Self {
        Self {
            total_cost,
            allocations,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Number of allocations (iterations)
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Total quantity shipped
    pub fn shipped(&self) -> i64 {
        self.allocations.iter().map(|a| a.quantity).sum()
    }

    /// Dense `origins × destinations` view of the plan
    ///
    /// Cells that never received a shipment are zero.
    pub fn shipping_plan(&self) -> DMatrix<i64> {
        let mut plan = DMatrix::zeros(self.final_state.origins(), self.final_state.destinations());
        for allocation in &self.allocations {
            plan[(allocation.origin, allocation.destination)] += allocation.quantity;
        }
        plan
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Read a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for transportation solvers
///
/// # Responsibility
///
/// Build an initial feasible shipping plan for a problem. Implementations
/// must validate before allocating and must not mutate the problem.
pub trait Solver {
    /// Solve `problem` under `config`
    fn solve(
        &self,
        problem: &TransportProblem,
        config: &SolverConfiguration,
    ) -> Result<Solution, SolverError>;

    /// Name of the method (used for display and metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
