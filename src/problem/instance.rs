//! Transportation problem instance
//!
//! A `TransportProblem` owns the supply vector, the demand vector and the
//! cost matrix. It is a plain value: built once, validated, then borrowed
//! immutably by every solve.

use std::fmt;

use nalgebra::DMatrix;

use crate::solver::SolverError;

// =================================================================================================
// Entry (location of a value inside a problem)
// =================================================================================================

/// Location of a single value inside a [`TransportProblem`]
///
/// Used by validation errors to point at the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// Supply of origin `i`
    Supply(usize),

    /// Demand of destination `j`
    Demand(usize),

    /// Unit cost from origin `i` to destination `j`
    Cost(usize, usize),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Supply(i) => write!(f, "supply of origin {}", i),
            Entry::Demand(j) => write!(f, "demand of destination {}", j),
            Entry::Cost(i, j) => write!(f, "cost from origin {} to destination {}", i, j),
        }
    }
}

// =================================================================================================
// Transport Problem
// =================================================================================================

/// Transportation problem instance
///
/// # Layout
///
/// - `supply[i]`: units available at origin `i`
/// - `demand[j]`: units required at destination `j`
/// - `costs[(i, j)]`: cost per unit shipped from origin `i` to destination `j`
///
/// The cost matrix must be `supply.len() × demand.len()`; this is checked by
/// [`validate`](TransportProblem::validate), which every solver calls before
/// doing any allocation work.
///
/// # Example
///
/// ```rust
/// use nalgebra::DMatrix;
/// use vogel_rs::problem::TransportProblem;
///
/// let problem = TransportProblem::new(
///     vec![20, 30],
///     vec![25, 25],
///     DMatrix::from_row_slice(2, 2, &[4, 6, 5, 3]),
/// );
///
/// assert_eq!(problem.origins(), 2);
/// assert_eq!(problem.destinations(), 2);
/// assert_eq!(problem.cost(1, 0), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportProblem {
    supply: Vec<i64>,
    demand: Vec<i64>,
    costs: DMatrix<i64>,
}

impl TransportProblem {
    /// Create a problem from a supply vector, a demand vector and a cost matrix
    ///
    /// No check is performed here; see [`validate`](Self::validate).
    pub fn new(supply: Vec<i64>, demand: Vec<i64>, costs: DMatrix<i64>) -> Self {
        Self { supply, demand, costs }
    }

    /// Create a problem from row-major nested cost rows
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] when the rows are ragged.
    /// A rectangular matrix whose shape disagrees with `supply`/`demand` is
    /// accepted here and reported by [`validate`](Self::validate).
    pub fn from_rows(
        supply: Vec<i64>,
        demand: Vec<i64>,
        rows: &[Vec<i64>],
    ) -> Result<Self, SolverError> {
        let width = rows.first().map_or(demand.len(), Vec::len);

        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(SolverError::DimensionMismatch {
                expected_rows: supply.len(),
                expected_cols: demand.len(),
                rows: rows.len(),
                cols: ragged.len(),
            });
        }

        let costs = DMatrix::from_fn(rows.len(), width, |i, j| rows[i][j]);
        Ok(Self::new(supply, demand, costs))
    }

    /// Number of origins (rows)
    pub fn origins(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations (columns)
    pub fn destinations(&self) -> usize {
        self.demand.len()
    }

    /// Supply per origin
    pub fn supply(&self) -> &[i64] {
        &self.supply
    }

    /// Demand per destination
    pub fn demand(&self) -> &[i64] {
        &self.demand
    }

    /// Full cost matrix
    pub fn costs(&self) -> &DMatrix<i64> {
        &self.costs
    }

    /// Unit cost from `origin` to `destination`
    pub fn cost(&self, origin: usize, destination: usize) -> i64 {
        self.costs[(origin, destination)]
    }

    /// Sum of all supplies
    pub fn total_supply(&self) -> i64 {
        self.supply.iter().sum()
    }

    /// Sum of all demands
    pub fn total_demand(&self) -> i64 {
        self.demand.iter().sum()
    }

    /// True when total supply equals total demand
    pub fn is_balanced(&self) -> bool {
        self.total_supply() == self.total_demand()
    }

    /// Check shape and sign of every value
    ///
    /// Checks run in order: matrix shape, then supplies, demands and costs
    /// (row-major), then the supply and demand totals. The first violation
    /// is returned. Once this passes, [`total_supply`](Self::total_supply)
    /// and [`total_demand`](Self::total_demand) cannot overflow.
    ///
    /// Balance is not checked here; it is a solver policy
    /// (see [`BalancePolicy`](crate::solver::BalancePolicy)).
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.costs.nrows() != self.origins() || self.costs.ncols() != self.destinations() {
            return Err(SolverError::DimensionMismatch {
                expected_rows: self.origins(),
                expected_cols: self.destinations(),
                rows: self.costs.nrows(),
                cols: self.costs.ncols(),
            });
        }

        if let Some((i, &value)) = self.supply.iter().enumerate().find(|(_, v)| **v < 0) {
            return Err(SolverError::NegativeValue { entry: Entry::Supply(i), value });
        }

        if let Some((j, &value)) = self.demand.iter().enumerate().find(|(_, v)| **v < 0) {
            return Err(SolverError::NegativeValue { entry: Entry::Demand(j), value });
        }

        for i in 0..self.origins() {
            for j in 0..self.destinations() {
                let value = self.cost(i, j);
                if value < 0 {
                    return Err(SolverError::NegativeValue { entry: Entry::Cost(i, j), value });
                }
            }
        }

        checked_total(&self.supply, Entry::Supply)?;
        checked_total(&self.demand, Entry::Demand)?;

        Ok(())
    }
}

/// Sum of `values`, or the entry whose addition overflows
fn checked_total(values: &[i64], entry: fn(usize) -> Entry) -> Result<i64, SolverError> {
    values.iter().enumerate().try_fold(0i64, |total, (index, &value)| {
        total
            .checked_add(value)
            .ok_or(SolverError::QuantityOverflow { entry: entry(index) })
    })
}

// =================================================================================================
// Tests
// =================================================================================================
