//! Per-run solver state
//!
//! Holds everything a solve mutates: remaining supply and demand, the
//! closed flag of every row and column, and the running totals that drive
//! the termination condition.

use crate::problem::TransportProblem;

/// Mutable bookkeeping of one solve
///
/// # Invariants
///
/// - A row is closed exactly when its remaining supply is zero, a column
///   exactly when its remaining demand is zero.
/// - Once closed, a line is never reopened.
/// - `supply_left` and `demand_left` always equal the sums of the
///   remaining vectors.
///
/// Lines with an initial supply or demand of zero start closed, so every
/// shipment made through [`ship`](Self::ship) on open lines moves a
/// strictly positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverState {
    remaining_supply: Vec<i64>,
    remaining_demand: Vec<i64>,
    row_closed: Vec<bool>,
    col_closed: Vec<bool>,
    supply_left: i64,
    demand_left: i64,
}

impl SolverState {
    /// Fresh state for `problem`
    ///
    /// Supply and demand are copied; the problem itself is never touched.
    pub fn new(problem: &TransportProblem) -> Self {
        let remaining_supply = problem.supply().to_vec();
        let remaining_demand = problem.demand().to_vec();

        let row_closed = remaining_supply.iter().map(|&s| s == 0).collect();
        let col_closed = remaining_demand.iter().map(|&d| d == 0).collect();

        Self {
            supply_left: remaining_supply.iter().sum(),
            demand_left: remaining_demand.iter().sum(),
            remaining_supply,
            remaining_demand,
            row_closed,
            col_closed,
        }
    }

    /// True while both sides still have something left to ship
    pub fn is_running(&self) -> bool {
        self.supply_left > 0 && self.demand_left > 0
    }

    /// Number of rows tracked
    pub fn origins(&self) -> usize {
        self.remaining_supply.len()
    }

    /// Number of columns tracked
    pub fn destinations(&self) -> usize {
        self.remaining_demand.len()
    }

    pub fn is_row_open(&self, row: usize) -> bool {
        !self.row_closed[row]
    }

    pub fn is_col_open(&self, col: usize) -> bool {
        !self.col_closed[col]
    }

    /// Indices of open rows, ascending
    pub fn open_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.origins()).filter(move |&row| self.is_row_open(row))
    }

    /// Indices of open columns, ascending
    pub fn open_cols(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.destinations()).filter(move |&col| self.is_col_open(col))
    }

    pub fn remaining_supply(&self) -> &[i64] {
        &self.remaining_supply
    }

    pub fn remaining_demand(&self) -> &[i64] {
        &self.remaining_demand
    }

    pub fn row_closed(&self) -> &[bool] {
        &self.row_closed
    }

    pub fn col_closed(&self) -> &[bool] {
        &self.col_closed
    }

    /// Supply not yet shipped
    pub fn supply_left(&self) -> i64 {
        self.supply_left
    }

    /// Demand not yet satisfied
    pub fn demand_left(&self) -> i64 {
        self.demand_left
    }

    /// Ship as much as possible from `row` to `col`
    ///
    /// Moves `min(remaining demand, remaining supply)`, updates both running
    /// totals and closes whichever line (or both) reaches zero. Returns the
    /// shipped quantity.
    pub(crate) fn ship(&mut self, row: usize, col: usize) -> i64 {
        let quantity = self.remaining_demand[col].min(self.remaining_supply[row]);

        self.remaining_demand[col] -= quantity;
        self.remaining_supply[row] -= quantity;
        self.supply_left -= quantity;
        self.demand_left -= quantity;

        if self.remaining_demand[col] == 0 {
            self.col_closed[col] = true;
        }
        if self.remaining_supply[row] == 0 {
            self.row_closed[row] = true;
        }

        quantity
    }
}

// =================================================================================================
// Tests
// =================================================================================================
