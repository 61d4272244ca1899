//! Solver errors

use thiserror::Error;

use crate::problem::Entry;

/// Errors raised by problem validation and by solvers
///
/// Validation errors (`DimensionMismatch`, `NegativeValue`,
/// `QuantityOverflow`, `Unbalanced`)
/// are always reported before the first allocation is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Cost matrix shape differs from `len(supply) × len(demand)`
    #[error(
        "cost matrix is {rows}x{cols} but supply and demand describe a \
         {expected_rows}x{expected_cols} problem"
    )]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// A supply, demand or cost value is negative
    #[error("{entry} is negative ({value})")]
    NegativeValue { entry: Entry, value: i64 },

    /// Summing supplies or demands overflows an `i64` at `entry`
    #[error("adding the {entry} overflows the total")]
    QuantityOverflow { entry: Entry },

    /// Total supply differs from total demand (strict balance policy only)
    #[error("total supply {supply} does not match total demand {demand}")]
    Unbalanced { supply: i64, demand: i64 },

    /// The accumulated cost no longer fits in an `i64`
    #[error("total cost overflowed after {allocations} allocations")]
    CostOverflow { allocations: usize },
}
