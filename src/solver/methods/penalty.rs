//! Penalty scan
//!
//! # Background
//!
//! The penalty (opportunity cost) of a line is the gap between its two
//! cheapest open cells:
//!
//! ```text
//! penalty = min2 - min1
//! ```
//!
//! A large penalty means that missing the cheapest cell of that line would
//! be expensive, so VAM ships there first.
//!
//! Only open cells count: a row is scanned over open columns, a column
//! over open rows. Closed lines never take part in a comparison.
//!
//! # Single open cell
//!
//! A line with one open cell has no second-cheapest cost. Its penalty is
//! [`Penalty::Sole`], which outranks every [`Penalty::Gap`]: a line with no
//! alternative left must be served. Between two `Sole` lines the cheaper
//! one ranks higher.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::problem::{SolverState, TransportProblem};

// =================================================================================================
// Penalty
// =================================================================================================

/// Opportunity cost of a line
///
/// # Ordering
///
/// ```text
/// Gap(0) < Gap(1) < ... < Sole { cost: high } < ... < Sole { cost: low }
/// ```
///
/// # Example
///
/// ```rust
/// use vogel_rs::solver::methods::Penalty;
///
/// assert!(Penalty::Gap(1) < Penalty::Gap(4));
/// assert!(Penalty::Gap(1_000) < Penalty::Sole { cost: 7 });
/// assert!(Penalty::Sole { cost: 7 } < Penalty::Sole { cost: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Penalty {
    /// Difference between the two cheapest open cells (never negative)
    Gap(i64),

    /// Only one open cell remains, at `cost`
    Sole { cost: i64 },
}

impl Ord for Penalty {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Penalty::Gap(a), Penalty::Gap(b)) => a.cmp(b),
            (Penalty::Gap(_), Penalty::Sole { .. }) => Ordering::Less,
            (Penalty::Sole { .. }, Penalty::Gap(_)) => Ordering::Greater,
            (Penalty::Sole { cost: a }, Penalty::Sole { cost: b }) => b.cmp(a),
        }
    }
}

impl PartialOrd for Penalty {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =================================================================================================
// Line penalty
// =================================================================================================

/// Result of scanning one row or column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePenalty {
    /// Index of the scanned line
    pub line: usize,

    /// Index, along the line, of its cheapest open cell
    pub cheapest: usize,

    /// Cost of that cell
    pub min_cost: i64,

    pub penalty: Penalty,
}

/// Scan one line given its open cells as `(index, cost)` in ascending index
///
/// The first index wins among equal minima. Returns `None` when the line has
/// no open cell.
pub fn scan_line(line: usize, cells: impl Iterator<Item = (usize, i64)>) -> Option<LinePenalty> {
    let mut cheapest: Option<(usize, i64)> = None;
    let mut runner_up: Option<i64> = None;

    for (index, cost) in cells {
        match cheapest {
            Some((_, min)) if cost >= min => {
                if runner_up.is_none_or(|second| cost < second) {
                    runner_up = Some(cost);
                }
            }
            _ => {
                runner_up = cheapest.map(|(_, min)| min);
                cheapest = Some((index, cost));
            }
        }
    }

    let (cheapest, min_cost) = cheapest?;
    let penalty = match runner_up {
        Some(second) => Penalty::Gap(second - min_cost),
        None => Penalty::Sole { cost: min_cost },
    };

    Some(LinePenalty { line, cheapest, min_cost, penalty })
}

/// Penalties of every open row, in row order
pub fn row_penalties(problem: &TransportProblem, state: &SolverState) -> Vec<LinePenalty> {
    let rows: Vec<usize> = state.open_rows().collect();
    collect_penalties(rows, |row| {
        scan_line(row, state.open_cols().map(|col| (col, problem.cost(row, col))))
    })
}

/// Penalties of every open column, in column order
pub fn column_penalties(problem: &TransportProblem, state: &SolverState) -> Vec<LinePenalty> {
    let cols: Vec<usize> = state.open_cols().collect();
    collect_penalties(cols, |col| {
        scan_line(col, state.open_rows().map(|row| (row, problem.cost(row, col))))
    })
}

/// Evaluate `scan` on every line, keeping line order
///
/// With the `parallel` feature, lists at or above
/// [`parallel_threshold()`](crate::solver::parallel_threshold) are scanned
/// on the rayon pool.
fn collect_penalties<F>(lines: Vec<usize>, scan: F) -> Vec<LinePenalty>
where
    F: Fn(usize) -> Option<LinePenalty> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if lines.len() >= crate::solver::parallel_threshold() {
            return lines.par_iter().filter_map(|&line| scan(line)).collect();
        }
    }

    lines.into_iter().filter_map(scan).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
