//! Cell selection
//!
//! Turns the penalty scans of one iteration into the single cell that is
//! allocated next. Each scan direction contributes one [`Candidate`]; the
//! configured [`SelectionRule`] decides between them.

use std::cmp::Reverse;

use crate::solver::SelectionRule;
use crate::solver::methods::penalty::{LinePenalty, Penalty};

/// A cell proposed by one scan direction: `(row, col, cost, penalty)`
///
/// Row-scan and column-scan candidates share this layout so they can be
/// compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,

    /// Unit cost of the cell (the cheapest open cost of its line)
    pub cost: i64,

    /// Penalty of the line that proposed the cell
    pub penalty: Penalty,
}

impl Candidate {
    /// Candidate proposed by a row scan
    pub fn from_row(scan: &LinePenalty) -> Self {
        Self { row: scan.line, col: scan.cheapest, cost: scan.min_cost, penalty: scan.penalty }
    }

    /// Candidate proposed by a column scan
    pub fn from_column(scan: &LinePenalty) -> Self {
        Self { row: scan.cheapest, col: scan.line, cost: scan.min_cost, penalty: scan.penalty }
    }
}

/// Line with the greatest penalty under `rule`
///
/// Earlier lines win ties. Under [`SelectionRule::Textbook`] equal penalties
/// are first separated by the lower cheapest cost.
pub fn strongest(scans: &[LinePenalty], rule: SelectionRule) -> Option<&LinePenalty> {
    let rank = |scan: &LinePenalty| match rule {
        SelectionRule::ShapeAware => (scan.penalty, Reverse(0)),
        SelectionRule::Textbook => (scan.penalty, Reverse(scan.min_cost)),
    };

    scans.iter().fold(None, |best, scan| match best {
        Some(current) if rank(scan) <= rank(current) => Some(current),
        _ => Some(scan),
    })
}

/// Pick the cell to allocate from the row and column candidates
///
/// `origins` and `destinations` are the problem dimensions, used by the
/// shape-aware rule. A missing candidate (no open line in that direction)
/// defers to the other; with neither, nothing can be allocated.
pub fn select(
    row: Option<Candidate>,
    col: Option<Candidate>,
    rule: SelectionRule,
    origins: usize,
    destinations: usize,
) -> Option<Candidate> {
    match (row, col) {
        (Some(r), Some(c)) => Some(match rule {
            SelectionRule::ShapeAware => shape_aware(r, c, origins, destinations),
            SelectionRule::Textbook => textbook(r, c),
        }),
        (Some(r), None) => Some(r),
        (None, Some(c)) => Some(c),
        (None, None) => None,
    }
}

fn shape_aware(r: Candidate, c: Candidate, origins: usize, destinations: usize) -> Candidate {
    if r.penalty < c.penalty {
        return if r.cost < c.cost { r } else { c };
    }

    if origins > destinations {
        if r.penalty > c.penalty { c } else { r }
    } else if r.penalty < c.penalty {
        c
    } else {
        r
    }
}

fn textbook(r: Candidate, c: Candidate) -> Candidate {
    if (c.penalty, Reverse(c.cost)) > (r.penalty, Reverse(r.cost)) { c } else { r }
}

// =================================================================================================
// Tests
// =================================================================================================
