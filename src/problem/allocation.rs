//! Allocation records

use std::fmt;

use crate::problem::TransportProblem;

/// One shipment of the plan: `quantity` units from `origin` to `destination`
///
/// A solve appends one allocation per iteration; the ordered list is the
/// shipping plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allocation {
    /// Origin (row) index
    pub origin: usize,

    /// Destination (column) index
    pub destination: usize,

    /// Units shipped, always positive
    pub quantity: i64,
}

impl Allocation {
    pub fn new(origin: usize, destination: usize, quantity: i64) -> Self {
        Self { origin, destination, quantity }
    }

    /// Unit cost of this cell in `problem`
    pub fn unit_cost(&self, problem: &TransportProblem) -> i64 {
        problem.cost(self.origin, self.destination)
    }

    /// Cost contributed by this shipment (`quantity × unit cost`)
    pub fn cost(&self, problem: &TransportProblem) -> i64 {
        self.quantity * self.unit_cost(problem)
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.origin, self.destination, self.quantity)
    }
}
