//! Helper functions for integration tests

use vogel_rs::problem::TransportProblem;
use vogel_rs::solver::Solution;

/// Allocations as `(origin, destination, quantity)` tuples
pub fn plan_tuples(solution: &Solution) -> Vec<(usize, usize, i64)> {
    solution
        .allocations
        .iter()
        .map(|a| (a.origin, a.destination, a.quantity))
        .collect()
}

/// Replay `solution` against `problem` and check every step
///
/// At each step the quantity must be positive and equal to
/// `min(remaining supply, remaining demand)`, and neither line may already
/// be closed. The replayed end state and total cost must match the
/// solution.
pub fn assert_replays(problem: &TransportProblem, solution: &Solution) {
    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut row_closed: Vec<bool> = supply.iter().map(|&s| s == 0).collect();
    let mut col_closed: Vec<bool> = demand.iter().map(|&d| d == 0).collect();
    let mut total_cost = 0;

    for (step, allocation) in solution.allocations.iter().enumerate() {
        let (o, d) = (allocation.origin, allocation.destination);

        assert!(!row_closed[o], "step {}: origin {} was already closed", step, o);
        assert!(!col_closed[d], "step {}: destination {} was already closed", step, d);

        let expected = supply[o].min(demand[d]);
        assert_eq!(allocation.quantity, expected, "step {}: wrong quantity", step);
        assert!(allocation.quantity > 0, "step {}: empty allocation", step);

        supply[o] -= allocation.quantity;
        demand[d] -= allocation.quantity;
        row_closed[o] |= supply[o] == 0;
        col_closed[d] |= demand[d] == 0;
        total_cost += allocation.quantity * problem.cost(o, d);
    }

    assert_eq!(solution.final_state.remaining_supply(), supply.as_slice());
    assert_eq!(solution.final_state.remaining_demand(), demand.as_slice());
    assert_eq!(solution.final_state.row_closed(), row_closed.as_slice());
    assert_eq!(solution.final_state.col_closed(), col_closed.as_slice());
    assert_eq!(solution.total_cost, total_cost);
}
