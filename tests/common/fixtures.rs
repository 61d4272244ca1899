//! Problem fixtures for integration tests
//!
//! Hand-written instances with known results, plus a small deterministic
//! generator for property-style tests.

use vogel_rs::problem::TransportProblem;

// =================================================================================================
// Known instances
// =================================================================================================

/// 3 origins × 4 destinations, balanced at 35 units
///
/// VAM (shape-aware rule) ships at a total cost of 166.
pub fn textbook_problem() -> TransportProblem {
    TransportProblem::from_rows(
        vec![14, 16, 5],
        vec![6, 10, 15, 4],
        &[
            vec![2, 3, 11, 7],
            vec![1, 0, 6, 1],
            vec![5, 8, 15, 9],
        ],
    ).unwrap()
}

// =================================================================================================
// Deterministic generator
// =================================================================================================

/// Linear congruential generator
///
/// Good enough to spread test instances around; not for anything else.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform-ish integer in `lo..=hi`
    pub fn next_in(&mut self, lo: i64, hi: i64) -> i64 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        lo + ((self.0 >> 33) % (hi - lo + 1) as u64) as i64
    }
}

/// Random `rows × cols` problem
///
/// Supplies and demands are drawn from `0..=40` (zeros included), costs
/// from `0..=20`. When `balanced`, the smaller side is topped up on its
/// last line.
pub fn random_problem(seed: u64, rows: usize, cols: usize, balanced: bool) -> TransportProblem {
    let mut rng = Lcg::new(seed);

    let mut supply: Vec<i64> = (0..rows).map(|_| rng.next_in(0, 40)).collect();
    let mut demand: Vec<i64> = (0..cols).map(|_| rng.next_in(0, 40)).collect();
    let costs: Vec<Vec<i64>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.next_in(0, 20)).collect())
        .collect();

    if balanced {
        let diff: i64 = supply.iter().sum::<i64>() - demand.iter().sum::<i64>();
        if diff > 0 {
            demand[cols - 1] += diff;
        } else {
            supply[rows - 1] -= diff;
        }
    }

    TransportProblem::from_rows(supply, demand, &costs).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_range() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            let value = rng.next_in(3, 9);
            assert!((3..=9).contains(&value));
        }
    }

    #[test]
    fn test_random_problem_balanced() {
        let problem = random_problem(11, 4, 6, true);
        assert!(problem.is_balanced());
        assert!(problem.validate().is_ok());
    }
}
