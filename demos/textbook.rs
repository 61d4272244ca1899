//! Example: Textbook transportation problem
//!
//! Three plants ship to four warehouses. Solves the problem with both
//! selection rules, prints each allocation step and the resulting
//! shipping plan, then exports the default plan to CSV.
//!
//! **Problem**:
//! - Supply: 14, 16, 5 (35 units)
//! - Demand: 6, 10, 15, 4 (35 units)
//! - Unit costs:
//!
//! ```text
//!          W0  W1  W2  W3
//!   P0      2   3  11   7
//!   P1      1   0   6   1
//!   P2      5   8  15   9
//! ```

use vogel_rs::{
    output::{CsvConfig, CsvExporter, CsvMetadata, Exporter},
    problem::TransportProblem,
    solver::{SelectionRule, Solution, Solver, SolverConfiguration, VogelSolver},
};

fn print_solution(problem: &TransportProblem, solution: &Solution) {
    println!("{:<6} {:<8} {:<12} {:>8} {:>10} {:>8}", "Step", "Origin", "Destination", "Units", "Unit cost", "Cost");
    println!("{:-<57}", "");

    for (step, allocation) in solution.allocations.iter().enumerate() {
        println!(
            "{:<6} {:<8} {:<12} {:>8} {:>10} {:>8}",
            step + 1,
            allocation.origin,
            allocation.destination,
            allocation.quantity,
            allocation.unit_cost(problem),
            allocation.cost(problem)
        );
    }

    println!("\nShipping plan:{}", solution.shipping_plan());
    println!("Total cost: {}\n", solution.total_cost);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Vogel's Approximation Method - Textbook Problem");
    println!("═══════════════════════════════════════════════════════\n");

    let problem = TransportProblem::from_rows(
        vec![14, 16, 5],
        vec![6, 10, 15, 4],
        &[
            vec![2, 3, 11, 7],
            vec![1, 0, 6, 1],
            vec![5, 8, 15, 9],
        ],
    )?;

    println!("Problem:");
    println!("  Origins      : {}", problem.origins());
    println!("  Destinations : {}", problem.destinations());
    println!("  Total supply : {}", problem.total_supply());
    println!("  Total demand : {}", problem.total_demand());
    println!("  Costs        :{}", problem.costs());

    // ====== Solve with both rules ======

    let solver = VogelSolver::new();
    let mut solutions = Vec::new();

    for rule in [SelectionRule::ShapeAware, SelectionRule::Textbook] {
        let config = SolverConfiguration::strict().with_selection(rule);
        let solution = solver.solve(&problem, &config)?;

        println!("═══════════════════════════════════════════════════════");
        println!("  Selection rule: {}", rule.name());
        println!("═══════════════════════════════════════════════════════\n");
        print_solution(&problem, &solution);

        solutions.push(solution);
    }

    // ====== Export ======

    let solution = &solutions[0];
    let mut metadata = CsvMetadata::from_solution("textbook", solution);
    metadata.add_custom("origins".to_string(), problem.origins().to_string());
    metadata.add_custom("destinations".to_string(), problem.destinations().to_string());

    let exporter = CsvExporter::new(CsvConfig::default().with_metadata(metadata));
    let path = std::env::temp_dir().join("vogel_textbook_plan.csv");
    exporter.export_plan(&problem, solution, &path)?;

    println!("Plan exported to {}", path.display());

    Ok(())
}
