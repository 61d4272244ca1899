//! CSV export of shipping plans
//!
//! Writes one line per allocation, in the order the solver produced them,
//! so the file doubles as a trace of the run. Compatible with spreadsheets,
//! pandas and most data analysis tools.
//!
//! # Features
//!
//! - **Plan columns**: origin, destination, quantity, unit cost, cell cost
//! - **Metadata support**: optional `#` comment header with solver details
//! - **Customizable**: delimiter and column headers
//! - **Validation**: allocations outside the problem are rejected
//!
//! # Quick Example
//!
//! ```rust
//! use vogel_rs::output::export::{CsvExporter, Exporter};
//! use vogel_rs::solver::solve_transport;
//! use vogel_rs::problem::TransportProblem;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let problem = TransportProblem::from_rows(vec![10], vec![4, 6], &[vec![1, 2]])?;
//! let solution = solve_transport(&[10], &[4, 6], &[vec![1, 2]])?;
//!
//! let mut buffer = Vec::new();
//! CsvExporter::default().write_plan(&problem, &solution, &mut buffer)?;
//!
//! assert_eq!(
//!     String::from_utf8(buffer)?,
//!     "origin,destination,quantity,unit_cost,cost\n0,0,4,1,4\n0,1,6,2,12\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! **With metadata** the plan is preceded by:
//!
//! ```text
//! # Transportation Plan
//! # Generated: 2026-10-18T09:30:00+00:00
//! # Problem: textbook
//! # Solver: Vogel's Approximation
//! # Selection: ShapeAware
//! # Total Cost: 166
//! # Shipped: 35
//! #
//! ```

use std::io::Write;

use thiserror::Error;

use crate::output::export::Exporter;
use crate::problem::TransportProblem;
use crate::solver::Solution;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while exporting a plan to CSV
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to write CSV: {0}")]
    Io(#[from] std::io::Error),

    /// Allocation at `position` does not fit the problem dimensions
    #[error("allocation {position} ({origin} -> {destination}) lies outside the problem")]
    ForeignAllocation {
        position: usize,
        origin: usize,
        destination: usize,
    },
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use vogel_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';');
/// assert_eq!(config.delimiter, ';');
/// assert!(!config.include_metadata);
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Column headers, in column order
    pub headers: [String; 5],
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_metadata: false,
            metadata: None,
            headers: [
                "origin".to_string(),
                "destination".to_string(),
                "quantity".to_string(),
                "unit_cost".to_string(),
                "cost".to_string(),
            ],
        }
    }
}

impl CsvConfig {
    /// Semicolon-separated output, as expected by European spreadsheets
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-`None` fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Free-form problem label
    pub problem_name: Option<String>,

    /// Solver name (e.g. "Vogel's Approximation")
    pub solver_name: Option<String>,

    /// Selection rule used
    pub selection: Option<String>,

    /// Total cost of the plan
    pub total_cost: Option<i64>,

    /// Total quantity shipped
    pub shipped: Option<i64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing `solution`
    ///
    /// Solver name and selection rule are read from the solution metadata.
    pub fn from_solution(problem_name: &str, solution: &Solution) -> Self {
        Self {
            problem_name: Some(problem_name.to_string()),
            solver_name: solution.get_metadata("solver").map(str::to_string),
            selection: solution.get_metadata("selection").map(str::to_string),
            total_cost: Some(solution.total_cost),
            shipped: Some(solution.shipped()),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(writer, "# Transportation Plan")?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(name) = &metadata.problem_name {
        writeln!(writer, "# Problem: {}", name)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(writer, "# Solver: {}", solver)?;
    }
    if let Some(selection) = &metadata.selection {
        writeln!(writer, "# Selection: {}", selection)?;
    }
    if let Some(total_cost) = metadata.total_cost {
        writeln!(writer, "# Total Cost: {}", total_cost)?;
    }
    if let Some(shipped) = metadata.shipped {
        writeln!(writer, "# Shipped: {}", shipped)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn write_plan<W: Write>(
        &self,
        problem: &TransportProblem,
        solution: &Solution,
        writer: &mut W,
    ) -> Result<(), CsvError> {
        // ============================= Validation =============================

        let foreign = solution.allocations.iter().position(|a| {
            a.origin >= problem.origins() || a.destination >= problem.destinations()
        });
        if let Some(position) = foreign {
            let allocation = solution.allocations[position];
            return Err(CsvError::ForeignAllocation {
                position,
                origin: allocation.origin,
                destination: allocation.destination,
            });
        }

        let delimiter = self.config.delimiter.to_string();

        // ============================= Write Metadata =========================

        if self.config.include_metadata
            && let Some(metadata) = &self.config.metadata
        {
            write_metadata_header(writer, metadata)?;
        }

        // ============================= Write Data =============================

        writeln!(writer, "{}", self.config.headers.join(delimiter.as_str()))?;

        for allocation in &solution.allocations {
            let fields = [
                allocation.origin.to_string(),
                allocation.destination.to_string(),
                allocation.quantity.to_string(),
                allocation.unit_cost(problem).to_string(),
                allocation.cost(problem).to_string(),
            ];
            writeln!(writer, "{}", fields.join(delimiter.as_str()))?;
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Allocation;
    use crate::solver::{Solver, SolverConfiguration, VogelSolver};
    use std::fs;
    use tempfile::NamedTempFile;

    fn textbook() -> (TransportProblem, Solution) {
        let problem = TransportProblem::from_rows(
            vec![14, 16, 5],
            vec![6, 10, 15, 4],
            &[
                vec![2, 3, 11, 7],
                vec![1, 0, 6, 1],
                vec![5, 8, 15, 9],
            ],
        ).unwrap();
        let solution = VogelSolver::new().solve(&problem, &SolverConfiguration::default()).unwrap();
        (problem, solution)
    }

    fn render(exporter: &CsvExporter, problem: &TransportProblem, solution: &Solution) -> String {
        let mut buffer = Vec::new();
        exporter.write_plan(problem, solution, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_export() {
        let (problem, solution) = textbook();
        let csv = render(&CsvExporter::default(), &problem, &solution);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "origin,destination,quantity,unit_cost,cost");
        assert_eq!(lines[1], "1,3,4,1,4");
        assert_eq!(lines[5], "1,2,12,6,72");

        let total: i64 = lines[1..]
            .iter()
            .map(|line| line.rsplit(',').next().unwrap().parse::<i64>().unwrap())
            .sum();
        assert_eq!(total, solution.total_cost);
    }

    #[test]
    fn test_european_delimiter() {
        let (problem, solution) = textbook();
        let csv = render(&CsvExporter::new(CsvConfig::european()), &problem, &solution);

        assert!(csv.starts_with("origin;destination;quantity;unit_cost;cost\n1;3;4;1;4\n"));
    }

    #[test]
    fn test_metadata_header() {
        let (problem, solution) = textbook();
        let mut metadata = CsvMetadata::from_solution("textbook", &solution);
        metadata.add_custom("origins".to_string(), "3".to_string());

        let exporter = CsvExporter::new(CsvConfig::default().with_metadata(metadata));
        let csv = render(&exporter, &problem, &solution);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "# Transportation Plan");
        assert!(lines[1].starts_with("# Generated: "));
        assert_eq!(lines[2], "# Problem: textbook");
        assert_eq!(lines[3], "# Solver: Vogel's Approximation");
        assert_eq!(lines[4], "# Selection: ShapeAware");
        assert_eq!(lines[5], "# Total Cost: 166");
        assert_eq!(lines[6], "# Shipped: 35");
        assert_eq!(lines[7], "# origins: 3");
        assert_eq!(lines[8], "#");
        assert_eq!(lines[9], "origin,destination,quantity,unit_cost,cost");
    }

    #[test]
    fn test_metadata_ignored_when_disabled() {
        let (problem, solution) = textbook();
        let mut config = CsvConfig::default().with_metadata(CsvMetadata::default());
        config.include_metadata = false;

        let csv = render(&CsvExporter::new(config), &problem, &solution);
        assert!(csv.starts_with("origin,"));
    }

    #[test]
    fn test_foreign_allocation_rejected() {
        let (problem, mut solution) = textbook();
        solution.allocations.push(Allocation::new(3, 0, 1));

        let mut buffer = Vec::new();
        let error = CsvExporter::default()
            .write_plan(&problem, &solution, &mut buffer)
            .unwrap_err();

        assert!(matches!(
            error,
            CsvError::ForeignAllocation { position: 6, origin: 3, destination: 0 }
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_export_to_file() {
        let (problem, solution) = textbook();
        let file = NamedTempFile::new().unwrap();

        CsvExporter::default().export_plan(&problem, &solution, file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.lines().count(), 7);
        assert!(content.ends_with("0,2,3,11,33\n"));
    }
}
