//! Export module for shipping plans.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file and nothing else changes.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use vogel_rs::output::export::{CsvExporter, Exporter};
//! use vogel_rs::problem::TransportProblem;
//! use vogel_rs::solver::{Solver, SolverConfiguration, VogelSolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let problem = TransportProblem::from_rows(vec![10], vec![4, 6], &[vec![1, 2]])?;
//! let solution = VogelSolver::new().solve(&problem, &SolverConfiguration::default())?;
//!
//! CsvExporter::default().export_plan(&problem, &solution, "plan.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::problem::TransportProblem;
use crate::solver::Solution;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, which must
/// absorb I/O errors so the provided [`export_plan`](Exporter::export_plan)
/// can propagate them with `?`.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error + From<std::io::Error>;

    /// Writes the shipping plan of `solution` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or if an allocation does not fit
    /// the dimensions of `problem`.
    fn write_plan<W: Write>(
        &self,
        problem: &TransportProblem,
        solution: &Solution,
        writer: &mut W,
    ) -> Result<(), Self::Error>;

    /// Writes the shipping plan to a file at `path`, replacing it.
    fn export_plan<P: AsRef<Path>>(
        &self,
        problem: &TransportProblem,
        solution: &Solution,
        path: P,
    ) -> Result<(), Self::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_plan(problem, solution, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
