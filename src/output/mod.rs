//! Output module for solutions
//!
//! Tools to take a shipping plan out of the process for external analysis.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── export/             ← Data export
//!     ├── mod.rs          ← Exporter trait
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vogel_rs::output::{CsvExporter, Exporter};
//!
//! CsvExporter::default().export_plan(&problem, &solution, "plan.csv")?;
//! ```

pub mod export;

// Re-export commonly used items for convenience
pub use export::{
    CsvConfig,
    CsvError,
    CsvExporter,
    CsvMetadata,
    Exporter,
};
