//! # Swarmscope
//!
//! Scalar-result aggregation and reporting for drone swarm routing
//! simulations.
//!
//! Ingests the loosely structured, line-oriented scalar files a
//! discrete-event network simulator writes per run, groups every scalar by
//! metric name and originating node, and answers aggregate-statistics
//! queries with pinned-down semantics over the possibly ragged multi-run
//! data. A report layer renders text summaries and CSV/JSON artifacts from
//! the query interface.
//!
//! ## Modules
//!
//! - [`store`]: the result store: parsing, indexing and statistics
//! - [`select`]: results-directory scanning and `.sca` file selection
//! - [`report`]: summary rendering and artifact export
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swarmscope::report::{default_metrics, render_summary};
//! use swarmscope::select::select_sca_files;
//! use swarmscope::store::ResultStore;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let files = select_sca_files(Path::new("simulations/results"), None)?;
//!
//!     let mut store = ResultStore::new();
//!     let batch = store.ingest_all(&files)?;
//!     println!("{}", batch);
//!
//!     print!("{}", render_summary(&store, &default_metrics()));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod report;
pub mod select;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    BatchSummary, FileSummary, MetricStats, NodeIdExtractor, ResultStore, ScalarRecord,
    StoreError, StoreResult,
};

pub use select::{sca_pattern, select_sca_files};

pub use report::{
    default_metrics, render_summary, MetricLabel, ReportConfig, ReportError, ReportGenerator,
    ReportResult,
};

pub use config::{Config, ConfigError, LoggingConfig, ResultsConfig};
