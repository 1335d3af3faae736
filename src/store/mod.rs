//! Result Store
//!
//! The core of swarmscope: parses loosely structured scalar-result files
//! into an in-memory index keyed by metric name and node identity, and
//! answers aggregate-statistics queries over it.
//!
//! - **record**: line parsing and node-identity extraction
//! - **index**: nested metric → node → value-sequence accumulation
//! - **stats**: descriptive statistics with pinned-down semantics
//! - **engine**: the [`ResultStore`] orchestrating ingestion and queries
//! - **error**: error types
//!
//! # Example
//!
//! ```rust,no_run
//! use swarmscope::store::ResultStore;
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = ResultStore::new();
//!     let files = vec![PathBuf::from("results/DroneSwarm5km-0.sca")];
//!     let batch = store.ingest_all(&files)?;
//!     println!("{}", batch);
//!
//!     if let Some(stats) = store.statistics_for("routeDiscovered:count") {
//!         println!("mean routes discovered: {:.2}", stats.mean);
//!     }
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod index;
pub mod record;
pub mod stats;

// Re-export commonly used types
pub use engine::{BatchSummary, FileSummary, ResultStore};
pub use error::{StoreError, StoreResult};
pub use index::ResultIndex;
pub use record::{parse_scalar_line, NodeIdExtractor, ScalarRecord};
pub use stats::{mean, median, population_std_dev, MetricStats};
