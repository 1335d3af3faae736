//! Report Generator
//!
//! Consumes the result store's query interface and renders artifacts:
//!
//! - **summary**: human-readable statistics summary for the terminal
//! - **export**: per-node CSV series and a JSON statistics dump
//!
//! The generator only ever reads derived statistics and series; it never
//! touches the raw index. Configuration is passed in at construction, no
//! module-level constants.

pub mod export;
pub mod summary;

pub use export::ReportGenerator;
pub use summary::render_summary;

use std::path::PathBuf;
use thiserror::Error;

/// A metric to report on, with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLabel {
    /// Metric name as recorded in the scalar files,
    /// e.g. `routeDiscovered:count`
    pub key: String,
    /// Human-readable label, e.g. `Routes Discovered`
    pub label: String,
}

impl MetricLabel {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Report generator configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory to write artifacts into (created if missing)
    pub output_dir: PathBuf,
    /// Metrics to report on, in display order
    pub metrics: Vec<MetricLabel>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("analysis"),
            metrics: default_metrics(),
        }
    }
}

/// The routing metrics the study cares about by default
pub fn default_metrics() -> Vec<MetricLabel> {
    vec![
        MetricLabel::new("routeDiscovered:count", "Routes Discovered"),
        MetricLabel::new("packetRouted:count", "Packets Routed"),
        MetricLabel::new("routeDiscovered:sum", "Total Route Discoveries"),
        MetricLabel::new("packetRouted:sum", "Total Packets Routed"),
    ]
}

/// Errors that can occur while rendering reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Output directory or artifact file could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV artifact write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON artifact write failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;
