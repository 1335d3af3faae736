//! Artifact export
//!
//! Writes machine-readable artifacts under the configured output
//! directory:
//!
//! - `<metric>_per_node.csv`: raw ragged per-node value sequences
//! - `<metric>_node_summary.csv`: per-node sample count, mean and spread
//! - `stats.json`: flattened statistics for every configured metric
//!
//! Per-node rows stay ragged on purpose; padding runs that never happened
//! would fabricate data.

use crate::report::{MetricLabel, ReportConfig, ReportResult};
use crate::store::{population_std_dev, MetricStats, ResultStore};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;

/// Top-level structure of `stats.json`
#[derive(Debug, Serialize)]
struct StatsDump {
    generated_at: String,
    metrics: BTreeMap<String, MetricStats>,
}

/// Renders artifacts from a populated result store
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Write all artifacts, returning the paths written
    ///
    /// Metrics with no data produce no per-metric files and no `stats.json`
    /// entry. Creates the output directory if needed.
    pub fn generate(&self, store: &ResultStore) -> ReportResult<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let mut written = Vec::new();
        let mut dump = StatsDump {
            generated_at: Utc::now().to_rfc3339(),
            metrics: BTreeMap::new(),
        };

        for metric in &self.config.metrics {
            let Some(stats) = store.statistics_for(&metric.key) else {
                tracing::debug!("No data for metric {}, skipping", metric.key);
                continue;
            };
            dump.metrics.insert(metric.key.clone(), stats);

            written.push(self.write_per_node_csv(store, metric)?);
            written.push(self.write_node_summary_csv(store, metric)?);
        }

        if !dump.metrics.is_empty() {
            let path = self.config.output_dir.join("stats.json");
            serde_json::to_writer_pretty(File::create(&path)?, &dump)?;
            written.push(path);
        }

        Ok(written)
    }

    /// One row per node: `node,run_0,run_1,...`, ragged where runs are
    /// missing
    fn write_per_node_csv(
        &self,
        store: &ResultStore,
        metric: &MetricLabel,
    ) -> ReportResult<PathBuf> {
        let series = store.per_node_series(&metric.key);
        let max_runs = series.iter().map(|(_, v)| v.len()).max().unwrap_or(0);

        let path = self
            .config
            .output_dir
            .join(format!("{}_per_node.csv", artifact_stem(&metric.key)));

        let mut writer = csv::WriterBuilder::new().flexible(true).from_path(&path)?;

        let mut header = vec!["node".to_string()];
        header.extend((0..max_runs).map(|i| format!("run_{}", i)));
        writer.write_record(&header)?;

        for (node, values) in &series {
            let mut row = vec![node.to_string()];
            row.extend(values.iter().map(|v| v.to_string()));
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(path)
    }

    /// One row per node: sample count, mean and population spread
    /// (a single-sample node reports spread 0)
    fn write_node_summary_csv(
        &self,
        store: &ResultStore,
        metric: &MetricLabel,
    ) -> ReportResult<PathBuf> {
        let path = self
            .config
            .output_dir
            .join(format!("{}_node_summary.csv", artifact_stem(&metric.key)));

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["node", "samples", "mean", "std_dev"])?;

        for (node, values) in store.per_node_series(&metric.key) {
            writer.write_record(&[
                node.to_string(),
                values.len().to_string(),
                format!("{:.6}", crate::store::mean(values)),
                format!("{:.6}", population_std_dev(values)),
            ])?;
        }

        writer.flush()?;
        Ok(path)
    }
}

/// Metric key turned into a file-name-safe stem
/// (`routeDiscovered:count` → `routeDiscovered_count`)
fn artifact_stem(metric_key: &str) -> String {
    metric_key
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
