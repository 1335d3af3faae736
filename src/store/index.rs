//! Result index
//!
//! Nested ordered mapping: metric name → node index → value sequence.
//! Entries are created explicitly on first append, so an absent key always
//! means "no data" and never an implicitly-constructed empty sequence.
//! `BTreeMap` keys give node-ascending iteration without extra sorting.

use std::collections::BTreeMap;

/// Value sequences grouped by metric name and node index
///
/// Within one node's sequence, insertion order reflects ingestion order
/// (file order, then line order within a file).
#[derive(Debug, Default)]
pub struct ResultIndex {
    metrics: BTreeMap<String, BTreeMap<u64, Vec<f64>>>,
}

impl ResultIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a node's sequence, creating the metric and node
    /// entries on first write
    pub fn append(&mut self, metric_name: &str, node_index: u64, value: f64) {
        self.metrics
            .entry(metric_name.to_string())
            .or_default()
            .entry(node_index)
            .or_default()
            .push(value);
    }

    /// Per-node sequences for one metric, or `None` if never observed
    pub fn series(&self, metric_name: &str) -> Option<&BTreeMap<u64, Vec<f64>>> {
        self.metrics.get(metric_name)
    }

    /// All values for one metric, flattened node-ascending then in
    /// insertion order
    pub fn flattened(&self, metric_name: &str) -> Vec<f64> {
        self.metrics
            .get(metric_name)
            .map(|nodes| nodes.values().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// Metric names observed so far, in lexical order
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    /// Number of distinct metrics observed
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
