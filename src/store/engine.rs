//! Result store
//!
//! Owns the [`ResultIndex`] and drives ingestion:
//!
//! ```text
//! Ingest Path:
//!   .sca file → lines → parse_scalar_line → node filter → ResultIndex
//!
//! Query Path:
//!   metric name → flatten / per-node series → MetricStats
//! ```
//!
//! Files are read strictly sequentially, each opened, fully consumed and
//! closed before the next begins. A failure on one file never rolls back
//! data already ingested from earlier files in the same batch.

use crate::store::error::{StoreError, StoreResult};
use crate::store::index::ResultIndex;
use crate::store::record::{parse_scalar_line, NodeIdExtractor};
use crate::store::stats::MetricStats;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Per-file ingestion counters (diagnostics only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSummary {
    /// Total lines read from the file
    pub lines_scanned: usize,
    /// Scalar records appended to the index
    pub records_retained: usize,
    /// Scalar declarations parsed but dropped for lack of a node index
    pub records_dropped: usize,
}

/// Per-batch ingestion counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files fully read
    pub files_ingested: usize,
    /// Files that could not be opened or read
    pub files_failed: usize,
    /// Scalar records appended to the index across all files
    pub records_retained: usize,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s) ingested, {} failed, {} record(s) retained",
            self.files_ingested, self.files_failed, self.records_retained
        )
    }
}

/// Parses scalar-result files and answers statistics queries
///
/// The store exclusively owns its index: it is created empty, mutated only
/// by ingestion, and rebuilt from scratch on every run of the tool. Queries
/// are pure reads and work in either lifecycle phase (on an empty store
/// every metric is simply absent).
pub struct ResultStore {
    index: ResultIndex,
    extractor: NodeIdExtractor,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    /// Create an empty store with the canonical `drone[n]` extractor
    pub fn new() -> Self {
        Self::with_extractor(NodeIdExtractor::default())
    }

    /// Create an empty store with a custom node-identity extractor
    pub fn with_extractor(extractor: NodeIdExtractor) -> Self {
        Self {
            index: ResultIndex::new(),
            extractor,
        }
    }

    /// Ingest one scalar-result file
    ///
    /// Line-level malformation (wrong keyword, short lines, non-numeric
    /// values, no extractable node index) is silently skipped; only failing
    /// to open or read the file itself is an error. Invalid UTF-8 bytes are
    /// dropped from the byte stream, not substituted.
    pub fn ingest_file(&mut self, path: &Path) -> StoreResult<FileSummary> {
        let file = File::open(path)?;
        self.ingest_reader(BufReader::new(file))
    }

    /// Ingest scalar lines from any buffered reader
    ///
    /// Parsed records are staged and committed to the index only once the
    /// whole stream has been read, so a read error mid-stream leaves the
    /// index exactly as it was: a file is ingested completely or not at all.
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> StoreResult<FileSummary> {
        let mut summary = FileSummary::default();
        let mut staged: Vec<(String, u64, f64)> = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines_scanned += 1;

            let line = decode_skip_invalid(&buf);
            let Some(record) = parse_scalar_line(&line, &self.extractor) else {
                continue;
            };

            match record.node_index {
                Some(node) => {
                    staged.push((record.metric_name, node, record.value));
                    summary.records_retained += 1;
                }
                // Aggregate scalars without a per-node identity are
                // deliberately invisible to this tool
                None => summary.records_dropped += 1,
            }
        }

        for (metric, node, value) in staged {
            self.index.append(&metric, node, value);
        }

        Ok(summary)
    }

    /// Ingest files in the given order
    ///
    /// An empty path list is reported as [`StoreError::NoInputFiles`]
    /// without touching the index, so callers can tell "nothing selected"
    /// apart from a batch that matched no scalar lines. A file that fails
    /// to open is logged and counted; the rest of the batch still runs.
    pub fn ingest_all<P: AsRef<Path>>(&mut self, paths: &[P]) -> StoreResult<BatchSummary> {
        if paths.is_empty() {
            return Err(StoreError::NoInputFiles);
        }

        let mut batch = BatchSummary::default();

        for path in paths {
            let path = path.as_ref();
            match self.ingest_file(path) {
                Ok(summary) => {
                    tracing::debug!(
                        "Ingested {:?}: {} line(s), {} retained, {} dropped",
                        path,
                        summary.lines_scanned,
                        summary.records_retained,
                        summary.records_dropped
                    );
                    batch.files_ingested += 1;
                    batch.records_retained += summary.records_retained;
                }
                Err(e) => {
                    tracing::warn!("Failed to ingest {:?}: {}", path, e);
                    batch.files_failed += 1;
                }
            }
        }

        Ok(batch)
    }

    /// Statistics over all values for a metric, flattened node-ascending
    /// then in insertion order
    ///
    /// `None` means the metric was never observed; all-zero data still
    /// yields a statistics record.
    pub fn statistics_for(&self, metric_name: &str) -> Option<MetricStats> {
        MetricStats::from_values(&self.index.flattened(metric_name))
    }

    /// Raw per-node value sequences for a metric, ascending by node index
    ///
    /// Sequences are ragged when some runs failed to emit a scalar for a
    /// node; no padding or interpolation is applied.
    pub fn per_node_series(&self, metric_name: &str) -> Vec<(u64, &[f64])> {
        self.index
            .series(metric_name)
            .map(|nodes| {
                nodes
                    .iter()
                    .map(|(&node, values)| (node, values.as_slice()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Metric names observed so far, in lexical order
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.index.metric_names()
    }
}

/// Decode a byte buffer as UTF-8, dropping invalid sequences
///
/// A stray invalid byte inside a field must not widen the field with a
/// replacement character; splicing the bytes out keeps the surrounding
/// characters intact (so `4 <bad> 2` still reads as `42`). Borrows when the
/// input is already valid.
fn decode_skip_invalid(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    let mut rest = bytes;
    let mut out = String::new();

    loop {
        match std::str::from_utf8(rest) {
            Ok(tail) => {
                if out.is_empty() {
                    return std::borrow::Cow::Borrowed(tail);
                }
                out.push_str(tail);
                return std::borrow::Cow::Owned(out);
            }
            Err(err) => {
                let valid = &rest[..err.valid_up_to()];
                // valid_up_to marks the longest well-formed prefix
                out.push_str(std::str::from_utf8(valid).expect("prefix is valid UTF-8"));
                // error_len is None only for a truncated sequence at the
                // end of the buffer
                let skip = err.error_len().unwrap_or(rest.len() - err.valid_up_to());
                rest = &rest[err.valid_up_to() + skip..];
            }
        }
    }
}
