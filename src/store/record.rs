//! Scalar record parsing
//!
//! One OMNeT++-style scalar declaration per line:
//!
//! ```text
//! scalar <moduleQualifiedName> <metricName> <value> [...ignored]
//! ```
//!
//! Anything else (section headers, attribute lines, vector declarations,
//! comments) is inert and parses to `None`. Node identity is pulled out of
//! the module path by a pluggable [`NodeIdExtractor`] so naming conventions
//! other than `drone[n]` can be substituted without touching ingestion.

use regex::Regex;

/// One parsed scalar declaration
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarRecord {
    /// Full dotted/bracketed path of the emitting component,
    /// e.g. `DroneSwarmNetwork.drone[3].batRouting`
    pub module_path: String,
    /// Metric name, typically `<event>:<aggregation>`, e.g. `routeDiscovered:count`.
    /// Opaque to the store; used only as a grouping key.
    pub metric_name: String,
    /// Node index extracted from the module path, if any
    pub node_index: Option<u64>,
    /// The scalar value
    pub value: f64,
}

/// Strategy for extracting a node index from a module path
///
/// The canonical convention is a segment literally named `drone` followed by
/// a bracketed index (`drone[7]`); the first match in the path wins.
pub struct NodeIdExtractor {
    extract: Box<dyn Fn(&str) -> Option<u64> + Send + Sync>,
}

impl NodeIdExtractor {
    /// Extractor matching `<segment>[<digits>]` anywhere in the path
    pub fn for_segment(segment: &str) -> Self {
        let pattern = format!(r"{}\[(\d+)\]", regex::escape(segment));
        // Escaped literal + fixed suffix, cannot fail to compile
        let re = Regex::new(&pattern).expect("segment pattern is valid");
        Self {
            extract: Box::new(move |path| {
                re.captures(path)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| m.as_str().parse().ok())
            }),
        }
    }

    /// Extractor from an arbitrary path-to-identity function
    pub fn custom(f: impl Fn(&str) -> Option<u64> + Send + Sync + 'static) -> Self {
        Self {
            extract: Box::new(f),
        }
    }

    /// Extract the node index from a module path, if present
    pub fn extract(&self, module_path: &str) -> Option<u64> {
        (self.extract)(module_path)
    }
}

impl Default for NodeIdExtractor {
    fn default() -> Self {
        Self::for_segment("drone")
    }
}

impl std::fmt::Debug for NodeIdExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeIdExtractor").finish_non_exhaustive()
    }
}

/// Parse one line into a scalar record
///
/// Returns `None` for any line that is not a well-formed scalar declaration:
/// wrong leading keyword, fewer than 4 whitespace-delimited fields, or a
/// non-numeric value field. Malformed lines are expected noise in this
/// format, so `None` is a skip, never an error. Fields beyond the value are
/// ignored.
pub fn parse_scalar_line(line: &str, extractor: &NodeIdExtractor) -> Option<ScalarRecord> {
    let mut fields = line.trim().split_whitespace();

    if fields.next()? != "scalar" {
        return None;
    }

    let module_path = fields.next()?;
    let metric_name = fields.next()?;
    let value: f64 = fields.next()?.parse().ok()?;

    Some(ScalarRecord {
        node_index: extractor.extract(module_path),
        module_path: module_path.to_string(),
        metric_name: metric_name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let extractor = NodeIdExtractor::default();
        let record = parse_scalar_line(
            "scalar DroneSwarmNetwork.drone[3].batRouting routeDiscovered:count 42",
            &extractor,
        )
        .unwrap();

        assert_eq!(record.module_path, "DroneSwarmNetwork.drone[3].batRouting");
        assert_eq!(record.metric_name, "routeDiscovered:count");
        assert_eq!(record.node_index, Some(3));
        assert_eq!(record.value, 42.0);
    }

    #[test]
    fn test_parse_trims_and_ignores_trailing_fields() {
        let extractor = NodeIdExtractor::default();
        let record = parse_scalar_line(
            "  scalar Net.drone[0].app packetRouted:sum 12.5 extra fields here  ",
            &extractor,
        )
        .unwrap();

        assert_eq!(record.value, 12.5);
        assert_eq!(record.node_index, Some(0));
    }

    #[test]
    fn test_keyword_must_match_whole_token() {
        let extractor = NodeIdExtractor::default();

        // "scalars" starts with "scalar" but is a different token
        assert!(parse_scalar_line("scalars Net.drone[0] x:count 1", &extractor).is_none());
        // Case-sensitive
        assert!(parse_scalar_line("Scalar Net.drone[0] x:count 1", &extractor).is_none());
        // Other declaration kinds are inert
        assert!(parse_scalar_line("vector 5 Net.drone[0] rtt:vector ETV", &extractor).is_none());
        assert!(parse_scalar_line("attr configname DroneSwarm5km", &extractor).is_none());
    }

    #[test]
    fn test_too_few_fields_is_skipped() {
        let extractor = NodeIdExtractor::default();

        assert!(parse_scalar_line("scalar", &extractor).is_none());
        assert!(parse_scalar_line("scalar Net.drone[0]", &extractor).is_none());
        assert!(parse_scalar_line("scalar Net.drone[0] x:count", &extractor).is_none());
        assert!(parse_scalar_line("", &extractor).is_none());
    }

    #[test]
    fn test_non_numeric_value_is_skipped() {
        let extractor = NodeIdExtractor::default();
        assert!(parse_scalar_line(
            "scalar Net.drone[0].app status:last \"active\"",
            &extractor
        )
        .is_none());
    }

    #[test]
    fn test_record_without_node_index() {
        let extractor = NodeIdExtractor::default();
        let record =
            parse_scalar_line("scalar Net.gateway totalPackets:sum 99", &extractor).unwrap();

        assert_eq!(record.node_index, None);
        assert_eq!(record.value, 99.0);
    }

    #[test]
    fn test_first_bracketed_match_wins() {
        let extractor = NodeIdExtractor::default();
        let record = parse_scalar_line(
            "scalar Net.drone[2].relay.drone[7] hops:count 4",
            &extractor,
        )
        .unwrap();

        assert_eq!(record.node_index, Some(2));
    }

    #[test]
    fn test_index_beyond_u32_range_is_kept() {
        // Bracketed indices are unbounded in the source format; a huge one
        // must stay a real identity, not demote the record to "no index"
        let extractor = NodeIdExtractor::default();
        let record = parse_scalar_line(
            "scalar Net.drone[4294967296].r m:count 1",
            &extractor,
        )
        .unwrap();

        assert_eq!(record.node_index, Some(4_294_967_296));
    }

    #[test]
    fn test_alternate_segment_name() {
        let extractor = NodeIdExtractor::for_segment("uav");
        assert_eq!(extractor.extract("Net.uav[12].routing"), Some(12));
        assert_eq!(extractor.extract("Net.drone[12].routing"), None);
    }

    #[test]
    fn test_custom_extractor() {
        let extractor = NodeIdExtractor::custom(|path| {
            path.rsplit('#').next().and_then(|s| s.parse().ok())
        });
        assert_eq!(extractor.extract("node#5"), Some(5));
        assert_eq!(extractor.extract("node"), None);
    }
}
