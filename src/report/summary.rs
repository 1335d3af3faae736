//! Text summary rendering
//!
//! Formats the statistics of the configured metrics into the block printed
//! at the end of an analysis run. Metrics with no data are skipped, so a
//! partial simulation never produces rows of zeros that look like results.

use crate::report::MetricLabel;
use crate::store::ResultStore;

const RULE: &str =
    "================================================================================";

/// Render the statistics summary for the given metrics
///
/// Returns the formatted block; printing is the caller's job. Metrics the
/// store never observed are omitted entirely.
pub fn render_summary(store: &ResultStore, metrics: &[MetricLabel]) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push_str("\nSIMULATION RESULTS SUMMARY\n");
    out.push_str(RULE);
    out.push('\n');

    let mut any = false;
    for metric in metrics {
        let Some(stats) = store.statistics_for(&metric.key) else {
            continue;
        };
        any = true;

        out.push_str(&format!("\n{} ({}):\n", metric.label, metric.key));
        out.push_str(&format!("   Mean:   {:.2}\n", stats.mean));
        out.push_str(&format!("   Median: {:.2}\n", stats.median));
        out.push_str(&format!("   Std:    {:.2}\n", stats.std_dev));
        out.push_str(&format!("   Range:  [{:.0}, {:.0}]\n", stats.min, stats.max));
        out.push_str(&format!("   Total:  {:.0}\n", stats.sum));
    }

    if !any {
        out.push_str("\nNo data for any configured metric.\n");
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out
}
