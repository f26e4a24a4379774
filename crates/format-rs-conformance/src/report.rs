//! Report rendering for conformance runs.

use serde::{Deserialize, Serialize};

use crate::runner::VerificationSummary;

/// A conformance report combining the run summary with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Engine crate and feature set exercised.
    pub engine: String,
    /// Timestamp (seconds since the Unix epoch).
    pub timestamp: u64,
    /// Run summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Engine: {}\n", self.engine));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Family | Status |\n");
        out.push_str("|------|--------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("| {} | {} | {} |\n", r.case_name, r.family, status));
        }
        for r in self.summary.results.iter().filter(|r| !r.passed) {
            if let Some(detail) = &r.detail {
                out.push_str(&format!("\n- `{}`: {}\n", r.case_name, detail));
            }
        }
        out
    }

    /// Render the report as pretty JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// Render a byte-level diff between expected and actual text.
///
/// Points at the first mismatching byte, which is usually all one needs
/// when a padding computation drifts by one.
#[must_use]
pub fn render_diff_report(expected: &str, actual: &str) -> String {
    if expected == actual {
        return format!("identical ({} bytes)", expected.len());
    }
    let mismatch = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()));
    format!(
        "expected ({} bytes): {expected:?}\nactual   ({} bytes): {actual:?}\nfirst mismatch at byte {mismatch}",
        expected.len(),
        actual.len(),
    )
}
