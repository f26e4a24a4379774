//! Drive the engine against conformance vectors.

use format_rs_core::{format, Arg, Args, SliceSink};
use serde::{Deserialize, Serialize};

use crate::vectors::{ArgValue, Expect, Vector};

/// Outcome of a single vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Vector name.
    pub case_name: String,
    /// Conversion family.
    pub family: String,
    /// Whether the engine matched the expectation.
    pub passed: bool,
    /// Human-readable mismatch description, when failed.
    pub detail: Option<String>,
}

/// Aggregate over a vector run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseResult>,
}

/// Run one vector against the engine.
pub fn run_vector(v: &Vector) -> CaseResult {
    let list: Vec<Arg<'_>> = v
        .args
        .iter()
        .map(|a| match a {
            ArgValue::Int(i) => Arg::Int(*i),
            ArgValue::Uint(u) => Arg::Uint(*u),
            ArgValue::Double(d) => Arg::Double(*d),
            ArgValue::Str(s) => Arg::from(s.as_str()),
            ArgValue::Null => Arg::Null,
        })
        .collect();

    let mut buf = [0u8; 600];
    let mut sink = SliceSink::new(&mut buf);
    let outcome = format(&mut sink, &v.template, &mut Args::new(&list));

    let (passed, detail) = match (&v.expect, outcome) {
        (Expect::Reject, Err(_)) => (true, None),
        (Expect::Reject, Ok(n)) => (
            false,
            Some(format!(
                "expected rejection, got {:?} (returned {n})",
                String::from_utf8_lossy(sink.written())
            )),
        ),
        (Expect::Output { text, returns }, Ok(n)) => {
            if sink.written() == text.as_bytes() && n == *returns {
                (true, None)
            } else {
                (
                    false,
                    Some(format!(
                        "expected {:?} (returns {returns}), got {:?} (returned {n})",
                        text,
                        String::from_utf8_lossy(sink.written()),
                    )),
                )
            }
        }
        (Expect::Output { text, .. }, Err(_)) => (
            false,
            Some(format!("expected {text:?}, engine rejected the call")),
        ),
    };

    CaseResult {
        case_name: v.name.clone(),
        family: v.family.clone(),
        passed,
        detail,
    }
}

/// Run a whole vector table.
pub fn run_all(vectors: &[Vector]) -> VerificationSummary {
    let results: Vec<CaseResult> = vectors.iter().map(run_vector).collect();
    let passed = results.iter().filter(|r| r.passed).count();
    VerificationSummary {
        total: results.len(),
        passed,
        failed: results.len() - passed,
        results,
    }
}
