//! Conformance tooling for the `format-rs-core` engine.
//!
//! Carries a built-in table of conversion vectors distilled from the
//! reference test harness, a runner that drives the engine against them,
//! and report rendering to markdown and JSON.

pub mod report;
pub mod runner;
pub mod vectors;

pub use report::ConformanceReport;
pub use runner::{run_all, run_vector, CaseResult, VerificationSummary};
pub use vectors::{builtin_vectors, ArgValue, Expect, Vector};

/// Errors surfaced by the conformance tooling (not by the engine, which
/// only ever reports its own single sentinel).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
