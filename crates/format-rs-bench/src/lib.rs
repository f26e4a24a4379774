//! Benchmark-only crate; see `benches/format_bench.rs`.
