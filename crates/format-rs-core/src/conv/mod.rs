//! Argument-to-text converters.
//!
//! One module per converter family:
//! - `int` — the numeric conversions, grouping included
//! - `text` — `%c`, `%C`, `%s`
//! - `radix` — double → decimal decomposition (no FP arithmetic)
//! - `float` — the unified `e`/`f`/`g` layout engine
//! - `fixed` — `%k` fixed-point via a synthetic double

pub mod int;
pub mod text;

#[cfg(feature = "fp")]
pub mod fixed;
#[cfg(feature = "fp")]
pub mod float;
#[cfg(feature = "fp")]
pub mod radix;
