//! # format-rs-core
//!
//! Reentrant, allocation-free `printf`-style formatting engine for
//! constrained environments where the host C runtime's formatter is too
//! large or unavailable.
//!
//! The caller supplies a format template, a cursor over typed arguments,
//! and a byte sink; the engine parses the template, converts each argument
//! according to its specifier, and streams the result to the sink in
//! strict left-to-right order. No dynamic memory is used anywhere: all
//! per-call scratch state lives in small fixed-size buffers on the
//! caller's stack.
//!
//! Reference: ISO C99 7.19.6.1 `fprintf` semantics, with extensions
//! (`%b` binary, `%C` repetition, `%I`/`%U` custom-base, `%k` fixed-point,
//! digit grouping, field centering, SI/engineering notation, format
//! continuation, alternate-memory strings).
//!
//! Design invariant: the engine is a pure function of its inputs. There is
//! no shared mutable state, no singleton, and no hidden global buffer, so
//! concurrent callers on different sinks need no coordination.
//!
//! Three tiers share the design:
//! - the full engine ([`format`], [`format_bytes`], [`sformat`]),
//! - [`tiny`] — the reduced sink-based engine (no grouping, no FP),
//! - [`micro`] — the byte-at-a-time engine for 16-bit targets.

#![no_std]
#![deny(unsafe_code)]

pub mod args;
pub mod compose;
pub mod conv;
pub mod micro;
pub mod parse;
pub mod sink;
pub mod spec;
pub mod tiny;

pub use args::{AltRead, Arg, Args, Text};
pub use parse::{format, format_bytes, sformat};
pub use sink::{CountSink, FmtSink, PutByte, Sink, SliceSink};
pub use spec::{Flags, FormatSpec, Qualifier, MAXBASE, MAXPREC, MAXWIDTH};

/// The single failure sentinel surfaced by the engine.
///
/// Every internal error kind — malformed template, out-of-range
/// width/precision/base, sink refusal, exhausted or mismatched argument
/// cursor — collapses to this one outward signal, the safe-Rust rendition
/// of the C library's `EXBADFORMAT` (−1). Partial output already sent to
/// the sink is not rolled back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadFormat;

impl core::fmt::Display for BadFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad format")
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = core::result::Result<T, BadFormat>;
