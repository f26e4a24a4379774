//! Per-conversion format specification record and its field types.
//!
//! One [`FormatSpec`] is created at each `%`, populated as the flags,
//! width, precision and modifiers are scanned, consumed by the matching
//! converter, and discarded. It lives entirely on the caller's stack.

use crate::args::Text;

/// Maximum field width accepted by the full engine.
pub const MAXWIDTH: usize = 500;

/// Maximum precision accepted by the full engine.
pub const MAXPREC: usize = 500;

/// Maximum numeric base accepted by the `:` modifier.
pub const MAXBASE: u32 = 36;

/// Scratch buffer length for the widest integer rendering: 64 binary
/// digits, a separator between every pair of them, and the radix prefix.
pub(crate) const BUFLEN: usize = 130;

/// Conversion flags parsed from the template.
///
/// `signed_conv` is internal: the dispatcher sets it for `d`/`i`/`I` to
/// steer the numeric converter; it has no template character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `' '` — prefix non-negative signed values with a space.
    pub space_sign: bool,
    /// `'+'` — always prefix signed values with a sign.
    pub force_sign: bool,
    /// `'-'` — left-justify within the field width.
    pub left_justify: bool,
    /// `'#'` — alternate form (radix prefix; forced decimal point on FP).
    pub alt_form: bool,
    /// `'0'` — pad the field with zeros instead of spaces.
    pub zero_pad: bool,
    /// `'!'` — force the radix prefix (lowercased) even for zero; on
    /// `%e`/`%f`, select engineering/SI notation.
    pub bang: bool,
    /// `'^'` — center the content within the field width.
    pub center: bool,
    /// Internal: signed integer conversion in progress.
    pub signed_conv: bool,
}

/// Length qualifier selecting the argument's source integer width.
///
/// The C source encodes `hh`/`ll` by OR-ing the low bit into the
/// qualifier letter (all qualifier letters have even ASCII codes); here
/// the doubled forms are explicit variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Qualifier {
    /// No qualifier: `int`-sized (32-bit).
    #[default]
    None,
    /// `h`: 16-bit.
    H,
    /// `hh`: 8-bit.
    Hh,
    /// `l`: 64-bit (LP64 `long`).
    L,
    /// `ll`: 64-bit.
    Ll,
    /// `j`: `intmax_t`, 64-bit.
    J,
    /// `z`: `size_t`-sized, 64-bit.
    Z,
    /// `t`: `ptrdiff_t`-sized, 64-bit.
    T,
    /// `L`: `long double`; rejected on FP conversions, ignored otherwise.
    BigL,
}

/// Captured `[...]` grouping span, resolved lazily by the integer
/// converter. Carries the template's address-space tag with it.
#[derive(Debug, Clone, Copy)]
pub struct Grouping<'a> {
    /// The template holding the pattern.
    pub(crate) src: Text<'a>,
    /// Offset of the first byte inside the brackets.
    pub(crate) start: usize,
    /// Length of the bracketed span, brackets excluded.
    pub(crate) len: usize,
}

/// Working record for a single conversion.
#[derive(Debug, Clone, Copy)]
pub struct FormatSpec<'a> {
    /// Bytes emitted by the whole call so far (feeds `%n`).
    pub emitted: usize,
    /// Parsed conversion flags.
    pub flags: Flags,
    /// Minimum field width, `0..=MAXWIDTH`.
    pub width: usize,
    /// Explicit precision; `None` means absent.
    pub precision: Option<usize>,
    /// Base override from the `:` modifier; `None` means the
    /// conversion's default base.
    pub base: Option<u32>,
    /// Length qualifier.
    pub qualifier: Qualifier,
    /// Repetition character captured inline for `%C`.
    pub rep_char: u8,
    /// Grouping pattern span, if a `[...]` modifier was present.
    pub grouping: Option<Grouping<'a>>,
    /// `(integer bits, fraction bits)` for `%k`; defaults to 16.16.
    pub fixed_point: (u32, u32),
}

impl FormatSpec<'_> {
    /// A blank record, as initialized at each `%`.
    pub fn new() -> Self {
        Self {
            emitted: 0,
            flags: Flags::default(),
            width: 0,
            precision: None,
            base: None,
            qualifier: Qualifier::default(),
            rep_char: 0,
            grouping: None,
            fixed_point: (16, 16),
        }
    }
}

impl Default for FormatSpec<'_> {
    fn default() -> Self {
        Self::new()
    }
}
