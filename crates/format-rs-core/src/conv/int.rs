//! Integer conversions: `d i I b o u U x X` and the rewritten `%p`.
//!
//! Digits are expanded right-to-left into a fixed scratch buffer. Base 10
//! has a dedicated loop the compiler turns into multiply-by-invariant
//! code; bases 2, 8 and 16 use mask-and-shift; every other base in
//! 2..=36 goes through the generic divide path.

use crate::args::Args;
use crate::compose::{calc_space_padding, gen_out};
use crate::sink::Sink;
use crate::spec::{FormatSpec, Qualifier, BUFLEN};
use crate::Result;

#[cfg(feature = "grouping")]
use crate::spec::Grouping;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Narrow a signed value to the qualifier-selected source width.
fn narrow_signed(v: i64, q: Qualifier) -> i64 {
    match q {
        Qualifier::H => v as i16 as i64,
        Qualifier::Hh => v as i8 as i64,
        Qualifier::L | Qualifier::Ll | Qualifier::J | Qualifier::Z | Qualifier::T => v,
        Qualifier::None | Qualifier::BigL => v as i32 as i64,
    }
}

/// Narrow an unsigned value to the qualifier-selected source width.
fn narrow_unsigned(v: u64, q: Qualifier) -> u64 {
    match q {
        Qualifier::H => v as u16 as u64,
        Qualifier::Hh => v as u8 as u64,
        Qualifier::L | Qualifier::Ll | Qualifier::J | Qualifier::Z | Qualifier::T => v,
        Qualifier::None | Qualifier::BigL => v as u32 as u64,
    }
}

/// Expand `value` right-to-left into the tail of `buf` using the digit
/// alphabet `0-9A-Z`, lowercased for lowercase conversion letters.
/// Returns the digit count; zero produces no digits.
fn expand_digits(buf: &mut [u8; BUFLEN], mut value: u64, base: u32, code: u8) -> usize {
    let lower = code.is_ascii_lowercase();
    let mut n = 0;
    match base {
        10 => {
            while value != 0 {
                n += 1;
                buf[BUFLEN - n] = b'0' + (value % 10) as u8;
                value /= 10;
            }
        }
        2 | 8 | 16 => {
            let shift = match base {
                16 => 4,
                8 => 3,
                _ => 1,
            };
            let mask = u64::from(base - 1);
            while value != 0 {
                let mut cc = DIGITS[(value & mask) as usize];
                if lower {
                    cc |= 0x20;
                }
                n += 1;
                buf[BUFLEN - n] = cc;
                value >>= shift;
            }
        }
        _ => {
            while value != 0 {
                let mut cc = DIGITS[(value % u64::from(base)) as usize];
                if lower {
                    cc |= 0x20;
                }
                n += 1;
                buf[BUFLEN - n] = cc;
                value /= u64::from(base);
            }
        }
    }
    n
}

#[cfg(feature = "grouping")]
mod grouping {
    use super::*;
    use crate::args::Text;
    use crate::BadFormat;

    /// Most group-specs a single pattern may hold. The insertion walk
    /// keeps them in a fixed stack array; longer patterns fail the call.
    const MAX_SPECS: usize = 8;

    #[derive(Clone, Copy, Default)]
    struct GroupSpec {
        sep: u8,
        run: usize,
        /// `-` flagged: apply once, then stop inserting.
        terminal: bool,
    }

    fn parse_specs(
        src: &Text<'_>,
        start: usize,
        len: usize,
        args: &mut Args<'_, '_>,
    ) -> Result<([GroupSpec; MAX_SPECS], usize)> {
        let mut specs = [GroupSpec::default(); MAX_SPECS];
        let mut count = 0;
        let end = start + len;
        let mut pos = start;
        while pos < end {
            let mut gs = GroupSpec::default();
            let mut b = src.byte_at(pos).ok_or(BadFormat)?;
            if b == b'-' {
                gs.terminal = true;
                pos += 1;
                b = src.byte_at(pos).ok_or(BadFormat)?;
            }
            gs.sep = b;
            pos += 1;
            match src.byte_at(pos) {
                Some(b'*') => {
                    pos += 1;
                    let v = args.next_int()?;
                    gs.run = if v < 0 { 0 } else { v as usize };
                }
                _ => {
                    while pos < end {
                        match src.byte_at(pos) {
                            Some(c) if c.is_ascii_digit() => {
                                gs.run = gs.run * 10 + usize::from(c - b'0');
                                pos += 1;
                            }
                            _ => break,
                        }
                    }
                }
            }
            if count == MAX_SPECS {
                return Err(BadFormat);
            }
            specs[count] = gs;
            count += 1;
        }
        Ok((specs, count))
    }

    /// Insert separators into the right-aligned digit body in `buf`.
    ///
    /// Walks the pattern from its last group-spec to its first; the first
    /// then repeats leftward until the digits run out, unless it carries
    /// the `-` terminator or a zero run length. Only the raw digits are
    /// grouped; precision zeros are prepended outside the buffer and the
    /// insertion pattern is therefore independent of them.
    ///
    /// Returns the body length (digits plus separators).
    pub(super) fn apply(
        buf: &mut [u8; BUFLEN],
        digit_width: usize,
        g: &Grouping<'_>,
        args: &mut Args<'_, '_>,
    ) -> Result<usize> {
        let (specs, count) = parse_specs(&g.src, g.start, g.len, args)?;
        let mut body_len = digit_width;
        if count == 0 || digit_width == 0 {
            return Ok(body_len);
        }
        let mut consumed = 0;
        let mut inserted = 0;
        let mut idx = count;
        loop {
            // Last group-spec first; the first one repeats leftward.
            let s = if idx > 0 {
                idx -= 1;
                specs[idx]
            } else {
                specs[0]
            };
            if s.run == 0 {
                break;
            }
            consumed += s.run;
            if consumed >= digit_width {
                break;
            }
            // Shift the bytes left of the insertion point one slot left
            // and drop the separator in.
            let at = BUFLEN - consumed - inserted;
            let lo = BUFLEN - body_len;
            buf.copy_within(lo..at, lo - 1);
            buf[at - 1] = s.sep;
            body_len += 1;
            inserted += 1;
            if s.terminal {
                break;
            }
        }
        Ok(body_len)
    }
}

/// Process the numeric conversions.
///
/// `base` is the resolved base (default or `:` override); `code` is the
/// conversion letter after any `%p` rewrite.
pub(crate) fn conv_numeric(
    spec: &mut FormatSpec<'_>,
    args: &mut Args<'_, '_>,
    code: u8,
    base: u32,
    sink: &mut dyn Sink,
) -> Result<usize> {
    let mut buf = [0u8; BUFLEN];
    let mut prefix = [0u8; 2];
    let mut pfx_width = 0;
    let mut length = 0;

    // Signed values need the extra sign-prefix options which do not
    // apply to the unsigned conversions.
    let uv = if spec.flags.signed_conv {
        let v = narrow_signed(args.next_int()?, spec.qualifier);
        prefix[0] = if v < 0 {
            b'-'
        } else if spec.flags.force_sign {
            b'+'
        } else if spec.flags.space_sign {
            b' '
        } else {
            0
        };
        if prefix[0] != 0 {
            pfx_width = 1;
            spec.flags.alt_form = true;
        }
        v.unsigned_abs()
    } else {
        prefix[0] = b'0';
        narrow_unsigned(args.next_uint()?, spec.qualifier)
    };

    if code == b'o' && uv != 0 {
        pfx_width = 1;
    }
    if code == b'x' || code == b'X' || code == b'b' {
        // Non-zero value or bang flag earns the radix prefix; bang also
        // forces it lowercase.
        if spec.flags.bang || uv != 0 {
            prefix[1] = code;
            pfx_width = 2;
        }
        if spec.flags.bang {
            prefix[1] |= 0x20;
        }
    }
    if spec.flags.alt_form {
        length += pfx_width;
    }

    let digit_width = expand_digits(&mut buf, uv, base, code);

    #[cfg(feature = "grouping")]
    let body_len = match &spec.grouping {
        Some(g) => grouping::apply(&mut buf, digit_width, g, args)?,
        None => digit_width,
    };
    #[cfg(not(feature = "grouping"))]
    let body_len = digit_width;

    // An explicit precision sets the minimum digit count and disables
    // the zero flag.
    let prec = match spec.precision {
        None => 1,
        Some(p) => {
            spec.flags.zero_pad = false;
            p
        }
    };
    let num_width = digit_width.max(prec);

    length += body_len + (num_width - digit_width);
    let (mut ps1, ps2) = calc_space_padding(spec, length);

    let mut pz = num_width - digit_width;
    if spec.flags.zero_pad {
        pz += ps1;
        ps1 = 0;
    }

    let pfx: &[u8] = if spec.flags.alt_form {
        &prefix[..pfx_width]
    } else {
        &[]
    };
    gen_out(sink, ps1, pfx, pz, &buf[BUFLEN - body_len..], ps2)
}
