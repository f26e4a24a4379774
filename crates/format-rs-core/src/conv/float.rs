//! Floating-point layout: `%e %E %f %F` and the pseudo-conversions
//! `%g %G`, plus engineering/SI notation under the `!` flag.
//!
//! Both layouts share one model. Aligning them shows the sections:
//!
//! ```text
//! e: [space+][sign?][zero+][digit]        [.]       [digit+][zero+][eE][sign][digit+][space+]
//!       ps1           pz1                            n_right  pz4              n_exp    ps2
//! f: [space+][sign?][zero+][digit+][zero+][.][zero+][digit+][zero+]                  [space+]
//!       ps1           pz1   n_left   pz2       pz3   n_right  pz4
//! ```
//!
//! In the `e` case `pz2`/`pz3` are zero and `n_left` is one; in the `f`
//! case there is no exponent field. Rounding happens on the decimal
//! mantissa before layout, by adding a half-unit at the position the
//! precision selects and truncating — half-away-from-zero, as the
//! reference library does it; tie cases may disagree with IEEE
//! round-to-even on purpose.

use crate::args::Args;
use crate::compose::{calc_space_padding, gen_out};
use crate::sink::Sink;
use crate::spec::{FormatSpec, Qualifier};
use crate::{BadFormat, Result};

use super::radix::{radix_convert, Decoded, DEC_1P0, DEC_SIG_FIG};

/// Compressed (engineering/SI) notation only has named multipliers within
/// the range resolved by the CGPM; beyond it the residual exponent rides
/// the digits.
const COMP_EXP_LIMIT: i32 = 24;

/// SI multiplier table, centered on the empty slot.
const SI_TABLE: [u8; 17] = [
    b'y', b'z', b'a', b'f', b'p', b'n', b'u', b'm', 0, b'k', b'M', b'G', b'T', b'P', b'E', b'Z',
    b'Y',
];

/// Entry point for `%e %E %f %F %g %G`.
pub(crate) fn conv_fp(
    spec: &mut FormatSpec<'_>,
    args: &mut Args<'_, '_>,
    code: u8,
    sink: &mut dyn Sink,
) -> Result<usize> {
    // Long doubles are not supported.
    if spec.qualifier == Qualifier::BigL {
        return Err(BadFormat);
    }
    let dec = radix_convert(args.next_double()?);
    if dec.is_nan() || dec.is_inf() {
        conv_infnan(spec, code, sink, dec)
    } else {
        conv_efg(spec, code, sink, dec)
    }
}

/// Render inf/NaN: three-letter spelling in the case of the conversion
/// letter, sign-prefixed and width-padded like any other field.
pub(crate) fn conv_infnan(
    spec: &FormatSpec<'_>,
    code: u8,
    sink: &mut dyn Sink,
    dec: Decoded,
) -> Result<usize> {
    let lower = code.is_ascii_lowercase();
    let body: &[u8] = if dec.is_nan() {
        if lower {
            b"nan"
        } else {
            b"NAN"
        }
    } else if lower {
        b"inf"
    } else {
        b"INF"
    };

    let pfx = sign_prefix(spec, dec.sign);
    let (ps1, ps2) = calc_space_padding(spec, body.len() + pfx.len());
    gen_out(sink, ps1, pfx, 0, body, ps2)
}

fn sign_prefix(spec: &FormatSpec<'_>, negative: bool) -> &'static [u8] {
    if negative {
        b"-"
    } else if spec.flags.force_sign {
        b"+"
    } else if spec.flags.space_sign {
        b" "
    } else {
        b""
    }
}

/// Add the rounding half-unit at the position selected by the precision,
/// conversion style and compressed-notation adjustment. An overflow out of
/// the leading digit renormalizes into the exponent.
fn round_mantissa(mantissa: &mut u64, exponent: &mut i32, prec: usize, is_f: bool, compressed: bool) {
    let mut addend = DEC_1P0 * 5;
    let mut e = *exponent;

    if compressed {
        e %= 3;
        if e < 0 {
            e += 3;
        }
        if is_f {
            let absexp = (*exponent).abs();
            if absexp > COMP_EXP_LIMIT {
                e += absexp - COMP_EXP_LIMIT;
            }
        }
    }
    if !is_f {
        // e/E always has one digit left of the decimal point.
        if e < 0 {
            e += 1;
        }
        e = e.abs();
    }
    let shift = (e + prec as i32 + 1).max(0);
    for _ in 0..shift {
        addend /= 10;
    }
    *mantissa += addend;

    // Catch integer-portion overflow.
    if *mantissa >= DEC_1P0 * 10 {
        *mantissa = (*mantissa + 5) / 10;
        *exponent += 1;
    }
}

/// Convert the top `digits_to_convert` of a `digits_total`-digit mantissa
/// into characters. Returns the count written.
fn mant_to_char(buf: &mut [u8], mut m: u64, digits_total: i32, digits_to_convert: i32) -> usize {
    for _ in 0..(digits_total - digits_to_convert).max(0) {
        m /= 10;
    }
    let n = digits_to_convert.max(0) as usize;
    for i in (0..n).rev() {
        buf[i] = b'0' + (m % 10) as u8;
        m /= 10;
    }
    n
}

/// The unified `e`/`f` layout engine; `g`/`G` select into it.
pub(crate) fn conv_efg(
    spec: &mut FormatSpec<'_>,
    code: u8,
    sink: &mut dyn Sink,
    dec: Decoded,
) -> Result<usize> {
    let mut mantissa = dec.mantissa;
    let mut exponent = dec.exponent;
    let mut code = code;
    let mut really_g = false;

    if code == b'g' || code == b'G' {
        really_g = true;
        // Engineering notation and g do not mix.
        spec.flags.bang = false;

        // Normalize the precision once: absent is 6, zero is taken as 1.
        let mut p = spec.precision.unwrap_or(6);
        if p == 0 {
            p = 1;
        }
        spec.precision = Some(p);

        // Style e only if the exponent is < -4 or >= the precision.
        code = if exponent < -4 || exponent >= p as i32 {
            if code == b'g' {
                b'e'
            } else {
                b'E'
            }
        } else if code == b'g' {
            b'f'
        } else {
            b'F'
        };
    }
    let is_f = code == b'f' || code == b'F';

    let mut prec = spec.precision.unwrap_or(6);
    if really_g && !is_f {
        // g counts significant digits: one leading digit plus prec-1
        // fraction digits in the e style.
        prec = prec.saturating_sub(1);
    }

    let pfx = sign_prefix(spec, dec.sign);

    round_mantissa(&mut mantissa, &mut exponent, prec, is_f, spec.flags.bang);

    // Trim trailing zeros and count the significant figures left.
    let mut sigfig = 0i32;
    if mantissa != 0 {
        sigfig = DEC_SIG_FIG as i32;
        while sigfig > 0 && mantissa % 10 == 0 {
            sigfig -= 1;
            mantissa /= 10;
        }
    }

    // Digits on each side of the decimal point.
    let mut si = 0u8;
    let n_left: i32;
    if is_f {
        if spec.flags.bang {
            let mut idx = (SI_TABLE.len() / 2) as i32;
            while idx > 0 && idx < (SI_TABLE.len() - 1) as i32 {
                if exponent >= 3 {
                    idx += 1;
                    exponent -= 3;
                    continue;
                }
                if exponent < 0 {
                    idx -= 1;
                    exponent += 3;
                    continue;
                }
                break;
            }
            si = SI_TABLE[idx as usize];
        }
        n_left = if exponent > -1 { 1 + exponent } else { 0 };
    } else {
        let mut left = 1;
        if spec.flags.bang {
            // Engineering format forces the exponent to a multiple of 3.
            let mut m = exponent % 3;
            if m < 0 {
                m += 3;
            }
            left += m;
            exponent -= m;
        }
        n_left = left;
    }

    let mut n_right = (sigfig - n_left).max(0).min(prec as i32);

    // g strips extraneous digits and trailing fractional zeros (the #
    // flag restores them through the trailing-zero section below).
    if really_g {
        let mut m = mantissa;
        let mut i = sigfig;
        while i > n_left + n_right {
            m /= 10;
            i -= 1;
        }
        while n_right > 0 && m % 10 == 0 {
            m /= 10;
            n_right -= 1;
        }
    }

    // Length of the generated text, section by section.
    let mut pz1 = 0usize;
    let mut pz2 = 0i32;
    let mut pz3 = 0usize;
    let mut pz4 = 0usize;
    let mut n_exp = 0usize;
    let mut length = pfx.len() + n_left.max(0) as usize + n_right as usize;

    if is_f {
        // Nothing left of the point still needs a '0'.
        if n_left == 0 {
            pz1 = 1;
            length += 1;
        }
        if n_left > sigfig {
            pz2 = n_left - sigfig;
        }
        // Zeros between the point and the first significant digit.
        if exponent < -1 && prec > 0 {
            let x = (-1 - exponent) as usize;
            pz3 = x.min(prec);
            length += pz3;
        }
        if si != 0 {
            length += 1;
        }
    } else {
        let mut i = exponent.abs();
        while i > 0 {
            n_exp += 1;
            i /= 10;
        }
        n_exp = n_exp.max(2);
        // 'e' plus the exponent sign plus its digits.
        length += 2 + n_exp;
    }

    // Trailing zeros up to the precision; g suppresses them unless '#'.
    if (pz3 + n_right as usize) < prec && !(really_g && !spec.flags.alt_form) {
        pz4 = prec - pz3 - n_right as usize;
        length += pz4;
    } else if is_f && pz3 + n_right as usize > prec {
        let x = pz3 + n_right as usize - prec;
        length -= x;
        n_right -= x as i32;
    }

    let want_dp = pz3 > 0 || pz4 > 0 || n_right > 0 || spec.flags.alt_form;
    if want_dp {
        length += 1;
    }

    let (mut ps1, ps2) = calc_space_padding(spec, length);
    if spec.flags.zero_pad {
        pz1 += ps1;
        ps1 = 0;
    }

    // Emit, reusing one small digit buffer per section.
    let mut digits = [0u8; DEC_SIG_FIG as usize];
    let mut count = 0;
    let mut sigfig = sigfig;

    // Left of the point, with leading spaces, sign and zero padding.
    let e_n = if n_left > 0 {
        mant_to_char(&mut digits, mantissa, sigfig, n_left - pz2)
    } else {
        0
    };
    sigfig -= e_n as i32;
    count += gen_out(sink, ps1, pfx, pz1, &digits[..e_n], 0)?;

    // Zeros between the significant digits and the point.
    count += gen_out(sink, 0, &[], pz2.max(0) as usize, &[], 0)?;

    // The point and the fraction digits.
    let e_n = if n_right > 0 {
        mant_to_char(&mut digits, mantissa, sigfig, n_right)
    } else {
        0
    };
    let dp: &[u8] = if want_dp { b"." } else { b"" };
    count += gen_out(sink, 0, dp, pz3, &digits[..e_n], 0)?;

    // Trailing zeros.
    count += gen_out(sink, 0, &[], pz4, &[], 0)?;

    // Exponent field: letter, sign, at least two digits.
    if n_exp > 0 {
        let epfx = [code, if exponent < 0 { b'-' } else { b'+' }];
        let mut absexp = exponent.unsigned_abs();
        for i in (0..n_exp).rev() {
            digits[i] = b'0' + (absexp % 10) as u8;
            absexp /= 10;
        }
        count += gen_out(sink, 0, &epfx, 0, &digits[..n_exp], 0)?;
    }

    // SI multiplier suffix and trailing spaces.
    let suffix: &[u8] = if si != 0 {
        core::slice::from_ref(&si)
    } else {
        &[]
    };
    count += gen_out(sink, 0, &[], 0, suffix, ps2)?;

    Ok(count)
}
