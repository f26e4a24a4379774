//! The micro tier: an extremely small engine for 16-bit targets.
//!
//! Supports `%d %u %x %X %b %c %s %p %%` with the ` + - 0` flags, literal
//! width and precision up to 80, and nothing else: no `*`, no length
//! qualifiers, no continuation, no grouping, no floating point. All
//! numeric values are 16-bit. Output goes through a single-byte putter
//! rather than a run-oriented sink.
//!
//! This tier deliberately diverges from the other two in one place: a
//! null `%s` argument prints a single `?`, ignoring flags, width and
//! precision.

use crate::args::{Args, Text};
use crate::sink::PutByte;
use crate::{BadFormat, Result};

/// Maximum field width and precision for the micro tier.
pub const MICRO_MAXWIDTH: usize = 80;
/// Maximum precision for the micro tier.
pub const MICRO_MAXPREC: usize = 80;

/// Scratch length: 16 binary digits of a 16-bit value.
const BUFLEN: usize = 16;

const DIGITS: [u8; 16] = *b"0123456789ABCDEF";

#[derive(Default, Clone, Copy)]
struct MicroSpec {
    space_sign: bool,
    force_sign: bool,
    left_justify: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
}

fn put_run(out: &mut dyn PutByte, fill: u8, n: usize) -> Result<()> {
    for _ in 0..n {
        out.put_byte(fill)?;
    }
    Ok(())
}

fn calc_space_padding(spec: &MicroSpec, length: usize) -> (usize, usize) {
    let deficit = spec.width.saturating_sub(length);
    if spec.left_justify {
        (0, deficit)
    } else {
        (deficit, 0)
    }
}

fn conv_s(spec: &MicroSpec, args: &mut Args<'_, '_>, out: &mut dyn PutByte) -> Result<usize> {
    let text = match args.next_str()? {
        Some(t) => t,
        None => {
            // Null prints a single '?'; everything else is ignored.
            out.put_byte(b'?')?;
            return Ok(1);
        }
    };
    let mut length = text.measure();
    if let Some(p) = spec.precision {
        length = length.min(p);
    }
    let (ps1, ps2) = calc_space_padding(spec, length);
    put_run(out, b' ', ps1)?;
    for i in 0..length {
        out.put_byte(text.byte_at(i).unwrap_or(0))?;
    }
    put_run(out, b' ', ps2)?;
    Ok(ps1 + length + ps2)
}

fn conv_numeric(
    spec: &MicroSpec,
    args: &mut Args<'_, '_>,
    code: u8,
    base: u32,
    signed: bool,
) -> Result<(u8, usize, [u8; BUFLEN], usize)> {
    let mut buf = [0u8; BUFLEN];
    let mut pfx_c = 0u8;
    let mut pfx_n = 0usize;

    let mut uv: u16 = if signed {
        let v = args.next_int()? as i16;
        if v < 0 {
            pfx_c = b'-';
        } else if spec.force_sign {
            pfx_c = b'+';
        } else if spec.space_sign {
            pfx_c = b' ';
        }
        if pfx_c != 0 {
            pfx_n = 1;
        }
        v.unsigned_abs()
    } else {
        args.next_uint()? as u16
    };

    let mut digit_width = 0usize;
    while uv != 0 {
        let mut cc = DIGITS[(u32::from(uv) % base) as usize];
        uv = (u32::from(uv) / base) as u16;
        if code == b'x' {
            cc |= 0x20;
        }
        digit_width += 1;
        buf[BUFLEN - digit_width] = cc;
    }
    Ok((pfx_c, pfx_n, buf, digit_width))
}

fn do_conv(
    spec: &mut MicroSpec,
    args: &mut Args<'_, '_>,
    code: u8,
    out: &mut dyn PutByte,
) -> Result<usize> {
    if code == b'%' {
        out.put_byte(b'%')?;
        return Ok(1);
    }
    if code == b'c' {
        out.put_byte(args.next_int()? as u8)?;
        return Ok(1);
    }
    if code == b's' {
        return conv_s(spec, args, out);
    }

    let mut code = code;
    if code == b'p' {
        // 16-bit pointers: four zero-padded hex digits.
        code = b'X';
        spec.width = 4;
        spec.precision = Some(4);
    }

    let (signed, base) = match code {
        b'd' => (true, 10),
        b'u' => (false, 10),
        b'x' | b'X' => (false, 16),
        b'b' => (false, 2),
        _ => return Err(BadFormat),
    };

    let (pfx_c, pfx_n, buf, digit_width) = conv_numeric(spec, args, code, base, signed)?;

    let prec = match spec.precision {
        None => 1,
        Some(p) => {
            spec.zero_pad = false;
            p
        }
    };
    let num_width = digit_width.max(prec);
    let length = pfx_n + num_width;

    let (mut ps1, ps2) = calc_space_padding(spec, length);
    let mut pz = num_width - digit_width;
    if spec.zero_pad {
        pz += ps1;
        ps1 = 0;
    }

    put_run(out, b' ', ps1)?;
    if pfx_n > 0 {
        out.put_byte(pfx_c)?;
    }
    put_run(out, b'0', pz)?;
    for &b in &buf[BUFLEN - digit_width..] {
        out.put_byte(b)?;
    }
    put_run(out, b' ', ps2)?;
    Ok(ps1 + pfx_n + pz + digit_width + ps2)
}

/// Interpret `template`, sending each byte to `out`.
///
/// Returns the number of bytes emitted, or the format sentinel.
pub fn microformat(out: &mut dyn PutByte, template: &[u8], args: &mut Args<'_, '_>) -> Result<usize> {
    let text = Text::Normal(template);
    let mut pos = 0usize;
    let mut emitted = 0usize;

    while let Some(b) = text.byte_at(pos) {
        if b != b'%' {
            out.put_byte(b)?;
            emitted += 1;
            pos += 1;
            continue;
        }
        pos += 1;

        let mut spec = MicroSpec::default();
        while let Some(c) = text.byte_at(pos) {
            match c {
                b' ' => spec.space_sign = true,
                b'+' => spec.force_sign = true,
                b'-' => spec.left_justify = true,
                b'0' => spec.zero_pad = true,
                _ => break,
            }
            pos += 1;
        }

        while let Some(c) = text.byte_at(pos) {
            if !c.is_ascii_digit() {
                break;
            }
            spec.width = spec.width * 10 + usize::from(c - b'0');
            if spec.width > MICRO_MAXWIDTH {
                return Err(BadFormat);
            }
            pos += 1;
        }

        if text.byte_at(pos) == Some(b'.') {
            pos += 1;
            let mut p = 0usize;
            while let Some(c) = text.byte_at(pos) {
                if !c.is_ascii_digit() {
                    break;
                }
                p = p * 10 + usize::from(c - b'0');
                if p > MICRO_MAXPREC {
                    return Err(BadFormat);
                }
                pos += 1;
            }
            spec.precision = Some(p);
        }

        let code = text.byte_at(pos).ok_or(BadFormat)?;
        pos += 1;
        emitted += do_conv(&mut spec, args, code, out)?;
    }

    Ok(emitted)
}
