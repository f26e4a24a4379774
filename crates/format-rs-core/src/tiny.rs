//! The tiny tier: the micro conversion set over a run-oriented sink,
//! plus the format-continuation feature.
//!
//! Differences from the micro tier: output goes to a [`Sink`], a template
//! that ends inside a specifier continues into the next argument, and a
//! null `%s` renders as `(null)` like the full engine. Values are still
//! 16-bit and width/precision are still limited to 80; there is no
//! grouping and no floating point.

use crate::args::{Args, Text};
use crate::compose::gen_out;
use crate::sink::{emit, Sink};
use crate::{BadFormat, Result};

/// Maximum field width for the tiny tier.
pub const TINY_MAXWIDTH: usize = 80;
/// Maximum precision for the tiny tier.
pub const TINY_MAXPREC: usize = 80;

const BUFLEN: usize = 16;
const DIGITS: [u8; 16] = *b"0123456789ABCDEF";

#[derive(Default, Clone, Copy)]
struct TinySpec {
    space_sign: bool,
    force_sign: bool,
    left_justify: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
}

fn space_split(spec: &TinySpec, length: usize) -> (usize, usize) {
    let deficit = spec.width.saturating_sub(length);
    if spec.left_justify {
        (0, deficit)
    } else {
        (deficit, 0)
    }
}

fn conv_s(spec: &TinySpec, args: &mut Args<'_, '_>, sink: &mut dyn Sink) -> Result<usize> {
    let text = args.next_str()?.unwrap_or(Text::Normal(b"(null)"));
    let mut length = text.measure();
    if let Some(p) = spec.precision {
        length = length.min(p);
    }
    let (ps1, ps2) = space_split(spec, length);
    match text {
        Text::Normal(s) => gen_out(sink, ps1, &[], 0, &s[..length], ps2),
        Text::Alt(_) => {
            let mut n = gen_out(sink, ps1, &[], 0, &[], 0)?;
            for i in 0..length {
                n += gen_out(sink, 0, &[], 0, &[text.byte_at(i).unwrap_or(0)], 0)?;
            }
            n += gen_out(sink, 0, &[], 0, &[], ps2)?;
            Ok(n)
        }
    }
}

fn conv_numeric(
    spec: &mut TinySpec,
    args: &mut Args<'_, '_>,
    code: u8,
    base: u32,
    signed: bool,
    sink: &mut dyn Sink,
) -> Result<usize> {
    let mut buf = [0u8; BUFLEN];
    let mut prefix = 0u8;
    let mut pfx_n = 0usize;

    let mut uv: u16 = if signed {
        let v = args.next_int()? as i16;
        if v < 0 {
            prefix = b'-';
        } else if spec.force_sign {
            prefix = b'+';
        } else if spec.space_sign {
            prefix = b' ';
        }
        if prefix != 0 {
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

    let prec = match spec.precision {
        None => 1,
        Some(p) => {
            spec.zero_pad = false;
            p
        }
    };
    let num_width = digit_width.max(prec);
    let length = pfx_n + num_width;

    let (mut ps1, ps2) = space_split(spec, length);
    let mut pz = num_width - digit_width;
    if spec.zero_pad {
        pz += ps1;
        ps1 = 0;
    }

    let pfx: &[u8] = if pfx_n > 0 {
        core::slice::from_ref(&prefix)
    } else {
        &[]
    };
    gen_out(sink, ps1, pfx, pz, &buf[BUFLEN - digit_width..], ps2)
}

fn do_conv(
    spec: &mut TinySpec,
    args: &mut Args<'_, '_>,
    code: u8,
    sink: &mut dyn Sink,
) -> Result<usize> {
    if code == b'%' {
        return gen_out(sink, 0, &[], 0, b"%", 0);
    }
    if code == b'c' {
        let cc = args.next_int()? as u8;
        return gen_out(sink, 0, &[], 0, &[cc], 0);
    }
    if code == b's' {
        return conv_s(spec, args, sink);
    }

    let mut code = code;
    if code == b'p' {
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
    conv_numeric(spec, args, code, base, signed, sink)
}

/// Interpret `template`, streaming the output to `sink`.
///
/// Returns the number of bytes handed to the sink, or the format
/// sentinel.
pub fn tinyformat(sink: &mut dyn Sink, template: &[u8], args: &mut Args<'_, '_>) -> Result<usize> {
    let mut text: Text<'_> = Text::Normal(template);
    let mut pos = 0usize;
    let mut emitted = 0usize;

    loop {
        match text {
            Text::Normal(s) => {
                let rest = &s[pos.min(s.len())..];
                let n = rest
                    .iter()
                    .position(|&b| b == b'%')
                    .unwrap_or(rest.len());
                emit(sink, &rest[..n])?;
                emitted += n;
                pos += n;
            }
            Text::Alt(_) => {
                while let Some(b) = text.byte_at(pos) {
                    if b == b'%' {
                        break;
                    }
                    emit(sink, &[b])?;
                    emitted += 1;
                    pos += 1;
                }
            }
        }
        if text.byte_at(pos).is_none() {
            return Ok(emitted);
        }
        pos += 1;

        let mut spec = TinySpec::default();
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
            if spec.width > TINY_MAXWIDTH {
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
                if p > TINY_MAXPREC {
                    return Err(BadFormat);
                }
                pos += 1;
            }
            spec.precision = Some(p);
        }

        // Continuation.
        let code = match text.byte_at(pos) {
            None => {
                text = args.next_str()?.ok_or(BadFormat)?;
                pos = 0;
                continue;
            }
            Some(c) => c,
        };
        pos += 1;
        emitted += do_conv(&mut spec, args, code, sink)?;
    }
}
