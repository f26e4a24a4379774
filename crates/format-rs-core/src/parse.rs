//! Format-template parser and conversion dispatcher.
//!
//! The scan loop emits literal runs between `%` signs (a whole run per
//! sink call for normal templates; alternate-space templates go byte by
//! byte), parses one [`FormatSpec`] per conversion, and routes it to the
//! matching converter. A template that ends inside a specifier triggers
//! the continuation feature: the next argument supplies a new template,
//! read from alternate memory when it arrives as alternate-space text.

use crate::args::{Args, Text};
use crate::compose::gen_out;
use crate::conv;
use crate::sink::{emit, Sink, SliceSink};
#[cfg(feature = "grouping")]
use crate::spec::Grouping;
use crate::spec::{FormatSpec, Qualifier, MAXBASE, MAXPREC, MAXWIDTH};
use crate::{BadFormat, Result};

/// Format `template`, sending the output to `sink`.
///
/// Returns the total number of bytes handed to the sink, or the format
/// sentinel on any parse error, sink refusal, or argument mismatch.
pub fn format(sink: &mut dyn Sink, template: &str, args: &mut Args<'_, '_>) -> Result<usize> {
    format_bytes(sink, Text::from(template), args)
}

/// [`format`] over a raw, possibly alternate-space, template.
pub fn format_bytes(sink: &mut dyn Sink, template: Text<'_>, args: &mut Args<'_, '_>) -> Result<usize> {
    let mut text = template;
    let mut pos = 0usize;
    let mut emitted = 0usize;

    loop {
        // Emit the literal run up to the next '%' or the terminator.
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
        pos += 1; // skip the '%'

        let mut spec = FormatSpec::new();

        // Flags.
        while let Some(b) = text.byte_at(pos) {
            match b {
                b' ' => spec.flags.space_sign = true,
                b'+' => spec.flags.force_sign = true,
                b'-' => spec.flags.left_justify = true,
                b'#' => spec.flags.alt_form = true,
                b'0' => spec.flags.zero_pad = true,
                b'!' => spec.flags.bang = true,
                b'^' => spec.flags.center = true,
                _ => break,
            }
            pos += 1;
        }

        // Width: digits, or '*' drawing an int whose sign selects MINUS.
        if text.byte_at(pos) == Some(b'*') {
            pos += 1;
            let mut v = args.next_int()?;
            if v < 0 {
                v = -v;
                spec.flags.left_justify = true;
            }
            spec.width = v as usize;
        } else {
            while let Some(b) = text.byte_at(pos) {
                if !b.is_ascii_digit() {
                    break;
                }
                spec.width = spec.width * 10 + usize::from(b - b'0');
                if spec.width > MAXWIDTH {
                    return Err(BadFormat);
                }
                pos += 1;
            }
        }
        if spec.width > MAXWIDTH {
            return Err(BadFormat);
        }

        // Precision, present only after '.'.
        if text.byte_at(pos) == Some(b'.') {
            pos += 1;
            if text.byte_at(pos) == Some(b'*') {
                pos += 1;
                let v = args.next_int()?;
                if v < 0 {
                    spec.precision = None;
                } else if v as usize > MAXPREC {
                    return Err(BadFormat);
                } else {
                    spec.precision = Some(v as usize);
                }
            } else {
                let mut p = 0usize;
                while let Some(b) = text.byte_at(pos) {
                    if !b.is_ascii_digit() {
                        break;
                    }
                    p = p * 10 + usize::from(b - b'0');
                    if p > MAXPREC {
                        return Err(BadFormat);
                    }
                    pos += 1;
                }
                spec.precision = Some(p);
            }
        }

        // Base override, present only after ':'. Zero (an empty digit
        // string, or a small '*' value) means "absent"; a literal 1 and
        // anything above 36 fail.
        if text.byte_at(pos) == Some(b':') {
            pos += 1;
            if text.byte_at(pos) == Some(b'*') {
                pos += 1;
                let v = args.next_int()?;
                if v > i64::from(MAXBASE) {
                    return Err(BadFormat);
                }
                spec.base = if v < 2 { None } else { Some(v as u32) };
            } else {
                let mut b = 0u32;
                while let Some(c) = text.byte_at(pos) {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    b = b * 10 + u32::from(c - b'0');
                    if b > MAXBASE {
                        return Err(BadFormat);
                    }
                    pos += 1;
                }
                spec.base = match b {
                    0 => None,
                    1 => return Err(BadFormat),
                    _ => Some(b),
                };
            }
        }

        // Grouping span, captured lazily: record the bracketed range and
        // let the integer converter parse it.
        #[cfg(feature = "grouping")]
        if text.byte_at(pos) == Some(b'[') {
            pos += 1;
            let start = pos;
            loop {
                match text.byte_at(pos) {
                    Some(b']') => break,
                    Some(_) => pos += 1,
                    None => return Err(BadFormat),
                }
            }
            spec.grouping = Some(Grouping {
                src: text,
                start,
                len: pos - start,
            });
            pos += 1;
        }

        // Fixed-point widths for %k: '{' digits? '.' digits? '}'.
        if text.byte_at(pos) == Some(b'{') {
            pos += 1;
            let mut w_int: Option<u32> = None;
            let mut w_frac: Option<u32> = None;
            let mut acc = 0u32;
            let mut seen = false;
            loop {
                match text.byte_at(pos) {
                    Some(c) if c.is_ascii_digit() => {
                        acc = acc.saturating_mul(10) + u32::from(c - b'0');
                        seen = true;
                        pos += 1;
                    }
                    Some(b'.') => {
                        if w_int.is_some() {
                            return Err(BadFormat);
                        }
                        w_int = Some(if seen { acc } else { 16 });
                        acc = 0;
                        seen = false;
                        pos += 1;
                    }
                    Some(b'}') => {
                        if w_int.is_none() {
                            return Err(BadFormat);
                        }
                        w_frac = Some(if seen { acc } else { 16 });
                        pos += 1;
                        break;
                    }
                    _ => return Err(BadFormat),
                }
            }
            spec.fixed_point = (w_int.unwrap_or(16), w_frac.unwrap_or(16));
        }

        // Length qualifier; doubled 'h'/'l' become the explicit variants.
        spec.qualifier = match text.byte_at(pos) {
            Some(b'h') => {
                pos += 1;
                if text.byte_at(pos) == Some(b'h') {
                    pos += 1;
                    Qualifier::Hh
                } else {
                    Qualifier::H
                }
            }
            Some(b'l') => {
                pos += 1;
                if text.byte_at(pos) == Some(b'l') {
                    pos += 1;
                    Qualifier::Ll
                } else {
                    Qualifier::L
                }
            }
            Some(b'j') => {
                pos += 1;
                Qualifier::J
            }
            Some(b'z') => {
                pos += 1;
                Qualifier::Z
            }
            Some(b't') => {
                pos += 1;
                Qualifier::T
            }
            Some(b'L') => {
                pos += 1;
                Qualifier::BigL
            }
            _ => Qualifier::None,
        };

        // Continuation: the terminator in place of a conversion letter
        // pulls a fresh template from the argument list. The argument's
        // own address-space tag decides how it is read, which is what the
        // HASH flag selected in the C original.
        let code = match text.byte_at(pos) {
            None => {
                text = args.next_str()?.ok_or(BadFormat)?;
                pos = 0;
                continue;
            }
            Some(c) => c,
        };

        if code == b'C' {
            pos += 1;
            spec.rep_char = text.byte_at(pos).ok_or(BadFormat)?;
        }

        spec.emitted = emitted;
        emitted += do_conv(&mut spec, args, code, sink)?;
        pos += 1;
    }
}

/// Format into a caller-provided byte slice (the `sprintf` shape).
///
/// Returns the number of bytes written. The buffer may hold partial
/// output after a failure; the count is only returned on success.
pub fn sformat(buf: &mut [u8], template: &str, args: &mut Args<'_, '_>) -> Result<usize> {
    let mut sink = SliceSink::new(buf);
    format(&mut sink, template, args)
}

/// Route one parsed conversion to its converter.
fn do_conv(
    spec: &mut FormatSpec<'_>,
    args: &mut Args<'_, '_>,
    code: u8,
    sink: &mut dyn Sink,
) -> Result<usize> {
    match code {
        b'n' => {
            if let Some(cell) = args.next_count()? {
                let v = spec.emitted as i64;
                cell.set(match spec.qualifier {
                    Qualifier::Hh => v as i8 as i64,
                    Qualifier::H => v as i16 as i64,
                    Qualifier::L
                    | Qualifier::Ll
                    | Qualifier::J
                    | Qualifier::Z
                    | Qualifier::T => v,
                    Qualifier::None | Qualifier::BigL => v as i32 as i64,
                });
            }
            Ok(0)
        }
        b'%' => gen_out(sink, 0, &[], 0, b"%", 0),
        b'c' | b'C' => conv::text::conv_char(spec, args, code, sink),
        b's' => conv::text::conv_str(spec, args, sink),
        #[cfg(feature = "fp")]
        b'e' | b'E' | b'f' | b'F' | b'g' | b'G' => conv::float::conv_fp(spec, args, code, sink),
        #[cfg(feature = "fp")]
        b'k' => conv::fixed::conv_fixed(spec, args, sink),
        b'p' => {
            // %p is a meta-conversion: rewrite to "%#!N.NX" where N is
            // twice the pointer byte width, then take the numeric path.
            let hex_digits = core::mem::size_of::<usize>() * 2;
            spec.flags = crate::spec::Flags {
                alt_form: true,
                bang: true,
                ..Default::default()
            };
            spec.width = hex_digits;
            spec.precision = Some(hex_digits);
            spec.qualifier = Qualifier::L;
            conv::int::conv_numeric(spec, args, b'X', 16, sink)
        }
        b'd' | b'i' | b'I' => {
            // Decimal signed; '#' carries only the computed sign prefix.
            spec.flags.signed_conv = true;
            spec.flags.alt_form = false;
            let base = match code {
                b'd' => 10,
                _ => spec.base.unwrap_or(10),
            };
            conv::int::conv_numeric(spec, args, code, base, sink)
        }
        b'u' | b'U' => {
            let base = spec.base.unwrap_or(10);
            conv::int::conv_numeric(spec, args, code, base, sink)
        }
        b'x' | b'X' => conv::int::conv_numeric(spec, args, code, 16, sink),
        b'o' => conv::int::conv_numeric(spec, args, code, 8, sink),
        b'b' => conv::int::conv_numeric(spec, args, code, 2, sink),
        _ => Err(BadFormat),
    }
}
