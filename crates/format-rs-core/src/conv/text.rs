//! Character and string conversions: `%c`, `%C`, `%s`.

use crate::args::{Args, Text};
use crate::compose::{calc_space_padding, gen_out};
use crate::sink::{emit, pad_spaces, Sink};
use crate::spec::FormatSpec;
use crate::Result;

/// `%c` and `%C`: emit one character, repeated `max(1, precision)` times.
///
/// `%c` takes the character from the argument list, `%C` from the byte
/// captured inline in the template. Width and the other flags are ignored
/// for character output.
pub(crate) fn conv_char(
    spec: &FormatSpec<'_>,
    args: &mut Args<'_, '_>,
    code: u8,
    sink: &mut dyn Sink,
) -> Result<usize> {
    let cc = if code == b'c' {
        args.next_int()? as u8
    } else {
        spec.rep_char
    };
    let rep = spec.precision.unwrap_or(1).max(1);
    let mut n = 0;
    for _ in 0..rep {
        n += gen_out(sink, 0, &[], 0, &[cc], 0)?;
    }
    Ok(n)
}

/// `%s`: emit a string, truncated to the precision, padded to the width.
///
/// A null argument renders as the literal `(null)`. Alternate-space
/// strings are streamed one byte at a time; normal strings go out in a
/// single run.
pub(crate) fn conv_str(
    spec: &FormatSpec<'_>,
    args: &mut Args<'_, '_>,
    sink: &mut dyn Sink,
) -> Result<usize> {
    let text = args.next_str()?.unwrap_or(Text::Normal(b"(null)"));

    let mut length = text.measure();
    if let Some(p) = spec.precision {
        length = length.min(p);
    }
    let (ps1, ps2) = calc_space_padding(spec, length);

    match text {
        Text::Normal(s) => gen_out(sink, ps1, &[], 0, &s[..length], ps2),
        Text::Alt(_) => {
            pad_spaces(sink, ps1)?;
            for i in 0..length {
                // byte_at cannot hit the terminator below `length`.
                let b = text.byte_at(i).unwrap_or(0);
                emit(sink, &[b])?;
            }
            pad_spaces(sink, ps2)?;
            Ok(ps1 + length + ps2)
        }
    }
}
