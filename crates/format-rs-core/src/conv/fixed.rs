//! Fixed-point conversion `%k`.
//!
//! The argument is a signed fixed-point integer whose integer/fraction
//! split comes from the `{w_int.w_frac}` template modifier (16.16 by
//! default). The value is repacked as a synthetic IEEE-754 double —
//! sign from the top bit, exponent from the highest set bit relative to
//! the fraction width, mantissa shifted until the hidden bit pops out —
//! and then handed to the `%f` layout with the requested precision.

use crate::args::Args;
use crate::sink::Sink;
use crate::spec::FormatSpec;
use crate::{BadFormat, Result};

use super::float::conv_efg;
use super::radix::{radix_convert, Decoded};

const MANT_WIDTH: u32 = 52;
const MANT_MASK: u64 = (1 << MANT_WIDTH) - 1;
const EXP_BIAS: i64 = 1023;

pub(crate) fn conv_fixed(
    spec: &mut FormatSpec<'_>,
    args: &mut Args<'_, '_>,
    sink: &mut dyn Sink,
) -> Result<usize> {
    let (w_int, w_frac) = spec.fixed_point;
    let total_bits = w_int + w_frac;
    if total_bits == 0 || total_bits > 64 {
        return Err(BadFormat);
    }

    let raw = args.next_int()?;
    let dec = if raw == 0 {
        Decoded {
            sign: false,
            mantissa: 0,
            exponent: 0,
        }
    } else {
        let sign = (raw >> (total_bits - 1)) & 1 != 0;
        let v = if sign { raw.wrapping_neg() } else { raw };
        let value_mask = if total_bits == 64 {
            u64::MAX >> 1
        } else {
            (1u64 << (total_bits - 1)) - 1
        };
        let masked = (v as u64) & value_mask;

        if masked == 0 {
            // The most negative representable value: a pure power of two,
            // so the mantissa bits are all zero.
            let exponent = i64::from(total_bits - 1) - i64::from(w_frac);
            radix_convert(pack(sign, exponent, 0))
        } else {
            let top_bit = 63 - i64::from(masked.leading_zeros());
            let exponent = top_bit - i64::from(w_frac);
            // Shift until the top bit pops out of the mantissa field; it
            // is then masked away, which is exactly the implied "1.".
            let mut mantissa = masked;
            while mantissa & !MANT_MASK == 0 {
                mantissa <<= 1;
            }
            radix_convert(pack(sign, exponent, mantissa & MANT_MASK))
        }
    };

    conv_efg(spec, b'f', sink, dec)
}

fn pack(sign: bool, exponent: i64, mantissa: u64) -> f64 {
    let bits = (u64::from(sign) << 63) | (((exponent + EXP_BIAS) as u64 & 0x7FF) << MANT_WIDTH)
        | mantissa;
    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_reproduces_small_values() {
        // 1.0: exponent 0, empty mantissa.
        assert_eq!(pack(false, 0, 0), 1.0);
        // 1.5: top fraction bit set.
        assert_eq!(pack(false, 0, 1 << (MANT_WIDTH - 1)), 1.5);
        assert_eq!(pack(true, 1, 0), -2.0);
    }
}
