//! Fuzz the double decoder: every 64-bit pattern is a valid double, and
//! the decomposition invariants must hold for all of them.

#![no_main]
use libfuzzer_sys::fuzz_target;

use format_rs_core::conv::radix::{radix_convert, DEC_1P0, EXP_SENTINEL};

fuzz_target!(|data: [u8; 8]| {
    let v = f64::from_bits(u64::from_le_bytes(data));
    let d = radix_convert(v);

    if v.is_nan() {
        assert_eq!(d.exponent, EXP_SENTINEL);
        assert!(d.mantissa != 0);
        return;
    }
    if v.is_infinite() {
        assert_eq!(d.exponent, EXP_SENTINEL);
        assert_eq!(d.mantissa, 0);
        assert_eq!(d.sign, v.is_sign_negative());
        return;
    }

    assert_eq!(d.sign, v.is_sign_negative());
    if v == 0.0 {
        assert_eq!((d.mantissa, d.exponent), (0, 0));
    } else {
        // Finite non-zero: exactly one leading decimal digit.
        assert!(d.mantissa >= DEC_1P0, "leading digit zero for {v:e}");
        assert!(d.mantissa < DEC_1P0 * 10, "mantissa overflow for {v:e}");
        assert!((-324..=308).contains(&d.exponent), "exponent for {v:e}");
    }
});
