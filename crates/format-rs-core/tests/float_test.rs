//! Integration test: floating-point conversions `e E f F g G`, the
//! engineering/SI notation, fixed-point `%k`, and the inf/NaN renderer.
//!
//! The engine decodes doubles with pure integer arithmetic and rounds
//! half-away-from-zero, matching the reference library rather than IEEE
//! round-to-even in tie cases.
//!
//! Run: cargo test -p format-rs-core --test float_test

use format_rs_core::{args, format, Arg, Args, BadFormat, SliceSink};

fn fmt(template: &str, list: &[Arg<'_>]) -> Result<(String, usize), BadFormat> {
    let mut buf = [0u8; 600];
    let mut sink = SliceSink::new(&mut buf);
    let n = format(&mut sink, template, &mut Args::new(list))?;
    assert_eq!(n, sink.len(), "return disagrees with sink length");
    Ok((String::from_utf8(sink.written().to_vec()).unwrap(), n))
}

macro_rules! check {
    ($expect:expr, $ret:expr, $fmt:expr $(, $arg:expr)*) => {{
        let list = args!($($arg),*);
        let (out, n) = fmt($fmt, &list).expect($fmt);
        assert_eq!(out, $expect, "output of {:?}", $fmt);
        assert_eq!(n, $ret, "return of {:?}", $fmt);
    }};
}

macro_rules! fail {
    ($fmt:expr $(, $arg:expr)*) => {{
        let list = args!($($arg),*);
        assert_eq!(fmt($fmt, &list).unwrap_err(), BadFormat, "{:?}", $fmt);
    }};
}

// ---------------------------------------------------------------------
// 1. Infinities and NaNs
// ---------------------------------------------------------------------

#[test]
fn infinities() {
    check!("inf", 3, "%e", f64::INFINITY);
    check!("+inf", 4, "%+e", f64::INFINITY);
    check!("-inf", 4, "%e", f64::NEG_INFINITY);
    check!("INF", 3, "%E", f64::INFINITY);
    check!("+INF", 4, "%+E", f64::INFINITY);
    check!("-INF", 4, "%E", f64::NEG_INFINITY);
    check!("inf", 3, "%f", f64::INFINITY);
    check!("-inf", 4, "%f", f64::NEG_INFINITY);
    check!("+inf", 4, "%+f", f64::INFINITY);
    check!(" inf", 4, "% f", f64::INFINITY);
    check!("INF", 3, "%F", f64::INFINITY);
    check!("+INF", 4, "%+F", f64::INFINITY);
}

#[test]
fn nans() {
    check!("nan", 3, "%f", f64::NAN);
    check!("nan", 3, "%e", f64::NAN);
    check!("nan", 3, "%g", f64::NAN);
    check!("NAN", 3, "%F", f64::NAN);
    check!("NAN", 3, "%E", f64::NAN);
}

#[test]
fn specials_pad_like_any_field() {
    check!("   inf", 6, "%6f", f64::INFINITY);
    check!("  -inf", 6, "%6f", f64::NEG_INFINITY);
    check!("inf   ", 6, "%-6f", f64::INFINITY);
    check!("-inf  ", 6, "%-6f", f64::NEG_INFINITY);
    check!("  inf ", 6, "%^6f", f64::INFINITY);
    check!(" inf  ", 6, "%-^6f", f64::INFINITY);
    check!(" -inf ", 6, "%^6f", f64::NEG_INFINITY);
}

// ---------------------------------------------------------------------
// 2. %e / %E
// ---------------------------------------------------------------------

#[test]
fn e_basics() {
    check!("1.0e+00", 7, "%.1e", 1.0);
    check!("+1.0e+00", 8, "%+.1e", 1.0);
    check!("1.0e-01", 7, "%.1e", 0.1);
    check!("1.1e+00", 7, "%.1e", 1.1);
    check!("1.000000e+00", 12, "%e", 1.0);
    check!("1.000000E+00", 12, "%E", 1.0);
    check!("0.000000e+00", 12, "%e", 0.0);
    check!("1.234567e+123", 13, "%e", 1.234567e+123);
    check!("1.234500e-05", 12, "%e", 1.2345e-5);
    check!("+3e+00", 6, "%+.0e", 3.1416);
    check!("3.141600E+00", 12, "%E", 3.1416);
}

#[test]
fn e_rounding() {
    check!("1.0e+00", 7, "%.1e", 0.999);
    check!("1e+00", 5, "%.0e", 1.0);
    check!("1.e+00", 6, "%#.0e", 1.0);
}

#[test]
fn e_field_layout() {
    check!("-000001.0e+00", 13, "%013.1e", -1.0);
    check!("     -1.0e+00", 13, "% 13.1e", -1.0);
    check!("-1.0e+00     ", 13, "%-13.1e", -1.0);
    check!("   -1.0e+00  ", 13, "%^13.1e", -1.0);
}

#[test]
fn e_denormals_and_limits() {
    // The smallest positive double is a denormal.
    check!("4.94e-324", 9, "%.2e", f64::from_bits(1));
    check!("-4.94e-324", 10, "%.2e", f64::from_bits(1 | 1 << 63));
    // The smallest normal double.
    check!("2.22e-308", 9, "%.2e", f64::MIN_POSITIVE);
    check!("-2.22e-308", 10, "%.2e", -f64::MIN_POSITIVE);
}

// ---------------------------------------------------------------------
// 3. %f / %F
// ---------------------------------------------------------------------

#[test]
fn f_basics() {
    check!("0.000000", 8, "%f", 0.0);
    check!("0", 1, "%.0f", 0.0);
    check!("1.0", 3, "%.1f", 1.0);
    check!("0.1", 3, "%.1f", 0.1);
    check!("10.010", 6, "%.3f", 10.010);
    check!("3.14", 4, "%4.2f", 3.1416);
    check!("1200.00", 7, "%.2f", 1200.0);
}

#[test]
fn f_signs() {
    check!("+1.0", 4, "%+.1f", 1.0);
    check!(" 1.0", 4, "% .1f", 1.0);
    check!("-1.0", 4, "%.1f", -1.0);
}

#[test]
fn f_field_layout() {
    check!("   1.0", 6, "%6.1f", 1.0);
    check!("1.0   ", 6, "%-6.1f", 1.0);
    check!("  1.0 ", 6, "%^6.1f", 1.0);
    check!("+001.0", 6, "%+06.1f", 1.0);
    check!("001.0 ", 6, "%^06.1f", 1.0);
}

#[test]
fn f_rounding() {
    check!("1.00", 4, "%.2f", 0.999);
    check!("1234.568", 8, "%.3f", 1234.5678);
    check!("12.4", 4, "%.1f", 12.449);
    check!("12.45", 5, "%.2f", 12.449);
    check!("1", 1, "%1.f", 0.99);
}

#[test]
fn f_small_magnitudes() {
    check!("0.000100", 8, "%.6f", 0.0001);
    // Below the precision everything rounds away.
    check!("0.000000", 8, "%.6f", 0.0000001);
    check!("0.0000001000", 12, "%.10f", 0.0000001);
}

#[test]
fn f_large_magnitudes() {
    // The integer decoder carries 16 significant digits; below them the
    // residual conversion error shows, exactly as in the reference.
    check!("100000000000000500000", 21, "%.0f", 1e20);
}

// ---------------------------------------------------------------------
// 4. %g / %G
// ---------------------------------------------------------------------

#[test]
fn g_style_choice() {
    // e only when the exponent is < -4 or >= the precision.
    check!("1.2345e-05", 10, "%g", 1.2345e-5);
    check!("0.000123", 8, "%g", 1.2345e-4);
    check!("12.35", 5, "%.2g", 12.345);
    check!("1.2e+02", 7, "%.2g", 123.45);
    check!("1.2e+03", 7, "%.2g", 1234.5);
    check!("1.2E+03", 7, "%.2G", 1234.5);
}

#[test]
fn g_precision_zero_is_one() {
    check!("1.2", 3, "%.0g", 1.2345);
}

#[test]
fn g_trailing_zero_trim() {
    // Trailing fractional zeros go away unless '#' keeps them.
    check!("1.23", 4, "%.4g", 1.23);
    check!("1.2300", 6, "%#.4g", 1.23);
    check!("123", 3, "%.6g", 123.0);
    check!("123.000000", 10, "%#.6g", 123.0);
    check!("123.4", 5, "%.6g", 123.4);
    // The decimal point appears only when digits follow it.
    check!("1", 1, "%.1g", 1.01);
    check!("1.01", 4, "%.2g", 1.01);
    check!("0", 1, "%g", 0.0);
}

// ---------------------------------------------------------------------
// 5. Engineering and SI notation
// ---------------------------------------------------------------------

#[test]
fn engineering_e() {
    // '!' forces the exponent to a multiple of three.
    check!("12.345e+03", 10, "%!.3e", 12345.0);
    check!("12.345e-03", 10, "%!.3e", 0.012345);
}

#[test]
fn si_f() {
    // In-range values pick up an SI multiplier suffix.
    check!("123.45", 6, "%!.2f", 123.45);
    check!("1.2345", 6, "%!.4f", 1.2345);
    check!("12.345k", 7, "%!.3f", 12345.0);
    check!("12.345m", 7, "%!.3f", 0.012345);
    check!("1234.5Y", 7, "%!.1f", 1.2345e+27);
    check!("123.45Y", 7, "%!.2f", 123.45e+24);
    check!("0.12345y", 8, "%!.5f", 0.12345e-24);
    check!("1.2345y", 7, "%!.4f", 1.2345e-24);
}

// ---------------------------------------------------------------------
// 6. Fixed point %k
// ---------------------------------------------------------------------

#[test]
fn fixed_point_defaults_to_16_16() {
    check!("0.000000", 8, "%k", 0);
    check!("1.000000", 8, "%k", 0x1_0000);
    check!("1.50", 4, "%.2k", 0x1_8000);
    check!("-1.50", 5, "%.2k", -0x1_8000);
    check!("256.00", 6, "%.2k", 0x100_0000);
}

#[test]
fn fixed_point_custom_widths() {
    check!("0.500000", 8, "%{8.8}k", 0x80);
    check!("1.500000", 8, "%{8.8}k", 0x180);
    check!("-0.50", 5, "%.2{8.8}k", -0x80);
    check!("5.00", 4, "%.2{8.0}k", 5);
}

#[test]
fn long_double_is_rejected() {
    fail!("%Le", 1.0);
    fail!("%Lf", 1.0);
    fail!("%Lg", 1.0);
}
