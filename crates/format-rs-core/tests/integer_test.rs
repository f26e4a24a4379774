//! Integration test: the integer conversions `d i I b o u U x X` and the
//! rewritten `%p` — flags, width, precision, length qualifiers, custom
//! bases and digit grouping.
//!
//! Run: cargo test -p format-rs-core --test integer_test

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
// 1. %d / %i basics
// ---------------------------------------------------------------------

#[test]
fn signed_basics() {
    check!("0", 1, "%d", 0);
    check!("1234", 4, "%d", 1234);
    check!("-1234", 5, "%d", -1234);
    check!("1234", 4, "%i", 1234);
    // Precision zero with value zero emits no digits.
    check!("", 0, "%.0d", 0);
    check!("001234", 6, "%.6d", 1234);
}

#[test]
fn signed_width_and_justification() {
    check!("  1234", 6, "%6d", 1234);
    check!(" -1234", 6, "%6d", -1234);
    check!("1234", 4, "%2d", 1234);
    check!("1234", 4, "%02d", 1234);
    check!("1234  ", 6, "%-6d", 1234);
    check!("-1234 ", 6, "%-6d", -1234);
}

#[test]
fn signed_zero_flag() {
    check!("001234", 6, "%06d", 1234);
    check!("-01234", 6, "%06d", -1234);
    // '-' kills '0'.
    check!("1234  ", 6, "%-06d", 1234);
    // Precision kills '0'.
    check!("  1234", 6, "%06.1d", 1234);
    check!(" +1234", 6, "%+06.1d", 1234);
}

#[test]
fn signed_sign_flags() {
    check!("+1234", 5, "%+d", 1234);
    check!("-1234", 5, "%+d", -1234);
    check!(" 1234", 5, "% d", 1234);
    check!("-1234", 5, "% d", -1234);
    // The sign alone survives a zero-digit rendering.
    check!(" ", 1, "% .0d", 0);
    // '+' overrides the space.
    check!("+1234", 5, "%+ d", 1234);
    check!("-1234", 5, "%+ d", -1234);
    check!("+", 1, "%+ .0d", 0);
}

#[test]
fn signed_centering() {
    check!("  1234  ", 8, "%^8d", 1234);
}

#[test]
fn extremes() {
    check!("-9223372036854775808", 20, "%ld", i64::MIN);
    check!("9223372036854775807", 19, "%ld", i64::MAX);
    check!("18446744073709551615", 20, "%lu", u64::MAX);
}

// ---------------------------------------------------------------------
// 2. Length qualifiers
// ---------------------------------------------------------------------

#[test]
fn qualifiers_narrow_the_argument() {
    check!("24", 2, "%hd", 24);
    // h truncates to 16 bits, hh to 8.
    check!("-1", 2, "%hd", 65535);
    check!("-2", 2, "%hhd", 254);
    check!("255", 3, "%hhu", 0x1FFu32);
    check!("1234567890", 10, "%ld", 1234567890i64);
    check!("123456789123456789", 18, "%lld", 123456789123456789i64);
    check!("123456789123456789", 18, "%llu", 123456789123456789u64);
    check!("1B69B4BACD05F15", 15, "%llX", 123456789123456789u64);
    check!("1234567890", 10, "%jd", 1234567890i64);
    check!("1234567890", 10, "%zu", 1234567890u64);
    check!("1234567890", 10, "%td", 1234567890i64);
}

// ---------------------------------------------------------------------
// 3. Unsigned conversions in the standard bases
// ---------------------------------------------------------------------

#[test]
fn unsigned_basics() {
    check!("0", 1, "%b", 0);
    check!("0", 1, "%o", 0);
    check!("0", 1, "%u", 0);
    check!("0", 1, "%x", 0);
    check!("0", 1, "%X", 0);
    check!("1101", 4, "%b", 13);
    check!("1234", 4, "%o", 0o1234);
    check!("1234", 4, "%u", 1234u32);
    check!("1234abcd", 8, "%x", 0x1234abcdu32);
    check!("1234ABCD", 8, "%X", 0x1234ABCDu32);
}

#[test]
fn unsigned_precision_zero() {
    check!("", 0, "%.0b", 0);
    check!("", 0, "%.0o", 0);
    check!("", 0, "%.0u", 0);
    check!("", 0, "%.0x", 0);
    check!("", 0, "%.0X", 0);
}

#[test]
fn unsigned_precision() {
    check!("001101", 6, "%.6b", 13);
    check!("001234", 6, "%.6o", 0o1234);
    check!("001234", 6, "%.6u", 1234u32);
    check!("001234abcd", 10, "%.10x", 0x1234abcdu32);
    check!("001234ABCD", 10, "%.10X", 0x1234abcdu32);
}

#[test]
fn unsigned_width() {
    check!("  1101", 6, "%6b", 13);
    check!("1101", 4, "%2b", 13);
    check!("  1234", 6, "%6o", 0o1234);
    check!("  1234", 6, "%6u", 1234u32);
    check!("1234", 4, "%02u", 1234u32);
    check!("  1234abcd", 10, "%10x", 0x1234abcdu32);
    check!("1234abcd", 8, "%2x", 0x1234abcdu32);
}

#[test]
fn unsigned_justify_and_zero() {
    check!("1101  ", 6, "%-6b", 13);
    check!("1234abcd  ", 10, "%-10x", 0x1234abcdu32);
    check!("001101", 6, "%06b", 13);
    check!("1101  ", 6, "%-06b", 13);
    check!("  1101", 6, "%06.1b", 13);
    check!("001234abcd", 10, "%010x", 0x1234abcdu32);
    check!("1234abcd  ", 10, "%-010x", 0x1234abcdu32);
    check!("  1234abcd", 10, "%010.1x", 0x1234abcdu32);
}

#[test]
fn sign_flags_ignored_on_unsigned() {
    check!("1101", 4, "%+ b", 13);
    check!("1234", 4, "%+ o", 0o1234);
    check!("1234abcd", 8, "%+ x", 0x1234abcdu32);
}

// ---------------------------------------------------------------------
// 4. Alternate form and the bang flag
// ---------------------------------------------------------------------

#[test]
fn alternate_form() {
    // Zero earns no radix prefix.
    check!("0", 1, "%#b", 0);
    check!("0", 1, "%#o", 0);
    check!("0", 1, "%#x", 0);
    check!("0", 1, "%#X", 0);
    check!("0b1101", 6, "%#b", 13);
    check!("01234", 5, "%#o", 0o1234);
    check!("0x1234abcd", 10, "%#x", 0x1234abcdu32);
    check!("0X1234ABCD", 10, "%#X", 0x1234abcdu32);
    // '#' on decimal carries nothing.
    check!("1234", 4, "%!#d", 1234);
}

#[test]
fn bang_forces_prefix_and_lowercase() {
    check!("0b0", 3, "%!#b", 0);
    check!("0", 1, "%!#o", 0);
    check!("0x0", 3, "%!#x", 0);
    check!("0x0", 3, "%!#X", 0);
    check!("0x1234abcd", 10, "%!#x", 0x1234abcdu32);
    check!("0x1234ABCD", 10, "%!#X", 0x1234abcdu32);
    // Without '#', bang alone emits no prefix.
    check!("1101", 4, "%!b", 13);
    check!("1234abcd", 8, "%!x", 0x1234abcdu32);
}

#[test]
fn alternate_form_with_width_and_precision() {
    check!("  0b1101", 8, "%#8b", 13);
    check!("   01234", 8, "%#8o", 0o1234);
    check!("  0x1234abcd", 12, "%#12x", 0x1234abcdu32);
    check!("0b00001101", 10, "%#.8b", 13);
    check!("000001234", 9, "%#.8o", 0o1234);
    check!("0x00001234abcd", 14, "%#.12x", 0x1234abcdu32);
    check!("  0b00001101", 12, "%#12.8b", 13);
    check!("   000001234", 12, "%#12.8o", 0o1234);
    check!("  0x00001234abcd", 16, "%#16.12x", 0x1234abcdu32);
    check!("0b00001101  ", 12, "%-#12.8b", 13);
    check!("000001234   ", 12, "%-#12.8o", 0o1234);
}

#[test]
fn centering_numeric() {
    check!("  ABCD  ", 8, "%^8X", 0xABCDu32);
    check!(" 0XABCD ", 8, "%^#8X", 0xABCDu32);
    check!(" 0X0000ABCD ", 12, "%^#12.8X", 0xABCDu32);
}

// ---------------------------------------------------------------------
// 5. Digit grouping
// ---------------------------------------------------------------------

#[test]
fn grouping_basic() {
    check!("12,34", 5, "%[,2]d", 1234);
    check!("12,34,56", 8, "%[,2]d", 123456);
    // The '-' terminator applies the group once.
    check!("1234,56", 7, "%[-,2]d", 123456);
    check!("1,234.56", 8, "%[,3.2]d", 123456);
    check!("12,345,678.90", 13, "%[,3.2]d", 1234567890);
    // Degenerate patterns.
    check!("1234", 4, "%[_0]d", 1234);
    check!("1_2_3_4", 7, "%[_1]d", 1234);
    check!("12_34", 5, "%[_2]d", 1234);
    check!("1234", 4, "%[]d", 1234);
}

#[test]
fn grouping_with_precision() {
    // Precision zeros are not grouped; the separator pattern depends
    // only on the raw digits.
    check!("0012_34", 7, "%.6[_2]d", 1234);
    check!(" 0012_34", 8, "%8.6[_2]d", 1234);
    check!("0012_34 ", 8, "%-8.6[_2]d", 1234);
}

#[test]
fn grouping_other_bases() {
    check!("AB_CD", 5, "%[_2]X", 0xABCDu32);
    check!("1_1_1_1_0_0_0_0", 15, "%[_1]b", 0xF0);
    check!("1111_00_11", 10, "%[-_2_2]b", 0xF3);
}

#[test]
fn grouping_star_run_follows_value() {
    // A '*' run length is drawn after the conversion's value argument.
    check!("12,34", 5, "%[,*]d", 1234, 2);
    check!("1234", 4, "%[,*]d", 1234, 0);
}

// ---------------------------------------------------------------------
// 6. Custom bases
// ---------------------------------------------------------------------

#[test]
fn custom_bases() {
    check!("11", 2, "%:3i", 4);
    check!("11", 2, "%:*i", 3, 4);
    // An empty base means the default.
    check!("11", 2, "%:i", 11);
    // A negative or sub-2 '*' base means the default.
    check!("12", 2, "%:*i", -1, 12);
    check!("12", 2, "%:*i", 1, 12);
    // Digits beyond 9 come from the letter alphabet, cased by the
    // conversion letter.
    check!("g", 1, "%:17i", 16);
    check!("G", 1, "%:17I", 16);
    check!("-G", 2, "%:17I", -16);
    check!("XYZ", 3, "%:36I", 44027);
    check!("  0XYZ", 6, "%6.4:36I", 44027);
    check!("11", 2, "%:3u", 4);
    check!("g", 1, "%:17u", 16);
    check!("G", 1, "%:17U", 16);
    check!("XYZ", 3, "%:36U", 44027);
    check!(" 00XYZ", 6, "%6.5:36U", 44027);
}

#[test]
fn custom_base_errors() {
    fail!("%:1i", 0);
    fail!("%:37i", 0);
    fail!("%:9999i", 0);
    fail!("%:*i", 9999, 0);
}

#[test]
fn base_round_trip() {
    for base in 2..=36u32 {
        for &v in &[0i64, 1, 7, 36, 1234, 99999, 123456789] {
            let t = format!("%:{base}i");
            let list = args!(v);
            let (out, _) = fmt(&t, &list).unwrap();
            assert_eq!(
                i64::from_str_radix(&out, base).unwrap(),
                v,
                "base {base} value {v}"
            );
        }
    }
}

// ---------------------------------------------------------------------
// 7. Star width and precision
// ---------------------------------------------------------------------

#[test]
fn star_width_and_precision() {
    check!("001234", 6, "%.*d", 6, 1234);
    // A negative '*' precision means "absent".
    check!("1234", 4, "%.*d", -6, 1234);
    check!("    10", 6, "%*d", 6, 10);
    // A negative '*' width selects left justification.
    check!("10    ", 6, "%*d", -6, 10);
}

// ---------------------------------------------------------------------
// 8. %p
// ---------------------------------------------------------------------

#[test]
fn pointer_conversion() {
    // Pointers render as "0x" plus one zero-padded uppercase hex digit
    // pair per byte; flags, width, precision and qualifier are ignored.
    check!("0x0000000000000000", 18, "%p", 0usize);
    check!("0x0000000000001234", 18, "%p", 0x1234usize);
    check!("0xFFFFFFFFFFFFFFFF", 18, "%p", usize::MAX);
    check!("0xFFFFFFFFFFFFFFFF", 18, "%-+ #0!^24.48lp", usize::MAX);
    check!("0xFFFFFFFFFFFFFFFF", 18, "%-+ #0!^24.48hp", usize::MAX);
}
