//! The built-in conformance vector table.
//!
//! Each vector names a template, a typed argument list, and either the
//! exact expected output plus return count, or the expectation that the
//! engine rejects the call. The table samples every conversion family;
//! the exhaustive per-family coverage lives in the engine crate's own
//! test suite.

use serde::{Deserialize, Serialize};

/// A typed argument in serializable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArgValue {
    Int(i64),
    Uint(u64),
    Double(f64),
    Str(String),
    Null,
}

/// Expected outcome of a vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expect {
    /// Exact output bytes and return count.
    Output { text: String, returns: usize },
    /// The engine must reject the call with its sentinel.
    Reject,
}

/// One conformance case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vector {
    /// Stable case name.
    pub name: String,
    /// Conversion family the case exercises.
    pub family: String,
    /// Format template.
    pub template: String,
    /// Argument list, consumed in order.
    pub args: Vec<ArgValue>,
    /// Expected outcome.
    pub expect: Expect,
}

fn ok(name: &str, family: &str, template: &str, args: Vec<ArgValue>, text: &str) -> Vector {
    Vector {
        name: name.into(),
        family: family.into(),
        template: template.into(),
        args,
        expect: Expect::Output {
            text: text.into(),
            returns: text.len(),
        },
    }
}

fn bad(name: &str, family: &str, template: &str, args: Vec<ArgValue>) -> Vector {
    Vector {
        name: name.into(),
        family: family.into(),
        template: template.into(),
        args,
        expect: Expect::Reject,
    }
}

use ArgValue::{Double, Int, Null, Str, Uint};

/// The built-in vector table.
pub fn builtin_vectors() -> Vec<Vector> {
    vec![
        // Literals and escapes.
        ok("literal", "literal", "hello world", vec![], "hello world"),
        ok("escape", "literal", "100%%", vec![], "100%"),
        // Characters.
        ok("char", "char", "%c", vec![Int(97)], "a"),
        ok("char_repeat", "char", "%.4c", vec![Int(45)], "----"),
        ok("rep_char", "char", "%.3C*", vec![], "***"),
        // Strings.
        ok("str", "string", "%s", vec![Str("hello".into())], "hello"),
        ok("str_width", "string", "%8.3s", vec![Str("hello".into())], "     hel"),
        ok("str_center", "string", "%^9s", vec![Str("hello".into())], "  hello  "),
        ok("str_null", "string", "%s", vec![Null], "(null)"),
        // Signed integers.
        ok("d_basic", "integer", "%d", vec![Int(-1234)], "-1234"),
        ok("d_prec_kills_zero", "integer", "%+06.1d", vec![Int(1234)], " +1234"),
        ok("d_space_sign", "integer", "% .0d", vec![Int(0)], " "),
        ok("d_center", "integer", "%^8d", vec![Int(1234)], "  1234  "),
        ok("d_i64_min", "integer", "%ld", vec![Int(i64::MIN)], "-9223372036854775808"),
        // Unsigned and the extension bases.
        ok("u_basic", "integer", "%u", vec![Uint(1234)], "1234"),
        ok("x_alt", "integer", "%#x", vec![Uint(0x1234abcd)], "0x1234abcd"),
        ok("b_alt_prec", "integer", "%#12.8b", vec![Uint(13)], "  0b00001101"),
        ok("x_bang_zero", "integer", "%!#x", vec![Uint(0)], "0x0"),
        ok("x_center_alt", "integer", "%^#12.8X", vec![Uint(0xABCD)], " 0X0000ABCD "),
        ok("o_alt", "integer", "%#o", vec![Uint(0o1234)], "01234"),
        // Star width and precision.
        ok("star_prec", "integer", "%.*d", vec![Int(6), Int(1234)], "001234"),
        ok("star_prec_negative", "integer", "%.*d", vec![Int(-6), Int(1234)], "1234"),
        ok("star_width_negative", "integer", "%*d", vec![Int(-6), Int(10)], "10    "),
        // Custom bases.
        ok("base_3", "base", "%:3i", vec![Int(4)], "11"),
        ok("base_17_lower", "base", "%:17i", vec![Int(16)], "g"),
        ok("base_17_upper", "base", "%:17I", vec![Int(16)], "G"),
        ok("base_36", "base", "%:36U", vec![Uint(44027)], "XYZ"),
        bad("base_1", "base", "%:1i", vec![Int(0)]),
        bad("base_huge", "base", "%:9999i", vec![Int(0)]),
        // Grouping.
        ok("group_pairs", "grouping", "%[,2]d", vec![Int(123456)], "12,34,56"),
        ok("group_mixed", "grouping", "%[,3.2]d", vec![Int(1234567890)], "12,345,678.90"),
        ok("group_terminal", "grouping", "%[-,2]d", vec![Int(123456)], "1234,56"),
        ok("group_prec", "grouping", "%.6[_2]d", vec![Int(1234)], "0012_34"),
        bad("group_unterminated", "grouping", "%[,3d", vec![Int(1)]),
        // Pointers.
        ok(
            "pointer",
            "pointer",
            "%p",
            vec![Uint(0x1234)],
            "0x0000000000001234",
        ),
        // Continuation.
        ok(
            "continuation",
            "continuation",
            "hello %",
            vec![Str("world".into())],
            "hello world",
        ),
        // Floating point.
        ok("f_round", "float", "%.3f", vec![Double(1234.5678)], "1234.568"),
        ok("f_zero", "float", "%f", vec![Double(0.0)], "0.000000"),
        ok("e_default", "float", "%e", vec![Double(1.0)], "1.000000e+00"),
        ok("e_layout", "float", "%013.1e", vec![Double(-1.0)], "-000001.0e+00"),
        ok("g_to_e", "float", "%.2g", vec![Double(1234.5)], "1.2e+03"),
        ok("g_to_f", "float", "%.2g", vec![Double(12.345)], "12.35"),
        ok("g_trim", "float", "%.4g", vec![Double(1.23)], "1.23"),
        ok("inf", "float", "%+e", vec![Double(f64::INFINITY)], "+inf"),
        ok("nan_upper", "float", "%F", vec![Double(f64::NAN)], "NAN"),
        ok(
            "denormal",
            "float",
            "%.2e",
            vec![Double(f64::from_bits(1))],
            "4.94e-324",
        ),
        // Engineering and SI.
        ok("eng_e", "float", "%!.3e", vec![Double(12345.0)], "12.345e+03"),
        ok("si_milli", "float", "%!.3f", vec![Double(0.012345)], "12.345m"),
        ok("si_kilo", "float", "%!.3f", vec![Double(12345.0)], "12.345k"),
        // Fixed point.
        ok("k_default", "fixed", "%k", vec![Int(0x1_0000)], "1.000000"),
        ok("k_prec", "fixed", "%.2k", vec![Int(0x1_8000)], "1.50"),
        ok("k_custom", "fixed", "%{8.8}k", vec![Int(0x80)], "0.500000"),
        // Count.
        // (%n is covered in the engine tests; it needs a live Cell.)
        // Limits and rejects.
        ok("width_max", "limits", "%500d", vec![Int(0)], &format!("{:>500}", 0)),
        bad("width_over", "limits", "%501d", vec![Int(0)]),
        bad("prec_over", "limits", "%.501d", vec![Int(0)]),
        bad("rep_char_missing", "limits", "%C", vec![]),
        bad("long_double_fp", "limits", "%Le", vec![Double(1.0)]),
        bad("unknown_spec", "limits", "%q", vec![Int(1)]),
        bad("missing_arg", "limits", "%d", vec![]),
    ]
}
