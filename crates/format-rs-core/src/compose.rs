//! Output composer and padding calculator.
//!
//! Every converter funnels its result through [`gen_out`], which emits the
//! five logical sections of a field in fixed order:
//!
//! ```text
//! [left spaces][prefix][zero pad][body][right spaces]
//! ```
//!
//! The floating-point layouts call it piecewise (left section, decimal
//! point + right section, trailing zeros, exponent), which together with
//! the zero-pad-after-point sections gives the seven-section model of the
//! unified `e`/`f` layout.

use crate::sink::{emit, pad_spaces, pad_zeroes, Sink};
use crate::spec::FormatSpec;
use crate::Result;

/// Split a field's width deficit into left and right space padding.
///
/// MINUS puts the deficit on the right. CARET splits it, biasing the odd
/// remainder to the right unless MINUS is also set, which biases left.
pub fn calc_space_padding(spec: &FormatSpec<'_>, length: usize) -> (usize, usize) {
    let deficit = spec.width.saturating_sub(length);
    let (mut left, mut right) = if spec.flags.left_justify {
        (0, deficit)
    } else {
        (deficit, 0)
    };
    if spec.flags.center {
        let total = left + right;
        left = (total + usize::from(!spec.flags.left_justify)) / 2;
        right = total - left;
    }
    (left, right)
}

/// Emit one composed field section-by-section.
///
/// Returns the total number of bytes handed to the sink. Any sink refusal
/// aborts immediately; partial output is not rolled back.
pub fn gen_out(
    sink: &mut dyn Sink,
    left_spaces: usize,
    prefix: &[u8],
    zero_pad: usize,
    body: &[u8],
    right_spaces: usize,
) -> Result<usize> {
    pad_spaces(sink, left_spaces)?;
    emit(sink, prefix)?;
    pad_zeroes(sink, zero_pad)?;
    emit(sink, body)?;
    pad_spaces(sink, right_spaces)?;
    Ok(left_spaces + prefix.len() + zero_pad + body.len() + right_spaces)
}
