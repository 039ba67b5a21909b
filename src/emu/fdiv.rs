use super::fmul::fmul;
use super::tables::recip_seg;
use super::{mkfloat, slice};

/// Divide by multiplying with a piecewise-linear reciprocal of the divisor
/// mantissa.
///
/// Both mantissas are renormalized into [1, 2); the reciprocal segment is
/// keyed on the top 10 bits of the divisor mantissa and evaluated as
/// `intercept - grad * m2n`. Both multiplies route through [`fmul`] so the
/// emitted bits match the datapath, not the host multiplier.
pub fn fdiv(x1: f32, x2: f32) -> f32 {
    let n1 = x1.to_bits();
    let n2 = x2.to_bits();

    let s1 = n1 >> 31;
    let s2 = n2 >> 31;
    let e1 = slice(n1, 31, 24);
    let e2 = slice(n2, 31, 24);

    let m1 = slice(n1, 23, 1);
    let m2 = slice(n2, 23, 1);
    let h = slice(m2, 23, 14);
    let m1n = f32::from_bits(mkfloat(0, 127, m1));
    let m2n = f32::from_bits(mkfloat(0, 127, m2));

    let seg = recip_seg(h);
    let m2inv = seg.intercept - fmul(seg.grad, m2n);

    let mdiv = fmul(m1n, m2inv).to_bits();
    let ovf = slice(mdiv, 31, 31);
    // implicit bit at position 23 instead of 24: the reciprocal product fell
    // below 1.0 and the result needs one binade of downshift
    let udf = slice(!mdiv, 24, 24);

    let sy = s1 ^ s2;
    let ey = slice(
        e1.wrapping_sub(e2)
            .wrapping_add(127)
            .wrapping_sub(udf)
            .wrapping_add(ovf),
        8,
        1,
    );
    let my = slice(mdiv, 23, 1);

    f32::from_bits(mkfloat(sy, ey, my))
}
