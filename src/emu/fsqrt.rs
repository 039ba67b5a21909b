use super::fmul::fmul;
use super::tables::sqrt_seg;
use super::{mkfloat, slice};

/// Square root via a two-segment linear approximation of the mantissa.
///
/// Because the square root halves the exponent, the mantissa normalization
/// depends on exponent parity: odd exponents place the significand in
/// [1, 2), even ones in [2, 4). Bit 9 of the segment key flips with that
/// parity, so each regime reads its own half of the table.
///
/// Negative operands keep their sign bit and are outside the accuracy
/// contract.
pub fn fsqrt(x: f32) -> f32 {
    let n = x.to_bits();

    let s = n >> 31;
    let e = slice(n, 31, 24);

    let m = slice(n, 23, 1);
    let h = slice(n, 24, 15) ^ 0x200;
    let mn = if e & 1 != 0 {
        f32::from_bits(mkfloat(0, 127, m))
    } else {
        f32::from_bits(mkfloat(0, 128, m))
    };

    let seg = sqrt_seg(h);
    let msqrt = (seg.intercept + fmul(seg.grad, mn)).to_bits();

    let ey = if e == 0 || e == 255 {
        0
    } else {
        // floor-halve the unbiased exponent; the parity went into mn
        ((e as i32 - 127).div_euclid(2) + 127) as u32
    };
    let my = slice(msqrt, 23, 1);

    f32::from_bits(mkfloat(s, ey, my))
}
