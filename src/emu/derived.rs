//! Composites the surrounding core builds from the primitive kernels.

use super::fdiv::fdiv;
use super::ffloor::ffloor;
use super::fmul::fmul;

/// Halve without a divider.
#[inline]
pub fn fhalf(x: f32) -> f32 {
    fmul(x, 0.5)
}

/// Reciprocal.
#[inline]
pub fn finv(x: f32) -> f32 {
    fdiv(1.0, x)
}

/// Fractional part. The floor result is integral, so the subtraction is
/// exact whenever the difference is representable.
#[inline]
pub fn ffrac(x: f32) -> f32 {
    x - ffloor(x)
}
