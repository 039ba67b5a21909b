//! Slope/intercept tables for the linear-approximation kernels.
//!
//! Entries are computed in double precision with the closed forms below and
//! narrowed to single precision; the RTL holds the same two 1024-entry ROMs.
//! Each table is built once, published whole, and read-only afterwards, so
//! lookups are safe from any number of threads. [`build_recip_seg`] and
//! [`build_sqrt_seg`] stay callable so a table dump can always be checked
//! against fresh recomputation.

use std::sync::OnceLock;

/// One linear segment, evaluated as `intercept ± grad * mn`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg {
    pub grad: f32,
    pub intercept: f32,
}

static RECIP_SEGS: OnceLock<[Seg; 1024]> = OnceLock::new();
static SQRT_SEGS: OnceLock<[Seg; 1024]> = OnceLock::new();

/// Reciprocal segment for key `h` (the top 10 bits of the divisor
/// mantissa), recomputed from the closed form.
///
/// The segment approximates `1/t` for `t` in `[1 + h/1024, 1 + (h+1)/1024)`.
/// The 768/256/1024 weights in the intercept come from minimizing the
/// mean-squared error of the truncated tabulation on that sub-interval.
pub fn build_recip_seg(h: u32) -> Seg {
    debug_assert!(h < 1024);
    let hf = f64::from(h);
    let grad = 1024.0 * (1024.0 / (1024.0 + hf) - 1024.0 / (1025.0 + hf));
    let intercept = 1024.0 * (1.0 - (1024.0 + hf) / (1025.0 + hf))
        + (768.0 / (1024.0 + hf) - 256.0 / (1025.0 + hf) + 1024.0 / (2049.0 + 2.0 * hf));
    Seg {
        grad: grad as f32,
        intercept: intercept as f32,
    }
}

/// Square-root segment for key `h`, recomputed from the closed form.
///
/// Keys below 512 cover operands normalized into [1, 2); the rest cover
/// [2, 4). The intercept is the secant shifted up by half the midpoint gap,
/// splitting the approximation error across the sub-interval.
pub fn build_sqrt_seg(h: u32) -> Seg {
    debug_assert!(h < 1024);
    let hf = f64::from(h);
    let (grad, intercept) = if h < 512 {
        let lo = ((512.0 + hf) / 512.0).sqrt();
        let hi = ((513.0 + hf) / 512.0).sqrt();
        let mid = ((1025.0 + 2.0 * hf) / 1024.0).sqrt();
        (
            512.0 * (hi - lo),
            (2.0 * mid + hi + lo) / 4.0 - ((1025.0 + 2.0 * hf) / 2.0) * (hi - lo),
        )
    } else {
        let lo = (hf / 256.0).sqrt();
        let hi = ((1.0 + hf) / 256.0).sqrt();
        let mid = ((1.0 + 2.0 * hf) / 512.0).sqrt();
        (
            256.0 * (hi - lo),
            (2.0 * mid + hi + lo) / 4.0 - ((1.0 + 2.0 * hf) / 2.0) * (hi - lo),
        )
    };
    Seg {
        grad: grad as f32,
        intercept: intercept as f32,
    }
}

fn recip_segs() -> &'static [Seg; 1024] {
    RECIP_SEGS.get_or_init(|| std::array::from_fn(|h| build_recip_seg(h as u32)))
}

fn sqrt_segs() -> &'static [Seg; 1024] {
    SQRT_SEGS.get_or_init(|| std::array::from_fn(|h| build_sqrt_seg(h as u32)))
}

/// Cached reciprocal segment lookup.
#[inline]
pub fn recip_seg(h: u32) -> Seg {
    recip_segs()[h as usize]
}

/// Cached square-root segment lookup.
#[inline]
pub fn sqrt_seg(h: u32) -> Seg {
    sqrt_segs()[h as usize]
}
