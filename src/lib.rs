pub mod emu;

pub use emu::{fcvtsw, fcvtws, fdiv, ffloor, ffrac, fhalf, finv, fmul, fsqrt, mkfloat, slice};
