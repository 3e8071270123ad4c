//! Provides floating point utilities.

/// EPSILON is the tolerance used for all approximate comparisons in the
/// tracer: tuple/color/matrix equality, the plane's parallel-ray test, the
/// cube's degenerate slab directions, and the over/under point offsets that
/// keep secondary rays from re-hitting the surface they originate on.
///
/// 1e-5 is far coarser than `f64::EPSILON` on purpose: intersection `t`
/// values accumulate error through repeated 4x4 multiplications, and the
/// canonical shading scenarios are only quoted to five decimal places.
pub const EPSILON: f64 = 1e-5;

/// Compares two floats for approximate equality within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
