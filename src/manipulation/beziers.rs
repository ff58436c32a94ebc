//! Decomposes a curve into a run of Bézier segments.
//!
//! Raising every interior knot to full multiplicity turns the curve into a
//! sequence of Bézier segments glued together in one knot vector, each
//! segment owning `p + 1` consecutive control points. An unclamped boundary
//! is clamped first: the curve is split at the domain boundary and the
//! redundant knots and control points outside the domain are trimmed away.

use crate::{
    curve::{BSpline, SplineError},
    manipulation::{resize, split},
    tolerance::Tolerance,
};

/// Rewrites `spline` as a run of Bézier segments. The knot vector keeps its
/// values; every interior knot ends up with multiplicity `p + 1`.
pub fn to_beziers(spline: &mut BSpline, tolerance: &Tolerance) -> Result<(), SplineError> {
    let deg = spline.degree();
    let order = spline.order();

    // Clamp the start. After the split the copies of the boundary knot
    // occupy k - p ..= k, so k - p leading knots are dropped.
    let u_min = spline.knots()[deg];
    if tolerance.ne(spline.knots()[0], u_min) {
        let k = split::split(spline, u_min, tolerance)?;
        resize::resize(spline, deg as isize - k as isize, false)?;
    }

    // Clamp the end: everything above the k-th knot is dropped.
    let u_max = spline.knots()[spline.knot_count() - order];
    if tolerance.ne(spline.knots()[spline.knot_count() - 1], u_max) {
        let k = split::split(spline, u_max, tolerance)?;
        resize::resize(spline, k as isize + 1 - spline.knot_count() as isize, true)?;
    }

    let mut k = order;
    while k < spline.knot_count() - order {
        let u = spline.knots()[k];
        k = split::split(spline, u, tolerance)? + 1;
    }
    Ok(())
}
