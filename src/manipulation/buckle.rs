//! Buckles a curve towards the chord of its control polygon.
//!
//! Each control point is interpolated linearly between itself and its
//! projection on the chord through the first and last control points:
//! `P_i' = b * P_i + (1 - b) * (P_0 + (i / (N - 1)) * (P_{N-1} - P_0))`.
//! `b = 1` keeps the curve, `b = 0` flattens it onto the chord; the first
//! and last control points never move.

use crate::curve::BSpline;

/// Buckles `spline` in place by factor `b`.
pub fn buckle(spline: &mut BSpline, b: f64) {
    let n_ctrlp = spline.control_point_count();
    if n_ctrlp < 2 {
        return;
    }

    let b_hat = 1.0 - b;
    let first = spline.ctrlp.column(0).clone_owned();
    let last = spline.ctrlp.column(n_ctrlp - 1).clone_owned();
    let chord = &last - &first;

    for i in 0..n_ctrlp {
        let t = i as f64 / (n_ctrlp - 1) as f64;
        let point = spline.ctrlp.column(i) * b + (&first + &chord * t) * b_hat;
        spline.ctrlp.set_column(i, &point);
    }
}
