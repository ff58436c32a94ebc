//! Evaluates the curve with de Boor's algorithm.
//!
//! Evaluation at a parameter `u` produces a [`DeBoorNet`]: the triangular
//! scheme of intermediate points ending in the curve point `C(u)`. The net
//! is kept around instead of just the final point because knot insertion
//! reads the triangle's edges to rebuild the control polygon.
//!
//! With `k` the span index (`u_k <= u < u_{k+1}`), `s` the multiplicity of
//! `u`, and `h = p - s` remaining recursion levels, the net holds
//! `N = h + 1` affected control points `P_{k-p}, ..., P_{k-s}` on its first
//! level. Each following level blends neighbouring points with
//! `a = (u - u_i) / (u_{i+p-r+1} - u_i)` and is one point shorter; the last
//! level is the curve point. If `u` already has full multiplicity
//! `s = p + 1`, the curve point is a control point and the net stores one
//! or two raw control points instead.

use crate::{
    curve::{BSpline, SplineError},
    tolerance::Tolerance,
    types::{MatD, VecDView},
};

/// The de Boor scheme of a curve at one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct DeBoorNet {
    u: f64,
    k: usize,
    s: usize,
    h: usize,
    raw: usize,
    points: MatD,
    result: usize,
}

impl DeBoorNet {
    /// The evaluated parameter, snapped onto the knot it matched.
    pub fn u(&self) -> f64 {
        self.u
    }

    /// The span index `k` with `u_k <= u < u_{k+1}`, the rightmost domain
    /// boundary snapped inside.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The multiplicity of `u` in the knot vector.
    pub fn s(&self) -> usize {
        self.s
    }

    /// The number of recursion levels, `max(p - s, 0)`.
    pub fn h(&self) -> usize {
        self.h
    }

    pub fn dimension(&self) -> usize {
        self.points.nrows()
    }

    pub fn point_count(&self) -> usize {
        self.points.ncols()
    }

    /// The stored points, level by level; one column per point.
    pub fn points(&self) -> &MatD {
        &self.points
    }

    /// The curve point `C(u)`.
    pub fn result(&self) -> VecDView<'_> {
        self.points.column(self.result)
    }

    /// The number of control points copied verbatim because `u` has full
    /// multiplicity; `0` when the recursion ran.
    pub fn raw_points(&self) -> usize {
        self.raw
    }
}

/// Evaluates `spline` at `u`.
pub fn evaluate(spline: &BSpline, u: f64, tolerance: &Tolerance) -> Result<DeBoorNet, SplineError> {
    let deg = spline.degree();
    let order = spline.order();
    let n_knots = spline.knot_count();
    let knots = spline.knots();

    // Count the multiplicity s of u and find the first knot above u.
    let mut k = 0;
    let mut s = 0;
    while k < n_knots {
        let knot = knots[k];
        if tolerance.eq(u, knot) {
            s += 1;
        } else if u < knot {
            break;
        }
        k += 1;
    }

    // u below the domain, above it, or inside the padding of an
    // unclamped knot vector.
    if k == 0
        || (k == n_knots && s == 0)
        || (s <= deg && (k <= deg || k > n_knots - deg + s - 1))
    {
        return Err(SplineError::UndefinedParameter { u });
    }
    k -= 1;

    // Snap u onto the matched knot so downstream arithmetic sees the
    // exact stored value.
    let u = if tolerance.eq(u, knots[k]) { knots[k] } else { u };
    let h = deg.saturating_sub(s);

    if s > order {
        return Err(SplineError::MultiplicityTooHigh { u, s, order });
    }

    if s == order {
        // The curve point is a control point. At the domain ends only one
        // of the two adjacent control points exists.
        return Ok(if k == deg || k == n_knots - 1 {
            let from = if k == deg { 0 } else { k - s };
            DeBoorNet { u, k, s, h, raw: 1, points: spline.ctrlp.columns(from, 1).into_owned(), result: 0 }
        } else {
            DeBoorNet { u, k, s, h, raw: 2, points: spline.ctrlp.columns(k - s, 2).into_owned(), result: 1 }
        });
    }

    let fst = k - deg; // first affected control point; k > deg by the domain check
    let lst = k - s; // last affected control point; s <= deg < k
    let width = lst - fst + 1; // == h + 1
    let n_points = width * (width + 1) / 2;

    let mut points = MatD::zeros(spline.dimension(), n_points);
    points.columns_mut(0, width).copy_from(&spline.ctrlp.columns(fst, width));

    // Walk the triangle level by level. Left and right read cursors trail
    // the write cursor; each level boundary advances them one extra column.
    let mut left = 0;
    let mut right = 1;
    let mut to = width;
    for r in 1..=h {
        for i in fst + r..=lst {
            let knot = knots[i];
            let a = (u - knot) / (knots[i + deg - r + 1] - knot);
            let point = points.column(left) * (1.0 - a) + points.column(right) * a;
            points.set_column(to, &point);
            left += 1;
            right += 1;
            to += 1;
        }
        left += 1;
        right += 1;
    }

    Ok(DeBoorNet { u, k, s, h, raw: 0, points, result: n_points - 1 })
}
