//! Implements the B-spline curve.
//!
//! A B-spline curve of degree `p` over points in `R^dim` is defined by
//! `n` control points `P_0, ..., P_{n-1}` with `n > p` and a non-decreasing
//! knot vector `u_0, ..., u_{m-1}` with `m = n + p + 1`. Every operation
//! that returns successfully preserves these size invariants.
//!
//! The curve owns its storage: control points as a [matrix][MatD] with one
//! column per point, knots as a [vector][VecD]. Dropping a curve releases
//! both; [`Clone`] produces an independent deep copy; the [`Default`] value
//! is the empty curve of degree zero.

use thiserror::Error;

use crate::{
    curve::{deboor::DeBoorNet, knots::Layout},
    manipulation::{beziers, buckle, insert, resize, reverse, split},
    tolerance::Tolerance,
    types::{MatD, VecD, VecDView},
};

pub mod deboor;
pub mod knots;

#[derive(Debug, Clone, PartialEq)]
pub struct BSpline {
    pub(crate) deg: usize,
    pub(crate) ctrlp: MatD,
    pub(crate) knots: VecD,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    #[error("The dimension of a control point must be at least one.")]
    ZeroDimension,

    #[error("The degree `p = {p}` must be smaller than the number of control points `n = {n_ctrlp}`.")]
    DegreeTooHigh { p: usize, n_ctrlp: usize },

    #[error("Size arithmetic overflowed while computing the new array lengths.")]
    SizeOverflow,

    #[error("The curve is not defined at parameter `u = {u}`.")]
    UndefinedParameter { u: f64 },

    #[error("The multiplicity `s = {s}` of knot `u = {u}` cannot exceed the curve order `{order}`.")]
    MultiplicityTooHigh { u: f64, s: usize, order: usize },
}

impl BSpline {
    /// Returns a curve of degree `deg` with `n_ctrlp` control points in
    /// `R^dim`, all initialized to the origin, and knots filled per
    /// `layout`.
    ///
    /// # Examples
    /// ```
    /// use splinekit::curve::{knots::Layout, BSpline};
    ///
    /// let curve = BSpline::new(3, 2, 7, Layout::Clamped).unwrap();
    /// assert_eq!(curve.knot_count(), 11);
    /// assert_eq!(curve.knots()[4], 0.25);
    /// ```
    pub fn new(deg: usize, dim: usize, n_ctrlp: usize, layout: Layout) -> Result<Self, SplineError> {
        if dim < 1 {
            return Err(SplineError::ZeroDimension);
        }
        if deg >= n_ctrlp {
            return Err(SplineError::DegreeTooHigh { p: deg, n_ctrlp });
        }
        let order = deg.checked_add(1).ok_or(SplineError::SizeOverflow)?;
        let n_knots = n_ctrlp.checked_add(order).ok_or(SplineError::SizeOverflow)?;

        let mut spline = BSpline { deg, ctrlp: MatD::zeros(dim, n_ctrlp), knots: VecD::zeros(n_knots) };
        spline.setup_knots(layout);
        Ok(spline)
    }

    /// Returns a curve of degree `deg` over an existing coordinate matrix
    /// with one column per control point.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::dmatrix;
    /// use splinekit::curve::{knots::Layout, BSpline};
    ///
    /// // Four 2D control points of a cubic Bézier segment.
    /// let points = dmatrix![
    ///     0.0, 1.0, 2.0, 3.0; // x
    ///     0.0, 2.0, 2.0, 0.0; // y
    /// ];
    /// let curve = BSpline::from_points(3, points, Layout::Clamped).unwrap();
    /// println!("{:?}", curve.evaluate(0.5));
    /// ```
    pub fn from_points(deg: usize, points: MatD, layout: Layout) -> Result<Self, SplineError> {
        if points.nrows() < 1 {
            return Err(SplineError::ZeroDimension);
        }
        if deg >= points.ncols() {
            return Err(SplineError::DegreeTooHigh { p: deg, n_ctrlp: points.ncols() });
        }
        let order = deg.checked_add(1).ok_or(SplineError::SizeOverflow)?;
        let n_knots = points.ncols().checked_add(order).ok_or(SplineError::SizeOverflow)?;

        let mut spline = BSpline { deg, knots: VecD::zeros(n_knots), ctrlp: points };
        spline.setup_knots(layout);
        Ok(spline)
    }

    /// Refills the knot vector in place per `layout`.
    pub fn setup_knots(&mut self, layout: Layout) {
        knots::fill(&mut self.knots, self.deg, layout);
    }

    pub fn degree(&self) -> usize {
        self.deg
    }

    pub fn order(&self) -> usize {
        self.deg + 1
    }

    /// Returns the dimension of the curve.
    pub fn dimension(&self) -> usize {
        self.ctrlp.nrows()
    }

    pub fn control_point_count(&self) -> usize {
        self.ctrlp.ncols()
    }

    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    pub fn control_points(&self) -> &MatD {
        &self.ctrlp
    }

    pub fn control_points_mut(&mut self) -> &mut MatD {
        &mut self.ctrlp
    }

    pub fn control_point(&self, i: usize) -> VecDView<'_> {
        self.ctrlp.column(i)
    }

    pub fn knots(&self) -> &VecD {
        &self.knots
    }

    pub fn knots_mut(&mut self) -> &mut VecD {
        &mut self.knots
    }

    /// Computes the de Boor net of the curve at parameter `u` with the
    /// default tolerance.
    pub fn evaluate(&self, u: f64) -> Result<DeBoorNet, SplineError> {
        deboor::evaluate(self, u, &Tolerance::default())
    }

    pub fn evaluate_with(&self, u: f64, tolerance: &Tolerance) -> Result<DeBoorNet, SplineError> {
        deboor::evaluate(self, u, tolerance)
    }

    /// Inserts the knot `u` into the curve `n` times and returns the index
    /// of the last inserted knot. The curve is unchanged on failure.
    pub fn insert_knot(&mut self, u: f64, n: usize) -> Result<usize, SplineError> {
        insert::insert(self, u, n, &Tolerance::default())
    }

    /// Raises the multiplicity of `u` to the curve order and returns the
    /// index of the last knot equal to `u`.
    pub fn split(&mut self, u: f64) -> Result<usize, SplineError> {
        split::split(self, u, &Tolerance::default())
    }

    /// Grows or shrinks the curve by `n` control points and knots, at the
    /// high-index end if `back` and at the low-index end otherwise.
    pub fn resize(&mut self, n: isize, back: bool) -> Result<&mut Self, SplineError> {
        resize::resize(self, n, back)?;
        Ok(self)
    }

    /// Returns a resized copy, leaving this curve untouched.
    pub fn resized(&self, n: isize, back: bool) -> Result<Self, SplineError> {
        resize::resized(self, n, back)
    }

    /// Rewrites the curve as a run of Bézier segments joined by knots of
    /// full multiplicity.
    pub fn to_beziers(&mut self) -> Result<&mut Self, SplineError> {
        beziers::to_beziers(self, &Tolerance::default())?;
        Ok(self)
    }

    /// Moves each control point towards the chord between the first and
    /// last control points by factor `1 - b`.
    pub fn buckle(&mut self, b: f64) -> &mut Self {
        buckle::buckle(self, b);
        self
    }

    /// Reverses the curve.
    pub fn reverse(&mut self) -> &mut Self {
        reverse::reverse(self);
        self
    }

    /// Returns whether both curves have the same shape parameters and
    /// tolerance-equal control points and knots.
    pub fn equals(&self, other: &BSpline, tolerance: &Tolerance) -> bool {
        self.deg == other.deg
            && self.dimension() == other.dimension()
            && self.control_point_count() == other.control_point_count()
            && self.knot_count() == other.knot_count()
            && self.ctrlp.iter().zip(other.ctrlp.iter()).all(|(x, y)| tolerance.eq(*x, *y))
            && self.knots.iter().zip(other.knots.iter()).all(|(x, y)| tolerance.eq(*x, *y))
    }
}

impl Default for BSpline {
    fn default() -> Self {
        BSpline { deg: 0, ctrlp: MatD::zeros(0, 0), knots: VecD::zeros(0) }
    }
}
