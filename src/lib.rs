//! `splinekit` is a Rust kernel for non-uniform B-spline curves of
//! arbitrary degree in arbitrary-dimensional space, built on
//! [nalgebra](https://crates.io/crates/nalgebra).
//!
//! ## Features
//! - `N`-dimensional curves of any polynomial degree `p` with
//!   [opened or clamped knot vectors][curve::knots]
//! - Numerically stable [evaluation][curve::deboor] producing the full
//!   de Boor net of intermediate points
//! - [Knot insertion][manipulation::insert] (Boehm's algorithm),
//!   [splitting][manipulation::split], and
//!   [decomposition into Bézier segments][manipulation::beziers]
//! - [Resizing][manipulation::resize] with left/right bias,
//!   [chord buckling][manipulation::buckle], and
//!   [reversal][manipulation::reverse]
//! - Configurable [comparison tolerances][tolerance]
//!
//! ## Mathematical Definition
//!
//! A B-spline curve of degree `p` is the piecewise polynomial
//! ```math
//! C(u) = \sum_{i=0}^{n-1} N_{i,p}^{U}(u)\, P_i
//! ```
//! with `n > p` control points `P_i` of arbitrary dimension and a
//! non-decreasing knot vector `U` of `n + p + 1` values on `[0, 1]`. The
//! basis functions have local support, so evaluating or reshaping the
//! curve only ever touches `p + 1` control points, and the de Boor
//! recursion computes `C(u)` from convex combinations alone.
//!
//! ## Example
//! ```
//! use nalgebra::dmatrix;
//! use splinekit::curve::{knots::Layout, BSpline};
//!
//! // A clamped cubic through seven 2D control points.
//! let mut curve = BSpline::from_points(
//!     3,
//!     dmatrix![
//!         0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0; // x
//!         0.0, 2.0, 2.0, 0.0, 0.0, 2.0, 2.0; // y
//!     ],
//!     Layout::Clamped,
//! )
//! .unwrap();
//!
//! let point = curve.evaluate(0.5).unwrap().result().clone_owned();
//! curve.insert_knot(0.5, 1).unwrap();
//! assert!((curve.evaluate(0.5).unwrap().result() - point).norm() < 1e-12);
//! ```
//!
//! ## Literature
//! |           |                                                                                                                        |
//! |----------:|:-----------------------------------------------------------------------------------------------------------------------|
//! | Piegl1997 | Piegl, L., Tiller, W. The NURBS Book. Monographs in Visual Communication. Springer, Berlin, Heidelberg, 2nd ed., 1997. |
//! | Boehm1980 | Boehm, W. Inserting new knots into B-spline curves, Computer-Aided Design, 12(4) (1980) 199-201.                       |

pub mod curve;
pub mod manipulation;
pub mod tolerance;
pub mod types;
