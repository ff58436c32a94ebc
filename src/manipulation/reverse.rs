//! Reverses the curve parametrization.
//!
//! The control points swap ends and the knot vector is mirrored through
//! `u -> 1 - u`, so that `C'(u) = C(1 - u)` over the normalized domain.
//! Reversing twice restores the curve.

use std::ops::MulAssign;

use crate::curve::BSpline;

pub fn reverse(spline: &mut BSpline) -> &mut BSpline {
    let n_knots = spline.knot_count();
    for i in 0..n_knots / 2 {
        spline.knots.swap_rows(i, n_knots - 1 - i);
    }
    spline.knots.add_scalar_mut(-1.0);
    spline.knots.mul_assign(-1.0);

    let n_ctrlp = spline.control_point_count();
    for i in 0..n_ctrlp / 2 {
        spline.ctrlp.swap_columns(i, n_ctrlp - 1 - i);
    }
    spline
}

pub fn reversed(spline: &BSpline) -> BSpline {
    let mut reversed = spline.clone();
    reverse(&mut reversed);
    reversed
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};
    use rstest::{fixture, rstest};

    use crate::curve::knots::Layout;

    use super::*;

    #[fixture]
    fn c() -> BSpline {
        let mut spline = BSpline::from_points(
            2,
            dmatrix![
                1., 3., 5.;
                2., 4., 6.;
            ],
            Layout::None,
        )
        .unwrap();
        spline.knots_mut().copy_from(&dvector![0., 0., 0., 0.6, 1., 1.]);
        spline
    }

    #[rstest]
    fn mirrors_knots_and_points(c: BSpline) {
        let reversed = reversed(&c);

        assert_relative_eq!(reversed.knots().clone_owned(), dvector![0., 0., 0.4, 1., 1., 1.]);
        assert_eq!(reversed.control_points(), &dmatrix![5., 3., 1.; 6., 4., 2.]);
    }

    #[rstest]
    fn reversing_twice_restores_the_curve(c: BSpline) {
        let mut spline = c.clone();
        spline.reverse().reverse();

        assert_relative_eq!(spline.knots().clone_owned(), c.knots().clone_owned());
        assert_eq!(spline.control_points(), c.control_points());
    }

    #[test]
    fn evaluates_to_the_mirrored_parameter() {
        let spline = BSpline::from_points(
            3,
            dmatrix![
                0., 1., 2., 3., 4., 5., 6.;
                0., 2., 2., 0., 0., 2., 2.;
            ],
            Layout::Clamped,
        )
        .unwrap();
        let reversed = reversed(&spline);

        for u in [0.0, 0.25, 0.4, 0.7, 1.0] {
            assert_relative_eq!(
                spline.evaluate(u).unwrap().result().clone_owned(),
                reversed.evaluate(1.0 - u).unwrap().result().clone_owned(),
                epsilon = f64::EPSILON.sqrt()
            );
        }
    }
}
