//! Splits a curve at a parameter by raising its knot multiplicity.
//!
//! A knot of full multiplicity `p + 1` disconnects the control polygon: the
//! curve passes through a control point there and the two sides can be
//! treated as independent curves sharing that point. Splitting inserts as
//! many copies of `u` as needed to reach full multiplicity; a parameter
//! that already has it (an endpoint of a clamped curve, or a previous split
//! position) leaves the curve untouched.

use crate::{
    curve::{deboor, BSpline, SplineError},
    manipulation::insert,
    tolerance::Tolerance,
};

/// Raises the multiplicity of `u` to the curve order and returns the index
/// of the last knot equal to `u`. The curve is unchanged on failure.
pub fn split(spline: &mut BSpline, u: f64, tolerance: &Tolerance) -> Result<usize, SplineError> {
    let net = deboor::evaluate(spline, u, tolerance)?;
    if net.raw_points() >= 1 {
        // u already sits on a knot of full multiplicity.
        Ok(net.k())
    } else {
        let split = insert::insert_net(spline, &net, net.h() + 1)?;
        *spline = split;
        Ok(net.k() + net.h() + 1)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dmatrix;
    use rstest::{fixture, rstest};

    use crate::curve::knots::{self, Layout};

    use super::*;

    #[fixture]
    /// A clamped cubic 2D curve with seven control points.
    fn c() -> BSpline {
        BSpline::from_points(
            3,
            dmatrix![
                0., 1., 2., 3., 4., 5., 6.;
                0., 2., 2., 0., 0., 2., 2.;
            ],
            Layout::Clamped,
        )
        .unwrap()
    }

    #[rstest]
    fn split_raises_to_full_multiplicity(c: BSpline) {
        let mut spline = c;
        let k = spline.split(0.5).unwrap();

        assert_eq!(k, 8);
        assert_eq!(knots::multiplicity(spline.knots(), 0.5, &Tolerance::default()), 4);
        assert_eq!(spline.control_point_count(), 10);
        assert_eq!(spline.knot_count(), 14);
    }

    #[rstest]
    fn split_preserves_the_curve(c: BSpline) {
        let mut split = c.clone();
        split.split(0.5).unwrap();

        for u in [0.0, 0.2, 0.5, 0.8, 1.0] {
            assert_relative_eq!(
                c.evaluate(u).unwrap().result().clone_owned(),
                split.evaluate(u).unwrap().result().clone_owned(),
                epsilon = f64::EPSILON.sqrt()
            );
        }
    }

    #[rstest]
    fn splitting_twice_is_a_no_op(c: BSpline) {
        let mut spline = c;
        let k = spline.split(0.5).unwrap();
        let once = spline.clone();

        let again = spline.split(0.5).unwrap();
        assert_eq!(again, k);
        assert_eq!(spline, once);
    }

    #[rstest]
    fn splitting_at_an_endpoint_is_a_no_op(c: BSpline) {
        let mut spline = c.clone();
        let k = spline.split(0.0).unwrap();

        assert_eq!(k, 3);
        assert_eq!(spline, c);
    }

    #[rstest]
    fn curve_point_becomes_a_control_point(c: BSpline) {
        let expected = c.evaluate(0.5).unwrap().result().clone_owned();

        let mut spline = c;
        let k = spline.split(0.5).unwrap();

        // the control point left of the k-th knot is the curve point
        let at = k - spline.order();
        assert_relative_eq!(spline.control_point(at).clone_owned(), expected, epsilon = f64::EPSILON.sqrt());
    }

    #[rstest]
    fn split_outside_the_domain_fails(c: BSpline) {
        let mut spline = c;
        assert_eq!(spline.split(1.5), Err(SplineError::UndefinedParameter { u: 1.5 }));
    }
}
