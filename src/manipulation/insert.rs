//! Inserts additional knots into the curve with Boehm's algorithm.
//!
//! Inserting the parameter `u` into the knot vector `n` times adds `n`
//! control points while leaving the shape of the curve untouched. The
//! replacement control points are not recomputed from scratch: they are
//! exactly the points on the edges of the triangular [de Boor
//! net][crate::curve::deboor] of `u`, read down the left edge, across the
//! `n`-th level, and back up the right edge.

use crate::{
    curve::{
        deboor::{self, DeBoorNet},
        BSpline, SplineError,
    },
    tolerance::Tolerance,
    types::{MatD, VecD, VecHelpers},
};

/// Inserts the knot `u` into the curve `n` times and returns the index of
/// the last inserted knot. The curve is unchanged on failure.
pub fn insert(spline: &mut BSpline, u: f64, n: usize, tolerance: &Tolerance) -> Result<usize, SplineError> {
    let net = deboor::evaluate(spline, u, tolerance)?;
    let inserted = insert_net(spline, &net, n)?;
    *spline = inserted;
    Ok(net.k() + n)
}

/// Returns a copy of `spline` with `n` additional knots at the net's
/// parameter and its control points rebuilt from the net.
pub(crate) fn insert_net(spline: &BSpline, net: &DeBoorNet, n: usize) -> Result<BSpline, SplineError> {
    let order = spline.order();
    if net.s() + n > order {
        return Err(SplineError::MultiplicityTooHigh { u: net.u(), s: net.s() + n, order });
    }
    if n == 0 {
        return Ok(spline.clone());
    }

    let deg = spline.degree();
    let k = net.k();
    let width = net.h() + 1; // number of affected control points; n > 0
                             // implies s <= deg, so the net is a regular
                             // triangle of width h + 1
    let n_ctrlp = spline.control_point_count();
    let n_knots = spline.knot_count();
    let new_n_ctrlp = n_ctrlp.checked_add(n).ok_or(SplineError::SizeOverflow)?;
    let new_n_knots = n_knots.checked_add(n).ok_or(SplineError::SizeOverflow)?;

    let cidx = k - deg + width;
    let kidx = k + 1;

    // Control points and knots the insertion leaves alone, with an n-wide
    // gap after index k - deg and k respectively.
    let mut ctrlp = MatD::zeros(spline.dimension(), new_n_ctrlp);
    ctrlp.columns_mut(0, k - deg).copy_from(&spline.ctrlp.columns(0, k - deg));
    ctrlp
        .columns_mut(cidx + n, n_ctrlp - cidx)
        .copy_from(&spline.ctrlp.columns(cidx, n_ctrlp - cidx));

    let mut knots = VecD::zeros(new_n_knots);
    knots.head_mut(kidx).copy_from(&spline.knots.head(kidx));
    knots.tail_mut(n_knots - kidx).copy_from(&spline.knots.tail(n_knots - kidx));
    knots.segment_mut(kidx, n).fill(net.u());

    // Fill the gap from the edges of the triangular net. Walking down the
    // left edge the level starts are `width` points apart, one less per
    // level; walking back up the right edge the stride is negative and
    // grows.
    let points = net.points();
    let mut from: isize = 0;
    let mut stride = width as isize;
    let mut to = k - deg;
    for _ in 0..n {
        ctrlp.set_column(to, &points.column(from as usize));
        from += stride;
        stride -= 1;
        to += 1;
    }
    ctrlp.columns_mut(to, width - n).copy_from(&points.columns(from as usize, width - n));
    to += width - n;
    from -= 1;
    stride = -((width - n + 1) as isize);
    for _ in 0..n {
        ctrlp.set_column(to, &points.column(from as usize));
        from += stride;
        stride -= 1;
        to += 1;
    }

    Ok(BSpline { deg, ctrlp, knots })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};
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
    fn single_insertion(c: BSpline) {
        let mut spline = c;
        let k = spline.insert_knot(0.5, 1).unwrap();

        assert_eq!(k, 6);
        assert_eq!(spline.knots(), &dvector![0., 0., 0., 0., 0.25, 0.5, 0.5, 0.75, 1., 1., 1., 1.]);
        assert_relative_eq!(
            spline.control_points().clone_owned(),
            dmatrix![
                0., 1., 2., 8. / 3., 10. / 3., 4., 5., 6.;
                0., 2., 2., 2. / 3., 0., 0., 2., 2.;
            ],
            epsilon = f64::EPSILON.sqrt()
        );
    }

    #[rstest]
    fn insertion_preserves_the_curve(c: BSpline) {
        let mut inserted = c.clone();
        inserted.insert_knot(0.5, 2).unwrap();

        for u in [0.0, 0.1, 0.3, 0.5, 0.77, 1.0] {
            assert_relative_eq!(
                c.evaluate(u).unwrap().result().clone_owned(),
                inserted.evaluate(u).unwrap().result().clone_owned(),
                epsilon = f64::EPSILON.sqrt()
            );
        }
    }

    #[rstest]
    fn insertion_up_to_full_multiplicity(c: BSpline) {
        let mut spline = c;
        spline.insert_knot(0.5, 3).unwrap();

        assert_eq!(knots::multiplicity(spline.knots(), 0.5, &Tolerance::default()), 4);
        assert_eq!(spline.control_point_count(), 10);
        assert_eq!(spline.knot_count(), 14);
    }

    #[rstest]
    fn rejects_exceeding_the_order(c: BSpline) {
        let mut spline = c;
        assert_eq!(
            spline.insert_knot(0.5, 4),
            Err(SplineError::MultiplicityTooHigh { u: 0.5, s: 5, order: 4 })
        );
        // failure leaves the curve untouched
        assert_eq!(spline.control_point_count(), 7);
    }

    #[rstest]
    fn zero_insertions_copy_the_curve(c: BSpline) {
        let mut spline = c.clone();
        let k = spline.insert_knot(0.5, 0).unwrap();

        assert_eq!(k, 5);
        assert_eq!(spline, c);
    }

    #[test]
    fn degree_two_clamped() {
        let mut spline = BSpline::from_points(2, dmatrix![-1., 0., 1.;], Layout::Clamped).unwrap();
        assert_eq!(spline.knots(), &dvector![0., 0., 0., 1., 1., 1.]);

        spline.insert_knot(0.5, 1).unwrap();
        assert_eq!(spline.knots(), &dvector![0., 0., 0., 0.5, 1., 1., 1.]);
        assert_eq!(spline.control_points(), &dmatrix![-1., -0.5, 0.5, 1.;]);

        spline.insert_knot(0.5, 1).unwrap();
        assert_eq!(spline.knots(), &dvector![0., 0., 0., 0.5, 0.5, 1., 1., 1.]);
        assert_eq!(spline.control_points(), &dmatrix![-1., -0.5, 0., 0.5, 1.;]);
    }

    #[rstest]
    fn insertion_keeps_the_size_invariants(c: BSpline) {
        let mut spline = c;
        spline.insert_knot(0.3, 2).unwrap();

        assert_eq!(spline.knot_count(), spline.control_point_count() + spline.order());
        assert!(knots::is_nondecreasing(spline.knots()));
    }
}
