//! Grows or shrinks a curve at either end.
//!
//! Resizing changes the number of control points and knots by the same
//! signed amount, keeping the size invariant `m = n + p + 1` intact. New
//! slots are zero-filled; surplus entries are discarded. The side bias
//! selects which end is affected: `back` appends or truncates at the
//! high-index end, otherwise existing data shifts to make room at the
//! low-index end (or leading entries are dropped).

use std::mem;

use crate::{
    curve::{BSpline, SplineError},
    types::{MatD, VecD},
};

/// Resizes `spline` in place by `n` control points and knots.
pub fn resize(spline: &mut BSpline, n: isize, back: bool) -> Result<(), SplineError> {
    if n == 0 {
        return Ok(());
    }

    let deg = spline.degree();
    let n_ctrlp = spline.control_point_count();
    let n_knots = spline.knot_count();
    let new_n_ctrlp = n_ctrlp.checked_add_signed(n).ok_or(SplineError::SizeOverflow)?;
    let new_n_knots = n_knots.checked_add_signed(n).ok_or(SplineError::SizeOverflow)?;
    if new_n_ctrlp <= deg {
        return Err(SplineError::DegreeTooHigh { p: deg, n_ctrlp: new_n_ctrlp });
    }

    let ctrlp = mem::replace(&mut spline.ctrlp, MatD::zeros(0, 0));
    let knots = mem::replace(&mut spline.knots, VecD::zeros(0));
    if n > 0 {
        let count = n as usize;
        spline.ctrlp = ctrlp.insert_columns(if back { n_ctrlp } else { 0 }, count, 0.0);
        spline.knots = knots.insert_rows(if back { n_knots } else { 0 }, count, 0.0);
    } else {
        let count = n.unsigned_abs();
        spline.ctrlp = ctrlp.remove_columns(if back { new_n_ctrlp } else { 0 }, count);
        spline.knots = knots.remove_rows(if back { new_n_knots } else { 0 }, count);
    }
    Ok(())
}

/// Returns a resized copy of `spline`.
pub fn resized(spline: &BSpline, n: isize, back: bool) -> Result<BSpline, SplineError> {
    let mut resized = spline.clone();
    resize(&mut resized, n, back)?;
    Ok(resized)
}
