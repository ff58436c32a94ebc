use nalgebra::{Dyn, MatrixView, MatrixViewMut, OMatrix, OVector, U1};

/// Dense column vector, used for knot vectors and single points.
pub type VecD = OVector<f64, Dyn>;

/// Dense matrix holding one point per column, so that the coordinates of
/// each point are contiguous in memory.
pub type MatD = OMatrix<f64, Dyn, Dyn>;

pub type VecDView<'a> = MatrixView<'a, f64, Dyn, U1, U1, Dyn>;
pub type VecDViewMut<'a> = MatrixViewMut<'a, f64, Dyn, U1, U1, Dyn>;

/// Contiguous sub-vector views, named after the ranges they select.
pub trait VecHelpers {
    fn head(&self, n: usize) -> VecDView<'_>;
    fn head_mut(&mut self, n: usize) -> VecDViewMut<'_>;

    fn segment(&self, start: usize, n: usize) -> VecDView<'_>;
    fn segment_mut(&mut self, start: usize, n: usize) -> VecDViewMut<'_>;

    fn tail(&self, n: usize) -> VecDView<'_>;
    fn tail_mut(&mut self, n: usize) -> VecDViewMut<'_>;
}

impl VecHelpers for VecD {
    fn head(&self, n: usize) -> VecDView<'_> {
        self.segment(0, n)
    }

    fn head_mut(&mut self, n: usize) -> VecDViewMut<'_> {
        self.segment_mut(0, n)
    }

    fn segment(&self, start: usize, n: usize) -> VecDView<'_> {
        self.rows(start, n)
    }

    fn segment_mut(&mut self, start: usize, n: usize) -> VecDViewMut<'_> {
        self.rows_mut(start, n)
    }

    fn tail(&self, n: usize) -> VecDView<'_> {
        self.segment(self.len() - n, n)
    }

    fn tail_mut(&mut self, n: usize) -> VecDViewMut<'_> {
        self.segment_mut(self.len() - n, n)
    }
}
