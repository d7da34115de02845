use rand::Rng;

/// Row-major weight arena: one row per unit, one column per input.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Samples every entry uniformly from `[-range, range)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, range: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for x in res.data.iter_mut() {
            *x = uniform(rng, range);
        }
        res
    }

    /// Wraps an existing row-major buffer. Returns `None` when the buffer
    /// length is not `rows * cols`.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Option<Matrix> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Matrix { rows, cols, data })
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.cols + c]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// One uniform sample from `[-range, range)`; `range == 0` gives exactly 0.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, range: f64) -> f64 {
    rng.gen::<f64>() * 2.0 * range - range
}

/// Full-length dot product. Callers check the lengths; extra elements of the
/// longer slice are ignored.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rows_are_contiguous_slices() {
        let m = Matrix::from_flat(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(1, 2), 6.0);
    }

    #[test]
    fn from_flat_rejects_wrong_length() {
        assert!(Matrix::from_flat(2, 2, vec![0.0; 3]).is_none());
    }

    #[test]
    fn random_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(8, 8, 0.1, &mut rng);
        assert!(m.as_slice().iter().all(|w| (-0.1..0.1).contains(w)));
    }

    #[test]
    fn zero_range_gives_zeros() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(3, 4, 0.0, &mut rng);
        assert!(m.as_slice().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn dot_handles_single_element() {
        assert_eq!(dot(&[3.0], &[-2.0]), -6.0);
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]), 6.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }
}
