//! Dense square cost matrices and the row-wise normalization they feed
//! through to the objective.

/// A dense n×n matrix of non-negative reals stored in row-major order.
///
/// One instance per objective (travel time, distance). The diagonal is
/// carried but never referenced by any formulation.
///
/// # Examples
///
/// ```
/// use pareto_tsp::matrix::SquareMatrix;
///
/// let m = SquareMatrix::from_rows(vec![
///     vec![0.0, 3.0],
///     vec![4.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert!((m.get(1, 0) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    data: Vec<f64>,
    size: usize,
}

impl SquareMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the grid is not square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Creates a matrix from flat row-major data.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Sets the entry at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.size + j] = value;
    }

    /// Number of rows (= columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

/// Scales each row of the matrix by that row's own Euclidean norm.
///
/// Rows are normalized independently; this is not a whole-matrix rescale.
/// An all-zero row has norm zero and is left unchanged rather than divided.
///
/// # Examples
///
/// ```
/// use pareto_tsp::matrix::{unit_vector_scale, SquareMatrix};
///
/// let m = SquareMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![0.0, 0.0, 0.0],
///     vec![1.0, 0.0, 0.0],
/// ]).unwrap();
/// let scaled = unit_vector_scale(&m);
/// assert!((scaled.get(0, 1) - 0.6).abs() < 1e-12);
/// assert!((scaled.get(0, 2) - 0.8).abs() < 1e-12);
/// assert_eq!(scaled.row(1), &[0.0, 0.0, 0.0]);
/// ```
pub fn unit_vector_scale(matrix: &SquareMatrix) -> SquareMatrix {
    let n = matrix.size();
    let mut result = SquareMatrix::new(n);
    for i in 0..n {
        let norm = matrix.row(i).iter().map(|v| v * v).sum::<f64>().sqrt();
        for j in 0..n {
            let value = if norm > 0.0 {
                matrix.get(i, j) / norm
            } else {
                matrix.get(i, j)
            };
            result.set(i, j, value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_none());
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        assert!(SquareMatrix::from_data(2, vec![1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn normalization_preserves_dimensions() {
        let m = SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 0.0, 4.0],
            vec![5.0, 6.0, 0.0],
        ])
        .unwrap();
        let scaled = unit_vector_scale(&m);
        assert_eq!(scaled.size(), 3);
    }

    #[test]
    fn zero_matrix_is_unchanged() {
        let m = SquareMatrix::new(4);
        assert_eq!(unit_vector_scale(&m), m);
    }

    #[test]
    fn rows_are_scaled_independently() {
        let m = SquareMatrix::from_rows(vec![vec![0.0, 2.0], vec![200.0, 0.0]]).unwrap();
        let scaled = unit_vector_scale(&m);
        // Each nonzero row ends up with unit norm regardless of magnitude.
        assert!((scaled.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((scaled.get(1, 0) - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn nonzero_rows_have_unit_norm(
            rows in proptest::collection::vec(
                proptest::collection::vec(0.0f64..1000.0, 4),
                4,
            )
        ) {
            let m = SquareMatrix::from_rows(rows).unwrap();
            let scaled = unit_vector_scale(&m);
            for i in 0..4 {
                let raw_norm = m.row(i).iter().map(|v| v * v).sum::<f64>().sqrt();
                if raw_norm > 0.0 {
                    let norm = scaled.row(i).iter().map(|v| v * v).sum::<f64>().sqrt();
                    prop_assert!((norm - 1.0).abs() < 1e-9);
                }
            }
        }
    }
}
