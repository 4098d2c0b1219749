//! The cost model: raw and normalized matrices for both objectives.

use crate::matrix::{unit_vector_scale, SquareMatrix};

/// Raw and row-normalized cost matrices for an n-node instance.
///
/// Built once per loaded dataset; the normalized matrices feed the solver
/// objective, the raw ones are used to report realized tour totals.
/// Immutable after construction.
///
/// # Examples
///
/// ```
/// use pareto_tsp::matrix::SquareMatrix;
/// use pareto_tsp::model::CostModel;
///
/// let time = SquareMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let distance = SquareMatrix::from_rows(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap();
/// let model = CostModel::new(time, distance);
/// assert_eq!(model.len(), 2);
/// assert!((model.time().get(0, 1) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CostModel {
    time: SquareMatrix,
    distance: SquareMatrix,
    time_normalized: SquareMatrix,
    distance_normalized: SquareMatrix,
}

impl CostModel {
    /// Builds the model from raw time and distance matrices.
    ///
    /// Normalization happens here, once; inputs are assumed validated
    /// (square, matching sizes) by the data reader.
    pub fn new(time: SquareMatrix, distance: SquareMatrix) -> Self {
        let time_normalized = unit_vector_scale(&time);
        let distance_normalized = unit_vector_scale(&distance);
        Self {
            time,
            distance,
            time_normalized,
            distance_normalized,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.time.size()
    }

    /// Returns `true` if the instance has no nodes.
    pub fn is_empty(&self) -> bool {
        self.time.size() == 0
    }

    /// Raw travel-time matrix.
    pub fn time(&self) -> &SquareMatrix {
        &self.time
    }

    /// Raw distance matrix.
    pub fn distance(&self) -> &SquareMatrix {
        &self.distance
    }

    /// Row-normalized travel-time matrix.
    pub fn time_normalized(&self) -> &SquareMatrix {
        &self.time_normalized
    }

    /// Row-normalized distance matrix.
    pub fn distance_normalized(&self) -> &SquareMatrix {
        &self.distance_normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_matrices_survive_normalization_unchanged() {
        let time = SquareMatrix::from_rows(vec![
            vec![0.0, 2.5, 7.0],
            vec![2.5, 0.0, 3.0],
            vec![7.0, 3.0, 0.0],
        ])
        .unwrap();
        let distance = time.clone();
        let model = CostModel::new(time.clone(), distance.clone());
        // Round-trip: the stored raw matrices are bit-exact copies.
        assert_eq!(model.time(), &time);
        assert_eq!(model.distance(), &distance);
    }

    #[test]
    fn normalized_matrices_match_the_free_function() {
        let time = SquareMatrix::from_rows(vec![vec![0.0, 3.0], vec![4.0, 0.0]]).unwrap();
        let distance = SquareMatrix::from_rows(vec![vec![0.0, 6.0], vec![8.0, 0.0]]).unwrap();
        let model = CostModel::new(time.clone(), distance.clone());
        assert_eq!(model.time_normalized(), &unit_vector_scale(&time));
        assert_eq!(model.distance_normalized(), &unit_vector_scale(&distance));
    }
}
