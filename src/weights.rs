//! Convex objective weightings and the fixed Pareto sweep.

/// A convex weighting of the two objectives.
///
/// Invariant: `time_factor + distance_factor = 1` (up to floating rounding
/// at the endpoints of the sweep).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    /// Weight on the normalized travel-time objective.
    pub time_factor: f64,
    /// Weight on the normalized distance objective.
    pub distance_factor: f64,
}

impl WeightVector {
    /// Creates a weighting from the time factor; the distance factor is its
    /// complement.
    pub fn from_time_factor(time_factor: f64) -> Self {
        Self {
            time_factor,
            distance_factor: 1.0 - time_factor,
        }
    }
}

/// The number of weightings in the fixed sweep.
pub const SWEEP_STEPS: usize = 11;

/// Iterates the sweep from `(0, 1)` to `(1, 0)` in steps of `0.1`.
///
/// Factors are derived from an integer counter rather than accumulated, so
/// the sweep always yields exactly [`SWEEP_STEPS`] weightings.
///
/// # Examples
///
/// ```
/// use pareto_tsp::weights::sweep;
///
/// let all: Vec<_> = sweep().collect();
/// assert_eq!(all.len(), 11);
/// assert!((all[0].time_factor - 0.0).abs() < 1e-12);
/// assert!((all[10].time_factor - 1.0).abs() < 1e-12);
/// assert!((all[3].time_factor + all[3].distance_factor - 1.0).abs() < 1e-12);
/// ```
pub fn sweep() -> impl Iterator<Item = WeightVector> {
    (0..SWEEP_STEPS).map(|k| WeightVector::from_time_factor(k as f64 / 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_has_eleven_steps_in_order() {
        let all: Vec<_> = sweep().collect();
        assert_eq!(all.len(), SWEEP_STEPS);
        for (k, w) in all.iter().enumerate() {
            assert!((w.time_factor - k as f64 / 10.0).abs() < 1e-12);
            assert!((w.time_factor + w.distance_factor - 1.0).abs() < 1e-12);
        }
    }
}
