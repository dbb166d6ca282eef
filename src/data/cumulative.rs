// ---------------------------------------------------------------------------
// CumulativeCurve – running sum of volume percentages
// ---------------------------------------------------------------------------

/// The cumulative distribution of one sample vector, in table (ascending
/// phi) order, reaching ≈ 100 at the last populated row.
///
/// A pure derived view: recomputed on demand from the sample vector, never
/// mutated once returned. No interpolation or smoothing is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeCurve {
    values: Vec<f64>,
}

impl CumulativeCurve {
    /// Running sum over a table-oriented sample vector.
    pub fn from_vector(vector: &[f64]) -> Self {
        let mut sum = 0.0;
        let values = vector
            .iter()
            .map(|v| {
                sum += v;
                sum
            })
            .collect();
        CumulativeCurve { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Final cumulative value, i.e. the sum of the raw vector.
    pub fn total(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Presentation view: zero entries are outside the observed range and
    /// become `None` so plots break the line there. Computation always uses
    /// the literal zeros in [`values`](Self::values).
    pub fn masked(&self) -> Vec<Option<f64>> {
        self.values
            .iter()
            .map(|&v| if v == 0.0 { None } else { Some(v) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_sum_is_non_decreasing() {
        let c = CumulativeCurve::from_vector(&[10.0, 20.0, 40.0, 20.0, 10.0]);
        assert_eq!(c.values(), &[10.0, 30.0, 70.0, 90.0, 100.0]);
        assert!(c.values().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn total_round_trips_the_raw_sum() {
        let v = [0.0, 0.12, 3.4, 7.7, 0.0, 1.1];
        let c = CumulativeCurve::from_vector(&v);
        assert!((c.total() - v.iter().sum::<f64>()).abs() < 1e-12);
    }

    #[test]
    fn masked_hides_leading_zeros_only_for_display() {
        let c = CumulativeCurve::from_vector(&[0.0, 0.0, 50.0, 50.0]);
        assert_eq!(
            c.masked(),
            vec![None, None, Some(50.0), Some(100.0)]
        );
        // Literal zeros retained for computation.
        assert_eq!(c.values()[0], 0.0);
    }
}
