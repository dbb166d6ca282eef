use log::debug;
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::data::cumulative::CumulativeCurve;
use crate::error::{GrainError, Result};

// ---------------------------------------------------------------------------
// Cross-sample aggregate curves
// ---------------------------------------------------------------------------

/// Two-sided confidence level of the aggregate band.
const CONFIDENCE: f64 = 0.95;

/// Sample count at or above which the Normal distribution replaces
/// Student-t for the confidence band.
const NORMAL_THRESHOLD: usize = 30;

/// Elementwise summary of N cumulative curves: mean curve, standard error of
/// the mean, and a two-sided 95 % confidence band.
///
/// SEM and band are `None` at bins where fewer than two samples have a
/// non-zero (observed) cumulative value; the zeros there are outside the
/// samples' observed range, not measurements.
#[derive(Debug, Clone)]
pub struct AggregateCurves {
    /// Number of contributing samples.
    pub n: usize,
    /// Elementwise mean cumulative curve.
    pub mean: Vec<f64>,
    /// Elementwise standard error of the mean (`std / √n`, ddof = 1).
    pub sem: Vec<Option<f64>>,
    /// Lower edge of the confidence band.
    pub ci_low: Vec<Option<f64>>,
    /// Upper edge of the confidence band.
    pub ci_high: Vec<Option<f64>>,
}

impl AggregateCurves {
    /// Aggregate N ≥ 2 per-sample cumulative curves of equal length.
    pub fn from_curves(curves: &[CumulativeCurve]) -> Result<Self> {
        let n = curves.len();
        if n < 2 {
            return Err(GrainError::InsufficientSamples(n));
        }
        let len = curves[0].len();
        if curves.iter().any(|c| c.len() != len) {
            return Err(GrainError::MalformedInput(
                "cumulative curves differ in length".to_string(),
            ));
        }

        let quantile = two_sided_quantile(n);
        debug!(
            "aggregating {n} curves, {} quantile {quantile:.4}",
            if n >= NORMAL_THRESHOLD { "normal" } else { "t" }
        );

        let nf = n as f64;
        let mut mean = Vec::with_capacity(len);
        let mut sem = Vec::with_capacity(len);
        let mut ci_low = Vec::with_capacity(len);
        let mut ci_high = Vec::with_capacity(len);

        for i in 0..len {
            let values: Vec<f64> = curves.iter().map(|c| c.values()[i]).collect();
            let m = values.iter().sum::<f64>() / nf;
            mean.push(m);

            let observed = values.iter().filter(|&&v| v != 0.0).count();
            if observed < 2 {
                sem.push(None);
                ci_low.push(None);
                ci_high.push(None);
                continue;
            }
            let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (nf - 1.0);
            let se = (var / nf).sqrt();
            sem.push(Some(se));
            ci_low.push(Some(m - quantile * se));
            ci_high.push(Some(m + quantile * se));
        }

        Ok(AggregateCurves {
            n,
            mean,
            sem,
            ci_low,
            ci_high,
        })
    }

    /// Presentation view of the mean curve with zeros masked out, matching
    /// [`CumulativeCurve::masked`].
    pub fn mean_masked(&self) -> Vec<Option<f64>> {
        self.mean
            .iter()
            .map(|&v| if v == 0.0 { None } else { Some(v) })
            .collect()
    }
}

/// Critical value for the two-sided 95 % interval: Normal for n ≥ 30,
/// Student-t with df = n − 1 below that.
fn two_sided_quantile(n: usize) -> f64 {
    let upper = 1.0 - (1.0 - CONFIDENCE) / 2.0;
    if n >= NORMAL_THRESHOLD {
        Normal::standard().inverse_cdf(upper)
    } else {
        // n >= 2 is checked by the caller, so df >= 1.
        StudentsT::new(0.0, 1.0, (n - 1) as f64)
            .expect("degrees of freedom are >= 1")
            .inverse_cdf(upper)
    }
}
