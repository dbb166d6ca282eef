use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::classify;
use crate::data::bins::BinTable;
use crate::data::cumulative::CumulativeCurve;
use crate::data::sample::SampleMatrix;
use crate::error::{GrainError, Result};
use crate::stats::interp::{percent_at_phi, phi_at_percent};
use crate::stats::peaks::find_peaks;

// ---------------------------------------------------------------------------
// StatisticsRecord – per-sample scalar statistics + labels
// ---------------------------------------------------------------------------

/// One mode slot. Padded slots (`phi: None`) exist so every record in a set
/// reports the same number of slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeSlot {
    /// Modal grain size in phi units.
    pub phi: Option<f64>,
    /// Volume percent at the mode.
    pub volume_pct: Option<f64>,
    /// Wentworth class of the modal size.
    pub class: Option<&'static str>,
}

impl ModeSlot {
    const EMPTY: ModeSlot = ModeSlot {
        phi: None,
        volume_pct: None,
        class: None,
    };
}

/// The full set of graphic statistics for one sample.
///
/// A pure derived view of the sample's vector and the shared bin table;
/// recomputed on demand, never mutated after being returned (set-level mode
/// padding happens before records leave [`summarize`]).
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsRecord {
    /// Phi of the coarsest populated bin (maximum grain size).
    pub max_phi: f64,
    pub max_class: Option<&'static str>,
    /// Phi of the finest populated bin (minimum grain size).
    pub min_phi: f64,
    pub min_class: Option<&'static str>,
    /// Modal sizes, most voluminous peak first.
    pub modes: Vec<ModeSlot>,
    /// Folk & Ward graphic mean, `(φ16 + φ50 + φ84) / 3`.
    pub mean: f64,
    pub mean_class: Option<&'static str>,
    /// `φ50`.
    pub median: f64,
    pub median_class: Option<&'static str>,
    /// Inclusive graphic standard deviation.
    pub sorting: f64,
    pub sorting_class: Option<&'static str>,
    /// Inclusive graphic skewness.
    pub skewness: f64,
    pub skewness_class: Option<&'static str>,
    /// Inclusive graphic kurtosis.
    pub kurtosis: f64,
    pub kurtosis_class: Option<&'static str>,
    pub sand_pct: f64,
    pub silt_pct: f64,
    pub clay_pct: f64,
    pub sediment_class: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Per-sample derivation
// ---------------------------------------------------------------------------

/// Compute the statistics record for one sample vector.
///
/// `name` is only used for error reporting. Fails with
/// [`GrainError::EmptySample`] when no bin holds a positive volume.
pub fn sample_statistics(
    bins: &BinTable,
    name: &str,
    vector: &[f64],
    min_prominence: f64,
) -> Result<StatisticsRecord> {
    let phi = bins.phi();

    // Extrema from the raw vector: first/last strictly positive bin.
    let first = vector
        .iter()
        .position(|&v| v > 0.0)
        .ok_or_else(|| GrainError::EmptySample(name.to_string()))?;
    let last = vector.iter().rposition(|&v| v > 0.0).unwrap_or(first);
    let max_phi = phi[first];
    let min_phi = phi[last];

    // Modes: prominent local maxima of the raw vector, ranked by volume
    // descending. Ties on volume fall back to phi, matching the original's
    // ascending (volume, phi) sort read out in reverse.
    let peaks = find_peaks(vector, min_prominence);
    let mut ranked: Vec<(f64, f64)> = peaks.iter().map(|p| (p.value, phi[p.index])).collect();
    ranked.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ranked.reverse();
    let modes: Vec<ModeSlot> = ranked
        .iter()
        .map(|&(volume, mode_phi)| ModeSlot {
            phi: Some(mode_phi),
            volume_pct: Some(volume),
            class: classify::wentworth(mode_phi),
        })
        .collect();
    debug!("{name}: {} mode(s) above prominence {min_prominence}", modes.len());

    // Percentile-driven graphic measures (Folk & Ward 1957).
    let cumulative = CumulativeCurve::from_vector(vector);
    let cum = cumulative.values();
    let p = |v: f64| phi_at_percent(v, cum, &phi);
    let (phi5, phi16, phi25) = (p(5.0), p(16.0), p(25.0));
    let (phi50, phi75, phi84, phi95) = (p(50.0), p(75.0), p(84.0), p(95.0));

    let median = phi50;
    let mean = (phi16 + phi50 + phi84) / 3.0;
    let sorting = (phi84 - phi16) / 4.0 + (phi95 - phi5) / 6.6;
    let skewness = (phi16 + phi84 - 2.0 * phi50) / (2.0 * (phi84 - phi16))
        + (phi5 + phi95 - 2.0 * phi50) / (2.0 * (phi95 - phi5));
    let kurtosis = (phi95 - phi5) / (2.44 * (phi75 - phi25));

    // Sand/silt/clay split: the inverse interpolation direction, percent as
    // a function of phi at the 4 and 8 phi boundaries.
    let sand_pct = percent_at_phi(4.0, &phi, cum);
    let silt_pct = percent_at_phi(8.0, &phi, cum) - sand_pct;
    let clay_pct = 100.0 - (sand_pct + silt_pct);

    Ok(StatisticsRecord {
        max_phi,
        max_class: classify::wentworth(max_phi),
        min_phi,
        min_class: classify::wentworth(min_phi),
        modes,
        mean,
        mean_class: classify::wentworth(mean),
        median,
        median_class: classify::wentworth(median),
        sorting,
        sorting_class: classify::sorting_class(sorting),
        skewness,
        skewness_class: classify::skewness_class(skewness),
        kurtosis,
        kurtosis_class: classify::kurtosis_class(kurtosis),
        sand_pct,
        silt_pct,
        clay_pct,
        sediment_class: classify::folk_sediment(sand_pct, silt_pct, clay_pct),
    })
}

// ---------------------------------------------------------------------------
// Whole-set summary
// ---------------------------------------------------------------------------

/// Compute statistics for every sample in the matrix, keyed by sample name.
///
/// An empty sample yields an `Err` entry for that sample only; the rest of
/// the batch proceeds. Mode lists of the successful records are padded with
/// empty slots to the widest record, so all of them report the same number
/// of slots.
pub fn summarize(
    bins: &BinTable,
    samples: &SampleMatrix,
    min_prominence: f64,
) -> BTreeMap<String, Result<StatisticsRecord>> {
    let mut out: BTreeMap<String, Result<StatisticsRecord>> = samples
        .iter()
        .map(|(name, vector)| {
            (
                name.to_string(),
                sample_statistics(bins, name, vector, min_prominence),
            )
        })
        .collect();

    pad_mode_slots(out.values_mut().filter_map(|r| r.as_mut().ok()));
    out
}

/// Statistics over the derived elementwise-mean column of the set. The mean
/// column is a computed aggregate, so it is kept out of [`summarize`] and
/// requested explicitly.
pub fn mean_statistics(
    bins: &BinTable,
    samples: &SampleMatrix,
    min_prominence: f64,
) -> Result<StatisticsRecord> {
    sample_statistics(bins, "mean", &samples.mean_column(), min_prominence)
}

/// Pad every record's mode list with empty slots up to the widest list.
pub fn pad_mode_slots<'a>(records: impl Iterator<Item = &'a mut StatisticsRecord>) {
    let records: Vec<_> = records.collect();
    let widest = records.iter().map(|r| r.modes.len()).max().unwrap_or(0);
    for record in records {
        record.modes.resize(widest, ModeSlot::EMPTY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_bin_table() -> BinTable {
        // Instrument order is finest-first; reversal yields phi {0,1,2,3,4}.
        BinTable::from_microns(vec![62.5, 125.0, 250.0, 500.0, 1000.0])
    }

    #[test]
    fn folk_ward_measures_on_reference_sample() {
        let bins = five_bin_table();
        let v = [10.0, 20.0, 40.0, 20.0, 10.0];
        let st = sample_statistics(&bins, "ref", &v, 0.1).unwrap();

        // Cumulative {10,30,70,90,100}: φ50 interpolates between 30 and 70.
        assert!((st.median - 1.5).abs() < 1e-12);
        // Symmetric distribution: mean == median. The 5th percentile clamps
        // to the first bin (cumulative starts at 10), so the second skewness
        // term is (0 + 3.5 - 3) / (2 * 3.5), not zero.
        assert!((st.mean - st.median).abs() < 1e-12);
        assert!((st.skewness - 0.5 / 7.0).abs() < 1e-12);
        // All mass is coarser than phi 4.
        assert!((st.sand_pct - 100.0).abs() < 1e-12);
        assert!(st.silt_pct.abs() < 1e-12);
        assert!(st.clay_pct.abs() < 1e-12);
        assert_eq!(st.sediment_class, Some("sand"));
        // Single mode at the φ2 bin.
        assert_eq!(st.modes.len(), 1);
        assert_eq!(st.modes[0].phi, Some(2.0));
    }

    #[test]
    fn extrema_skip_empty_bins() {
        let bins = five_bin_table();
        let v = [0.0, 25.0, 50.0, 25.0, 0.0];
        let st = sample_statistics(&bins, "s", &v, 0.1).unwrap();
        assert_eq!(st.max_phi, 1.0);
        assert_eq!(st.min_phi, 3.0);
    }

    #[test]
    fn empty_sample_is_an_error() {
        let bins = five_bin_table();
        let v = [0.0; 5];
        assert!(matches!(
            sample_statistics(&bins, "blank", &v, 0.1),
            Err(GrainError::EmptySample(name)) if name == "blank"
        ));
    }

    #[test]
    fn primary_mode_is_most_voluminous() {
        let bins = BinTable::from_microns(vec![
            15.625, 31.25, 62.5, 125.0, 250.0, 500.0, 1000.0,
        ]);
        // Peaks at phi 1 (vol 30) and phi 4 (vol 35): finer peak is bigger.
        let v = [5.0, 30.0, 10.0, 5.0, 35.0, 10.0, 5.0];
        let st = sample_statistics(&bins, "bimodal", &v, 0.1).unwrap();
        assert_eq!(st.modes[0].phi, Some(4.0));
        assert_eq!(st.modes[1].phi, Some(1.0));
        assert!(st.modes[0].volume_pct >= st.modes[1].volume_pct);
    }

    #[test]
    fn summarize_pads_modes_and_isolates_failures() {
        let bins = BinTable::from_microns(vec![
            15.625, 31.25, 62.5, 125.0, 250.0, 500.0, 1000.0,
        ]);
        let mut m = SampleMatrix::new(7);
        m.insert("bimodal", vec![5.0, 30.0, 10.0, 5.0, 35.0, 10.0, 5.0])
            .unwrap();
        m.insert("unimodal", vec![5.0, 20.0, 50.0, 20.0, 5.0, 0.0, 0.0])
            .unwrap();
        m.insert("blank", vec![0.0; 7]).unwrap();

        let st = summarize(&bins, &m, 0.1);
        assert!(st["blank"].is_err());

        let bi = st["bimodal"].as_ref().unwrap();
        let uni = st["unimodal"].as_ref().unwrap();
        assert_eq!(bi.modes.len(), uni.modes.len());
        // The unimodal sample got a padding slot, not a dropped column.
        assert_eq!(uni.modes[1], ModeSlot::EMPTY);
    }

    #[test]
    fn mean_statistics_runs_on_derived_column() {
        let bins = five_bin_table();
        let mut m = SampleMatrix::new(5);
        m.insert("a", vec![10.0, 20.0, 40.0, 20.0, 10.0]).unwrap();
        m.insert("b", vec![20.0, 30.0, 30.0, 10.0, 10.0]).unwrap();
        let st = mean_statistics(&bins, &m, 0.1).unwrap();
        assert!((st.sand_pct - 100.0).abs() < 1e-12);
    }

    #[test]
    fn sand_silt_clay_sum_to_100() {
        // Mass across the sand/silt/clay boundaries.
        let bins = BinTable::from_microns(vec![
            0.9765625, 1.953125, 3.90625, 7.8125, 15.625, 31.25, 62.5, 125.0,
            250.0, 500.0,
        ]);
        let v = [2.0, 8.0, 15.0, 25.0, 20.0, 12.0, 8.0, 6.0, 3.0, 1.0];
        let st = sample_statistics(&bins, "mixed", &v, 0.1).unwrap();
        assert!((st.sand_pct + st.silt_pct + st.clay_pct - 100.0).abs() < 1e-9);
        assert!(st.sand_pct > 0.0 && st.silt_pct > 0.0 && st.clay_pct > 0.0);
    }
}
