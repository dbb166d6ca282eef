use serde::Serialize;

use crate::data::bins::BinTable;
use crate::data::sample::SampleMatrix;
use crate::error::{GrainError, Result};
use crate::stats::engine::StatisticsRecord;

// ---------------------------------------------------------------------------
// Flattened table for the GIS/tabular export collaborator
// ---------------------------------------------------------------------------

/// One exported sample: bulk sand/silt/clay proportions followed by the
/// per-bin volume percentages, aligned with [`ExportTable::bin_microns`].
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub sample: String,
    pub sand_pct: f64,
    pub silt_pct: f64,
    pub clay_pct: f64,
    pub volumes: Vec<f64>,
}

/// Flattened per-sample table in coarsest-first bin order.
///
/// Bin columns are identified by their numeric lower bound in microns; the
/// first retained bin sits under the 2 mm upper bound of the scale. Header
/// formatting (e.g. decimal-point substitution in generated column names)
/// is the export collaborator's job, so only numbers are exposed here.
#[derive(Debug, Clone, Serialize)]
pub struct ExportTable {
    /// Lower bin bounds in microns, coarsest first.
    pub bin_microns: Vec<f64>,
    pub rows: Vec<ExportRow>,
}

/// Flatten a sample set and its statistics records into an export table.
///
/// The coarsest table row is the upper 2 mm bound of the scale rather than a
/// populated channel and is dropped, as the downstream geodatabase format
/// expects. Samples whose statistics failed are simply absent from `stats`
/// and are skipped.
pub fn table(
    bins: &BinTable,
    samples: &SampleMatrix,
    stats: &std::collections::BTreeMap<String, StatisticsRecord>,
) -> Result<ExportTable> {
    if !samples.aligned_with(bins) {
        return Err(GrainError::MalformedInput(format!(
            "sample matrix has {} bins, table has {}",
            samples.n_bins(),
            bins.len()
        )));
    }

    let bin_microns: Vec<f64> = bins.microns().into_iter().skip(1).collect();
    let rows = samples
        .iter()
        .filter_map(|(name, vector)| {
            stats.get(name).map(|st| ExportRow {
                sample: name.to_string(),
                sand_pct: st.sand_pct,
                silt_pct: st.silt_pct,
                clay_pct: st.clay_pct,
                volumes: vector.iter().skip(1).copied().collect(),
            })
        })
        .collect();

    Ok(ExportTable { bin_microns, rows })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::stats::engine::sample_statistics;

    #[test]
    fn drops_upper_bound_row_and_skips_failed_samples() {
        let bins = BinTable::from_microns(vec![62.5, 125.0, 250.0, 500.0, 2000.0]);
        let mut m = SampleMatrix::new(5);
        m.insert("ok", vec![10.0, 20.0, 40.0, 20.0, 10.0]).unwrap();
        m.insert("blank", vec![0.0; 5]).unwrap();

        let mut stats = BTreeMap::new();
        stats.insert(
            "ok".to_string(),
            sample_statistics(&bins, "ok", m.get("ok").unwrap(), 0.1).unwrap(),
        );

        let t = table(&bins, &m, &stats).unwrap();
        assert_eq!(t.bin_microns.len(), 4);
        assert_eq!(t.bin_microns[0], 500.0);
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0].sample, "ok");
        assert_eq!(t.rows[0].volumes, vec![20.0, 40.0, 20.0, 10.0]);
        assert!((t.rows[0].sand_pct - 100.0).abs() < 1e-12);
    }
}
