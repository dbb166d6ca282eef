use std::collections::BTreeMap;
use std::path::Path;

use log::warn;

use crate::data::bins::BinTable;
use crate::data::grid::RawGrid;
use crate::error::{GrainError, Result};

// ---------------------------------------------------------------------------
// SampleMatrix – per-sample binned volume percentages
// ---------------------------------------------------------------------------

/// All samples of an analysis set, keyed by sample name.
///
/// Each vector is aligned row-for-row with the set's [`BinTable`] (same
/// reversal into ascending-phi order, missing cells already coerced to 0).
/// The elementwise mean/std across samples are computed columns, exposed as
/// methods rather than stored as entries, so per-sample statistics never
/// accidentally include them.
#[derive(Debug, Clone, Default)]
pub struct SampleMatrix {
    samples: BTreeMap<String, Vec<f64>>,
    n_bins: usize,
}

impl SampleMatrix {
    pub fn new(n_bins: usize) -> Self {
        SampleMatrix {
            samples: BTreeMap::new(),
            n_bins,
        }
    }

    /// Extract one sample's volume column from its parsed grid.
    ///
    /// The anchor search runs independently per grid: instrument alignment
    /// may differ slightly from run to run, so the row span is never reused
    /// across files. `data_col` is the column holding volume percentages.
    pub fn insert_from_grid(
        &mut self,
        name: impl Into<String>,
        grid: &RawGrid,
        anchor_microns: f64,
        data_col: usize,
    ) -> Result<()> {
        let (row, _) = grid.find_anchor(anchor_microns)?;
        let mut values = grid.data_column(row, data_col, self.n_bins)?;
        values.reverse();
        self.insert(name, values)
    }

    /// Insert an already table-oriented (ascending-phi) vector.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.n_bins {
            return Err(GrainError::MalformedInput(format!(
                "sample vector has {} bins, table has {}",
                values.len(),
                self.n_bins
            )));
        }
        let name = name.into();
        // Two source files with the same stem collide; last write wins.
        if self.samples.insert(name.clone(), values).is_some() {
            warn!("sample name '{name}' already present, overwriting");
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.samples.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.samples.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Elementwise mean across all samples (the derived "mean" column).
    pub fn mean_column(&self) -> Vec<f64> {
        if self.samples.is_empty() {
            return vec![0.0; self.n_bins];
        }
        let n = self.samples.len() as f64;
        let mut acc = vec![0.0; self.n_bins];
        for v in self.samples.values() {
            for (a, x) in acc.iter_mut().zip(v) {
                *a += x;
            }
        }
        acc.iter_mut().for_each(|a| *a /= n);
        acc
    }

    /// Elementwise sample standard deviation (ddof = 1) across all samples.
    /// Zero where fewer than two samples exist.
    pub fn std_column(&self) -> Vec<f64> {
        let n = self.samples.len();
        if n < 2 {
            return vec![0.0; self.n_bins];
        }
        let mean = self.mean_column();
        let mut acc = vec![0.0; self.n_bins];
        for v in self.samples.values() {
            for ((a, x), m) in acc.iter_mut().zip(v).zip(&mean) {
                *a += (x - m) * (x - m);
            }
        }
        acc.iter_mut()
            .for_each(|a| *a = (*a / (n as f64 - 1.0)).sqrt());
        acc
    }

    /// Sanity check against the bin table this matrix is meant to align with.
    pub fn aligned_with(&self, bins: &BinTable) -> bool {
        self.n_bins == bins.len()
    }
}

/// Derive a sample name from a source file path: base name, extension
/// stripped.
pub fn sample_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_columns() {
        let mut m = SampleMatrix::new(3);
        m.insert("a", vec![0.0, 10.0, 90.0]).unwrap();
        m.insert("b", vec![0.0, 30.0, 70.0]).unwrap();
        assert_eq!(m.mean_column(), vec![0.0, 20.0, 80.0]);
        let sd = m.std_column();
        assert!((sd[1] - (200.0f64).sqrt()).abs() < 1e-12);
        assert_eq!(sd[0], 0.0);
    }

    #[test]
    fn wrong_length_rejected() {
        let mut m = SampleMatrix::new(3);
        assert!(m.insert("a", vec![1.0]).is_err());
    }

    #[test]
    fn collision_last_write_wins() {
        let mut m = SampleMatrix::new(1);
        m.insert("a", vec![1.0]).unwrap();
        m.insert("a", vec![2.0]).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("a").unwrap(), &[2.0]);
    }

    #[test]
    fn name_from_path_strips_extension() {
        assert_eq!(
            sample_name_from_path(Path::new("/data/run1/KY-042.xlsx")),
            "KY-042"
        );
    }

    #[test]
    fn from_grid_reverses_to_table_order() {
        let grid = RawGrid::from_numeric(vec![
            vec![0.375198, 5.0],
            vec![62.5, 60.0],
            vec![2000.0, 35.0],
        ]);
        let mut m = SampleMatrix::new(3);
        m.insert_from_grid("s", &grid, 0.375198, 1).unwrap();
        // Coarsest first after reversal, matching ascending phi.
        assert_eq!(m.get("s").unwrap(), &[35.0, 60.0, 5.0]);
    }
}
