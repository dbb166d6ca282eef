use crate::data::grid::RawGrid;
use crate::error::Result;

// ---------------------------------------------------------------------------
// BinTable – the fixed diameter scale shared by all samples
// ---------------------------------------------------------------------------

/// One diameter channel of the size analyzer, in all three units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinRow {
    /// Lower channel threshold in microns.
    pub microns: f64,
    /// Same threshold in millimeters (`microns / 1000`).
    pub mm: f64,
    /// Same threshold in phi units (`-log2(mm)`); larger phi = finer grain.
    pub phi: f64,
}

/// The ordered diameter scale of an analysis set.
///
/// Rows are stored in order of increasing phi (decreasing grain size): the
/// raw instrument order is reversed exactly once, here at construction.
/// Built from the first sample's grid only and shared read-only by every
/// sample in the set.
#[derive(Debug, Clone)]
pub struct BinTable {
    rows: Vec<BinRow>,
}

impl BinTable {
    /// Build the table from a parsed instrument grid.
    ///
    /// Locates the anchor cell (expected minimum bin size in microns), takes
    /// `n_rows` diameters from the anchor's column downward, converts to
    /// mm/phi and reverses into ascending-phi order.
    pub fn from_grid(grid: &RawGrid, anchor_microns: f64, n_rows: usize) -> Result<Self> {
        let (row, col) = grid.find_anchor(anchor_microns)?;
        let microns = grid.numeric_column(row, col, n_rows)?;
        Ok(Self::from_microns(microns))
    }

    /// Build the table directly from instrument-ordered micron thresholds
    /// (largest-size-last, as reported by the analyzer).
    pub fn from_microns(mut microns: Vec<f64>) -> Self {
        microns.reverse();
        let rows = microns
            .into_iter()
            .map(|um| {
                let mm = um / 1000.0;
                BinRow {
                    microns: um,
                    mm,
                    phi: -mm.log2(),
                }
            })
            .collect();
        BinTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[BinRow] {
        &self.rows
    }

    /// The ascending phi axis, one value per bin.
    pub fn phi(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.phi).collect()
    }

    /// Lower channel thresholds in microns, in table (ascending-phi) order.
    pub fn microns(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.microns).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_ascending_after_reversal() {
        // Instrument order: finest first.
        let t = BinTable::from_microns(vec![0.375198, 1.0, 62.5, 2000.0]);
        let phi = t.phi();
        assert!(phi.windows(2).all(|w| w[0] < w[1]));
        // Coarsest bin (2 mm) lands first: phi = -log2(2) = -1.
        assert!((phi[0] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn phi_matches_definition_exactly() {
        let t = BinTable::from_microns(vec![0.375198, 3.9, 62.5, 500.0, 2000.0]);
        for r in t.rows() {
            assert_eq!(r.mm, r.microns / 1000.0);
            assert_eq!(r.phi, -(r.microns / 1000.0).log2());
        }
    }

    #[test]
    fn from_grid_uses_anchor_row() {
        let grid = RawGrid::new(vec![
            vec![None, None],
            vec![Some(0.375198), Some(1.2)],
            vec![Some(62.5), Some(3.4)],
            vec![Some(2000.0), Some(0.0)],
        ]);
        let t = BinTable::from_grid(&grid, 0.375198, 3).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.rows()[0].microns, 2000.0);
        assert_eq!(t.rows()[2].microns, 0.375198);
    }
}
