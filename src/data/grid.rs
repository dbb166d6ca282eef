use log::debug;

use crate::error::{GrainError, Result};

// ---------------------------------------------------------------------------
// RawGrid – the already-parsed spreadsheet content
// ---------------------------------------------------------------------------

/// A dense 2-D grid of cells as handed over by the ingestion collaborator.
///
/// Non-numeric and empty cells arrive as `None`. The engine does no file
/// I/O: whatever read the spreadsheet produces one `RawGrid` per sample and
/// the engine only locates the bin anchor and slices columns out of it.
#[derive(Debug, Clone)]
pub struct RawGrid {
    rows: Vec<Vec<Option<f64>>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<Option<f64>>>) -> Self {
        RawGrid { rows }
    }

    /// Convenience constructor for fully numeric grids (tests, demos).
    pub fn from_numeric(rows: Vec<Vec<f64>>) -> Self {
        RawGrid {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Some).collect())
                .collect(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| *r.get(col)?)
    }

    /// Locate the single cell exactly equal to `anchor` (the expected
    /// minimum bin size in microns). The diameter/data columns start at that
    /// cell's row. Exact float equality is intentional: the anchor is a
    /// verbatim instrument constant, not a measured value.
    pub fn find_anchor(&self, anchor: f64) -> Result<(usize, usize)> {
        let mut hit = None;
        for (i, row) in self.rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if *cell == Some(anchor) {
                    if hit.is_some() {
                        return Err(GrainError::MalformedInput(format!(
                            "anchor value {anchor} found more than once"
                        )));
                    }
                    hit = Some((i, j));
                }
            }
        }
        hit.ok_or_else(|| {
            GrainError::MalformedInput(format!("anchor value {anchor} not found"))
        })
    }

    /// Extract `n_rows` cells of column `col` starting at `start_row`,
    /// requiring every cell to be numeric. Used for the bin-size column.
    pub fn numeric_column(&self, start_row: usize, col: usize, n_rows: usize) -> Result<Vec<f64>> {
        let mut out = Vec::with_capacity(n_rows);
        for row in start_row..start_row + n_rows {
            match self.cell(row, col) {
                Some(v) => out.push(v),
                None => {
                    return Err(GrainError::MalformedInput(format!(
                        "expected {n_rows} numeric rows in column {col}, \
                         found non-numeric or missing cell at row {row}"
                    )));
                }
            }
        }
        Ok(out)
    }

    /// Extract `n_rows` cells of column `col` starting at `start_row`,
    /// coercing missing/non-numeric cells to 0.0. Used for volume data.
    pub fn data_column(&self, start_row: usize, col: usize, n_rows: usize) -> Result<Vec<f64>> {
        if start_row + n_rows > self.n_rows() {
            return Err(GrainError::MalformedInput(format!(
                "grid has {} rows, need rows {start_row}..{}",
                self.n_rows(),
                start_row + n_rows
            )));
        }
        let mut coerced = 0usize;
        let out = (start_row..start_row + n_rows)
            .map(|row| {
                self.cell(row, col).unwrap_or_else(|| {
                    coerced += 1;
                    0.0
                })
            })
            .collect();
        if coerced > 0 {
            debug!("coerced {coerced} missing cells to 0.0 in column {col}");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> RawGrid {
        RawGrid::new(vec![
            vec![None, None],
            vec![Some(0.375198), Some(1.0)],
            vec![Some(0.5), None],
            vec![Some(0.75), Some(3.0)],
        ])
    }

    #[test]
    fn anchor_found_once() {
        assert_eq!(grid().find_anchor(0.375198).unwrap(), (1, 0));
    }

    #[test]
    fn anchor_missing_is_malformed() {
        assert!(matches!(
            grid().find_anchor(42.0),
            Err(GrainError::MalformedInput(_))
        ));
    }

    #[test]
    fn anchor_duplicated_is_malformed() {
        let g = RawGrid::from_numeric(vec![vec![1.0], vec![1.0]]);
        assert!(matches!(
            g.find_anchor(1.0),
            Err(GrainError::MalformedInput(_))
        ));
    }

    #[test]
    fn numeric_column_rejects_gaps() {
        assert!(grid().numeric_column(1, 1, 3).is_err());
        assert_eq!(grid().numeric_column(1, 0, 3).unwrap(), vec![0.375198, 0.5, 0.75]);
    }

    #[test]
    fn data_column_coerces_gaps_to_zero() {
        assert_eq!(grid().data_column(1, 1, 3).unwrap(), vec![1.0, 0.0, 3.0]);
    }
}
