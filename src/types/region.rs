use serde::Serialize;

/// Inclusive rectangular block of cells with `start <= end` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRegion {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl CellRegion {
    /// Build from any two corners; the result is normalized.
    pub fn new(row_a: u32, col_a: u32, row_b: u32, col_b: u32) -> Self {
        Self {
            start_row: row_a.min(row_b),
            start_col: col_a.min(col_b),
            end_row: row_a.max(row_b),
            end_col: col_a.max(col_b),
        }
    }

    /// Single-cell region.
    pub fn cell(row: u32, col: u32) -> Self {
        Self::new(row, col, row, col)
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.start_row && row <= self.end_row && col >= self.start_col && col <= self.end_col
    }

    pub fn intersect(&self, other: &CellRegion) -> Option<CellRegion> {
        let start_row = self.start_row.max(other.start_row);
        let end_row = self.end_row.min(other.end_row);
        let start_col = self.start_col.max(other.start_col);
        let end_col = self.end_col.min(other.end_col);
        (start_row <= end_row && start_col <= end_col).then_some(CellRegion {
            start_row,
            start_col,
            end_row,
            end_col,
        })
    }

    /// Smallest region covering both.
    pub fn union(&self, other: &CellRegion) -> CellRegion {
        CellRegion {
            start_row: self.start_row.min(other.start_row),
            start_col: self.start_col.min(other.start_col),
            end_row: self.end_row.max(other.end_row),
            end_col: self.end_col.max(other.end_col),
        }
    }

    pub fn row_count(&self) -> u64 {
        u64::from(self.end_row - self.start_row) + 1
    }

    pub fn col_count(&self) -> u64 {
        u64::from(self.end_col - self.start_col) + 1
    }

    pub fn cell_count(&self) -> u64 {
        self.row_count() * self.col_count()
    }

    pub fn is_single_cell(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }

    /// Clamp into a grid of `total_rows x total_cols`.
    pub fn clamp(&self, total_rows: u32, total_cols: u32) -> CellRegion {
        let max_row = total_rows.saturating_sub(1);
        let max_col = total_cols.saturating_sub(1);
        CellRegion::new(
            self.start_row.min(max_row),
            self.start_col.min(max_col),
            self.end_row.min(max_row),
            self.end_col.min(max_col),
        )
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.start_row..=self.end_row)
            .flat_map(move |row| (self.start_col..=self.end_col).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_any_corner_order() {
        let region = CellRegion::new(10, 3, 2, 1);
        assert_eq!((region.start_row, region.start_col), (2, 1));
        assert_eq!((region.end_row, region.end_col), (10, 3));
        assert_eq!(region.cell_count(), 27);
    }

    #[test]
    fn intersection_and_union() {
        let a = CellRegion::new(0, 0, 9, 9);
        let b = CellRegion::new(5, 5, 20, 20);
        assert_eq!(a.intersect(&b), Some(CellRegion::new(5, 5, 9, 9)));
        assert_eq!(a.intersect(&CellRegion::cell(10, 0)), None);
        assert_eq!(a.union(&b), CellRegion::new(0, 0, 20, 20));
    }

    #[test]
    fn cells_iterate_row_major() {
        let cells: Vec<_> = CellRegion::new(1, 1, 2, 2).cells().collect();
        assert_eq!(cells, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }
}
