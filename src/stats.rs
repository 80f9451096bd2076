//! Status-bar figures for the current selection.

use serde::Serialize;

use crate::store::CellStore;
use crate::types::Selection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStats {
    /// Non-empty cells.
    pub count: u64,
    pub numeric_count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl SelectionStats {
    pub fn compute(
        selection: &Selection,
        store: &CellStore,
        total_rows: u32,
        total_cols: u32,
    ) -> Self {
        let mut stats = SelectionStats::default();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for region in selection.regions(total_rows, total_cols) {
            for (_, cell) in store.cells_in_region(&region) {
                stats.count += 1;
                if let Some(n) = cell.numeric_value() {
                    stats.numeric_count += 1;
                    stats.sum += n;
                    min = min.min(n);
                    max = max.max(n);
                }
            }
        }
        if stats.numeric_count > 0 {
            stats.min = min;
            stats.max = max;
            #[allow(clippy::cast_precision_loss)]
            let n = stats.numeric_count as f64;
            stats.average = stats.sum / n;
        }
        stats
    }
}
