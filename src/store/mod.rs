//! Sparse cell storage.
//!
//! Only cells with content are stored; everything else reads back as an
//! empty [`Cell`] synthesized on demand.

mod loader;

use std::borrow::Cow;
use std::collections::HashMap;

use crate::types::{Cell, CellRegion};

pub use loader::LoadSummary;

/// Sparse `(row, col) -> Cell` map. Never holds an entry with an empty value.
#[derive(Debug, Clone, Default)]
pub struct CellStore {
    cells: HashMap<(u32, u32), Cell>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored cell, or an empty one that is not persisted.
    pub fn get(&self, row: u32, col: u32) -> Cow<'_, Cell> {
        match self.cells.get(&(row, col)) {
            Some(cell) => Cow::Borrowed(cell),
            None => Cow::Owned(Cell::default()),
        }
    }

    /// Displayed text of a cell (`""` when empty).
    pub fn value(&self, row: u32, col: u32) -> &str {
        self.cells
            .get(&(row, col))
            .map_or("", |cell| cell.value.as_str())
    }

    /// Write a cell from user input. Empty input deletes the entry.
    ///
    /// Returns the previous value (`""` if the cell was empty).
    pub fn set(&mut self, row: u32, col: u32, value: &str) -> String {
        let previous = if value.is_empty() {
            self.cells.remove(&(row, col))
        } else {
            self.cells.insert((row, col), Cell::from_input(value))
        };
        previous.map(|cell| cell.value).unwrap_or_default()
    }

    pub fn has_content(&self, row: u32, col: u32) -> bool {
        self.cells.contains_key(&(row, col))
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// All non-empty cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), &Cell)> {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    /// Non-empty cells inside `region`, in row-major order.
    ///
    /// Probes the region cell by cell when it is smaller than the store,
    /// otherwise filters the store.
    pub fn cells_in_region(&self, region: &CellRegion) -> Vec<((u32, u32), &Cell)> {
        let mut found: Vec<((u32, u32), &Cell)> = if region.cell_count() <= self.cells.len() as u64 {
            region
                .cells()
                .filter_map(|pos| self.cells.get(&pos).map(|cell| (pos, cell)))
                .collect()
        } else {
            self.cells
                .iter()
                .filter(|((row, col), _)| region.contains(*row, *col))
                .map(|(pos, cell)| (*pos, cell))
                .collect()
        };
        found.sort_unstable_by_key(|(pos, _)| *pos);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_after_set() {
        let mut store = CellStore::new();
        assert_eq!(store.set(3, 4, "hello"), "");
        assert_eq!(store.get(3, 4).value, "hello");
        assert!(store.has_content(3, 4));
        assert_eq!(store.set(3, 4, "world"), "hello");
        assert_eq!(store.value(3, 4), "world");
    }

    #[test]
    fn empty_value_removes_entry() {
        let mut store = CellStore::new();
        store.set(1, 1, "x");
        assert_eq!(store.set(1, 1, ""), "x");
        assert!(!store.has_content(1, 1));
        assert!(store.is_empty());
    }

    #[test]
    fn missing_cells_are_synthesized_not_stored() {
        let store = CellStore::new();
        let cell = store.get(99_999, 999);
        assert!(cell.is_empty());
        assert!(matches!(cell, Cow::Owned(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn formulas_are_kept_as_text() {
        let mut store = CellStore::new();
        store.set(0, 0, "=A2+1");
        let cell = store.get(0, 0);
        assert_eq!(cell.value, "=A2+1");
        assert_eq!(cell.formula.as_deref(), Some("=A2+1"));
    }

    #[test]
    fn region_query_both_strategies() {
        let mut store = CellStore::new();
        store.set(0, 0, "a");
        store.set(2, 1, "b");
        store.set(5, 5, "c");
        store.set(1, 0, "d");

        let small = store.cells_in_region(&CellRegion::new(0, 0, 2, 1));
        let positions: Vec<_> = small.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 1)]);

        let huge = store.cells_in_region(&CellRegion::new(0, 0, 10_000, 500));
        assert_eq!(huge.len(), 4);
        assert_eq!(huge.last().map(|(pos, _)| *pos), Some((5, 5)));
    }
}
