//! Accumulated invalidation between frames.
//!
//! Mutations record what they touched here; the next flush turns it into
//! tile redraws.

use crate::types::CellRegion;

/// What needs repainting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Damage {
    /// Geometry changed: every tile must be repositioned and redrawn.
    pub layout: bool,
    /// Every materialized tile must be redrawn (geometry unchanged).
    pub all_tiles: bool,
    /// Single cells whose content changed.
    pub cells: Vec<(u32, u32)>,
    /// Blocks whose paint (selection, content) changed.
    pub regions: Vec<CellRegion>,
    pub headers: bool,
}

impl Damage {
    pub fn none() -> Self {
        Self::default()
    }

    /// Geometry change: everything moves.
    pub fn layout() -> Self {
        Self {
            layout: true,
            all_tiles: true,
            headers: true,
            ..Self::default()
        }
    }

    pub fn all() -> Self {
        Self {
            all_tiles: true,
            headers: true,
            ..Self::default()
        }
    }

    /// Header highlight or guide changed; tiles are unaffected.
    pub fn headers() -> Self {
        Self {
            headers: true,
            ..Self::default()
        }
    }

    pub fn cell(row: u32, col: u32) -> Self {
        Self {
            cells: vec![(row, col)],
            ..Self::default()
        }
    }

    pub fn region(region: CellRegion) -> Self {
        Self {
            regions: vec![region],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.layout
            && !self.all_tiles
            && !self.headers
            && self.cells.is_empty()
            && self.regions.is_empty()
    }

    pub fn merge(&mut self, other: Damage) {
        self.layout |= other.layout;
        self.all_tiles |= other.all_tiles;
        self.headers |= other.headers;
        self.cells.extend(other.cells);
        self.regions.extend(other.regions);
    }

    /// Move the accumulated damage out, leaving this empty.
    pub fn take(&mut self) -> Damage {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_and_take() {
        let mut damage = Damage::none();
        assert!(damage.is_empty());
        damage.merge(Damage::cell(1, 2));
        damage.merge(Damage::region(CellRegion::new(0, 0, 3, 3)));
        assert!(!damage.is_empty());
        let taken = damage.take();
        assert_eq!(taken.cells, vec![(1, 2)]);
        assert_eq!(taken.regions.len(), 1);
        assert!(damage.is_empty());
    }

    #[test]
    fn layout_implies_full_repaint() {
        let damage = Damage::layout();
        assert!(damage.all_tiles && damage.headers);
    }
}
