//! One dimension of the grid: row heights or column widths.

use super::fenwick::FenwickTree;

/// Which dimension a size or index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Sizes (in whole logical pixels) of every row or every column.
///
/// Sizes are stored densely and mirrored in a [`FenwickTree`], so
/// `offset(i + 1) - offset(i) == size(i)` holds exactly for every index.
#[derive(Debug, Clone)]
pub struct AxisSizes {
    sizes: Vec<u32>,
    tree: FenwickTree,
    default_size: u32,
    min_size: u32,
}

impl AxisSizes {
    /// `len` entries, all at `default_size` (raised to `min_size` if needed).
    pub fn new(len: u32, default_size: u32, min_size: u32) -> Self {
        let default_size = default_size.max(min_size);
        let sizes = vec![default_size; len as usize];
        let tree = FenwickTree::from_values(&sizes);
        Self {
            sizes,
            tree,
            default_size,
            min_size,
        }
    }

    pub fn len(&self) -> u32 {
        u32::try_from(self.sizes.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Largest valid index (0 for an empty axis).
    pub fn last_index(&self) -> u32 {
        self.len().saturating_sub(1)
    }

    /// Clamp an index into `[0, len - 1]`.
    pub fn clamp_index(&self, index: u32) -> u32 {
        index.min(self.last_index())
    }

    /// Size of `index`; out-of-range indices report the default size.
    pub fn size(&self, index: u32) -> u32 {
        self.sizes
            .get(index as usize)
            .copied()
            .unwrap_or(self.default_size)
    }

    /// Store a new size. The index is clamped into range and the size is
    /// raised to the axis minimum. Returns the size actually stored.
    pub fn set_size(&mut self, index: u32, size: u32) -> u32 {
        let applied = size.max(self.min_size);
        let index = self.clamp_index(index) as usize;
        if let Some(slot) = self.sizes.get_mut(index) {
            let old = *slot;
            if old != applied {
                *slot = applied;
                self.tree.replace(index, old, applied);
            }
        }
        applied
    }

    /// Sum of the sizes strictly before `index`. Past the end this is the total.
    pub fn offset(&self, index: u32) -> u64 {
        self.tree.prefix(index as usize)
    }

    /// Pixel extent of the inclusive index span `[start, end]`.
    pub fn span(&self, start: u32, end: u32) -> u64 {
        let (start, end) = (start.min(end), start.max(end));
        self.offset(end.saturating_add(1)) - self.offset(start)
    }

    /// Total pixel extent of the axis.
    pub fn total(&self) -> u64 {
        self.tree.total()
    }

    /// Index whose span contains `pixel`, clamped to `[0, len - 1]`.
    ///
    /// Negative pixels resolve to 0, pixels past the end to the last index.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn index_at(&self, pixel: f64) -> u32 {
        if self.sizes.is_empty() || pixel.is_nan() || pixel <= 0.0 {
            return 0;
        }
        // Saturating float->int conversion; the value is known non-negative.
        let target = pixel.floor() as u64;
        let found = self.tree.find_prefix(target);
        u32::try_from(found).unwrap_or(u32::MAX).min(self.last_index())
    }

    /// All sizes, in index order.
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }
}
