//! Fenwick (binary indexed) tree over pixel sizes.
//!
//! Keeps prefix sums of row heights / column widths so offset and
//! pixel-to-index lookups stay O(log n) after arbitrary resizes.

/// Prefix-sum tree over `u32` sizes with `u64` sums.
///
/// Internally 1-based: node `i` covers the `i & -i` values ending at `i`.
#[derive(Debug, Clone, Default)]
pub struct FenwickTree {
    nodes: Vec<u64>,
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl FenwickTree {
    /// Build in O(n) from a slice of values.
    pub fn from_values(values: &[u32]) -> Self {
        let n = values.len();
        let mut nodes = vec![0u64; n + 1];
        for (i, value) in values.iter().enumerate() {
            let pos = i + 1;
            let Some(node) = nodes.get_mut(pos) else {
                continue;
            };
            *node += u64::from(*value);
            let current = *node;
            let parent = pos + lowbit(pos);
            if let Some(parent_node) = nodes.get_mut(parent) {
                *parent_node += current;
            }
        }
        Self { nodes }
    }

    /// Number of values tracked.
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the value at `index` (which is currently `old`) with `new`.
    pub fn replace(&mut self, index: usize, old: u32, new: u32) {
        let mut pos = index + 1;
        while let Some(node) = self.nodes.get_mut(pos) {
            *node = *node - u64::from(old) + u64::from(new);
            pos += lowbit(pos);
        }
    }

    /// Sum of the first `count` values. `count` past the end sums everything.
    pub fn prefix(&self, count: usize) -> u64 {
        let mut pos = count.min(self.len());
        let mut sum = 0;
        while pos > 0 {
            sum += self.nodes.get(pos).copied().unwrap_or(0);
            pos -= lowbit(pos);
        }
        sum
    }

    /// Sum of all values.
    pub fn total(&self) -> u64 {
        self.prefix(self.len())
    }

    /// Largest `count` such that `prefix(count) <= target`.
    ///
    /// With strictly positive values this is the index of the value whose
    /// span `[prefix(i), prefix(i + 1))` contains `target`.
    pub fn find_prefix(&self, target: u64) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }
        let mut step = 1usize << (usize::BITS - 1 - n.leading_zeros());
        let mut pos = 0usize;
        let mut remaining = target;
        while step > 0 {
            let next = pos + step;
            if next <= n {
                let node = self.nodes.get(next).copied().unwrap_or(u64::MAX);
                if node <= remaining {
                    pos = next;
                    remaining -= node;
                }
            }
            step >>= 1;
        }
        pos
    }
}
