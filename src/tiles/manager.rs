//! Tile lifecycle: materialize what the viewport needs, drop the rest.

use std::collections::{HashMap, HashSet};

use super::key::{TileKey, TileRange, TileSpans};
use super::tile::{DrawContext, Tile};
use crate::damage::Damage;
use crate::layout::Viewport;
use crate::render::surface::SurfaceFactory;
use crate::types::CellRegion;

/// Result of one [`TileManager::render_visible_tiles`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileUpdate {
    pub created: Vec<TileKey>,
    pub destroyed: Vec<TileKey>,
}

/// Owns every materialized tile and the factory that backs them.
pub struct TileManager<F: SurfaceFactory> {
    factory: F,
    spans: TileSpans,
    buffer: u32,
    tiles: HashMap<TileKey, Tile<F::Surface>>,
    range: Option<TileRange>,
}

impl<F: SurfaceFactory> TileManager<F> {
    pub fn new(factory: F, spans: TileSpans, buffer: u32) -> Self {
        Self {
            factory,
            spans,
            buffer,
            tiles: HashMap::new(),
            range: None,
        }
    }

    pub fn spans(&self) -> &TileSpans {
        &self.spans
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Tile window of the last render pass.
    pub fn range(&self) -> Option<TileRange> {
        self.range
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Materialized keys, sorted.
    pub fn materialized_keys(&self) -> Vec<TileKey> {
        let mut keys: Vec<TileKey> = self.tiles.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn tile(&self, key: TileKey) -> Option<&Tile<F::Surface>> {
        self.tiles.get(&key)
    }

    pub fn surface(&self, key: TileKey) -> Option<&F::Surface> {
        self.tiles.get(&key).and_then(Tile::surface)
    }

    /// Bring the materialized set in line with the viewport: exactly the
    /// visible tiles plus the buffer ring. New tiles are drawn immediately;
    /// tiles that fell out of the window release their surfaces.
    pub fn render_visible_tiles(&mut self, viewport: &Viewport, ctx: &DrawContext<'_>) -> TileUpdate {
        let range = self.spans.buffered_range(viewport, ctx.layout, self.buffer);
        let mut update = TileUpdate::default();

        let stale: Vec<TileKey> = self
            .tiles
            .keys()
            .filter(|key| !range.contains(**key))
            .copied()
            .collect();
        for key in stale {
            if let Some(mut tile) = self.tiles.remove(&key) {
                tile.release();
                update.destroyed.push(key);
            }
        }

        for key in range.keys() {
            if self.tiles.contains_key(&key) {
                continue;
            }
            let surface = self.factory.create_tile(key);
            if surface.is_none() {
                log::debug!("tile {key:?} has no surface; it will not draw");
            }
            let mut tile = Tile::new(key, self.spans.region_of(key), surface);
            tile.draw(ctx);
            self.tiles.insert(key, tile);
            update.created.push(key);
        }

        if !update.created.is_empty() || !update.destroyed.is_empty() {
            log::debug!(
                "tiles: +{} -{} ({} live)",
                update.created.len(),
                update.destroyed.len(),
                self.tiles.len()
            );
        }
        self.range = Some(range);
        update
    }

    /// Redraw one tile if it is materialized.
    pub fn draw_tile(&mut self, key: TileKey, ctx: &DrawContext<'_>) -> bool {
        self.tiles.get_mut(&key).is_some_and(|tile| tile.draw(ctx))
    }

    pub fn redraw_all(&mut self, ctx: &DrawContext<'_>) {
        for tile in self.tiles.values_mut() {
            tile.draw(ctx);
        }
    }

    /// Redraw every materialized tile that intersects `region`. Returns the keys redrawn.
    pub fn redraw_region(&mut self, region: &CellRegion, ctx: &DrawContext<'_>) -> Vec<TileKey> {
        let mut redrawn = Vec::new();
        for tile in self.tiles.values_mut() {
            if tile.region.intersect(region).is_some() {
                tile.draw(ctx);
                redrawn.push(tile.key);
            }
        }
        redrawn
    }

    /// Repaint a single cell inside the tile that covers it.
    pub fn draw_single_cell(&mut self, row: u32, col: u32, ctx: &DrawContext<'_>) -> bool {
        let key = self.spans.key_for_cell(row, col);
        self.tiles
            .get_mut(&key)
            .is_some_and(|tile| tile.draw_cell(row, col, ctx))
    }

    /// Turn accumulated damage into the minimal set of redraws.
    pub fn apply_damage(&mut self, damage: &Damage, viewport: &Viewport, ctx: &DrawContext<'_>) {
        if damage.layout || damage.all_tiles {
            let update = self.render_visible_tiles(viewport, ctx);
            let fresh: HashSet<TileKey> = update.created.into_iter().collect();
            for tile in self.tiles.values_mut() {
                if !fresh.contains(&tile.key) {
                    tile.draw(ctx);
                }
            }
            return;
        }

        let mut redrawn: HashSet<TileKey> = HashSet::new();
        for region in &damage.regions {
            redrawn.extend(self.redraw_region(region, ctx));
        }
        for &(row, col) in &damage.cells {
            if !redrawn.contains(&self.spans.key_for_cell(row, col)) {
                self.draw_single_cell(row, col, ctx);
            }
        }
    }

    /// Release every tile.
    pub fn clear(&mut self) {
        for (_, mut tile) in self.tiles.drain() {
            tile.release();
        }
        self.range = None;
    }
}
