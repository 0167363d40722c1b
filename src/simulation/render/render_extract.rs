use crate::chunks::ChunkCoord;

use super::WorldCore;

/// Repaint the color buffer for every dirty chunk. Must run before the dirty
/// set is cleared.
pub(super) fn sync_dirty_colors(world: &mut WorldCore) {
    let WorldCore { grid, colors, .. } = world;
    let width = grid.width() as usize;
    let cells = grid.cells();

    for coord in grid.dirty_chunks().iter() {
        let (x0, y0, x1, y1) = grid.chunk_cell_bounds(coord);
        for y in y0 as usize..y1 as usize {
            let row = y * width;
            let span = row + x0 as usize..row + x1 as usize;
            for (dst, src) in colors[span.clone()].iter_mut().zip(&cells[span]) {
                *dst = src.color();
            }
        }
    }
}

/// Mirror the builder's rebuilt list as `[cx, cy, ...]` for the host.
pub(super) fn flatten_rebuilt(world: &mut WorldCore) {
    world.rebuilt_flat.clear();
    for coord in world.collision.rebuilt() {
        world.rebuilt_flat.push(coord.cx);
        world.rebuilt_flat.push(coord.cy);
    }
}

pub(super) fn chunk_rects_flat(world: &WorldCore, coord: ChunkCoord) -> Vec<f32> {
    let Some(body) = world.collision.body(coord) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(body.rects().len() * 4);
    for rect in body.rects() {
        out.extend_from_slice(&[rect.center.x, rect.center.y, rect.size.x, rect.size.y]);
    }
    out
}
