use crate::chunks::ChunkCoord;
use crate::materials::Material;

use super::init::rebuild_everything;
use super::terrain;
use super::WorldCore;

pub(super) fn set_cell(world: &mut WorldCore, x: i32, y: i32, material: Material) -> bool {
    world.grid.set(x, y, material)
}

/// Disc brush. Every write goes through `Grid::set`, so only cells that
/// actually change dirty their chunk. Picked up by the next tick.
///
/// The scan covers only the part of the disc's bounding box that lies on the
/// grid, in i64, so far-off centres and huge radii cost nothing extra.
pub(super) fn paint(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, material: Material) -> u32 {
    let (cx, cy) = (cx as i64, cy as i64);
    let r = radius.max(0) as i64;
    let r2 = r * r;

    let x0 = (cx - r).max(0);
    let y0 = (cy - r).max(0);
    let x1 = (cx + r).min(world.grid.width() as i64 - 1);
    let y1 = (cy + r).min(world.grid.height() as i64 - 1);

    let mut changed = 0u32;
    for y in y0..=y1 {
        let dy = y - cy;
        for x in x0..=x1 {
            let dx = x - cx;
            if dx * dx + dy * dy <= r2 && world.grid.set(x as i32, y as i32, material) {
                changed += 1;
            }
        }
    }
    changed
}

pub(super) fn invalidate_chunk(world: &mut WorldCore, coord: ChunkCoord) -> bool {
    if !world.grid.dirty_chunks().contains_coord(coord) {
        return false;
    }
    world.grid.mark_chunk_dirty(coord);
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.actors.clear();
    rebuild_everything(world);
}

pub(super) fn reset_terrain(world: &mut WorldCore) {
    world.grid.clear();
    terrain::seed_terrain(&mut world.grid, &world.config.terrain);
    rebuild_everything(world);
}
