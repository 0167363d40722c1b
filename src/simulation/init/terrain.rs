use crate::config::TerrainConfig;
use crate::grid::Grid;
use crate::materials::Material;

/// Lay down the initial terrain through `Grid::set`: a bedrock floor of
/// `ground_depth` rows and an optional emitter. Out-of-range emitter
/// positions are ignored like any other out-of-bounds write.
pub(super) fn seed_terrain(grid: &mut Grid, terrain: &TerrainConfig) {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let depth = terrain.ground_depth.min(grid.height()) as i32;

    for y in (height - depth)..height {
        for x in 0..width {
            grid.set(x, y, Material::BEDROCK);
        }
    }

    if let Some([ex, ey]) = terrain.emitter {
        if ex <= i32::MAX as u32 && ey <= i32::MAX as u32 {
            grid.set(ex as i32, ey as i32, Material::Emitter);
        }
    }
}
