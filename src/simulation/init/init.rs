use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::actors::ActorSystem;
use crate::collision::CollisionMeshBuilder;
use crate::config::WorldConfig;
use crate::grid::Grid;
use crate::stepper::Stepper;

use super::perf_stats::TickStats;
use super::render_extract;
use super::terrain;
use super::WorldCore;

pub(super) fn create_world_core(config: WorldConfig) -> Result<WorldCore, String> {
    config.validate()?;

    let grid = Grid::new(config.width, config.height);
    let collision = CollisionMeshBuilder::new(grid.chunks_x(), grid.chunks_y(), config.cell_size);
    let size = grid.size();

    let mut world = WorldCore {
        rng: ChaCha8Rng::seed_from_u64(config.seed),
        grid,
        stepper: Stepper::new(),
        collision,
        actors: ActorSystem::new(),
        colors: vec![0u32; size],
        rebuilt_flat: Vec::new(),
        tick: 0,
        sim_time: 0.0,
        perf_enabled: false,
        stats: TickStats::default(),
        config,
    };

    terrain::seed_terrain(&mut world.grid, &world.config.terrain);
    rebuild_everything(&mut world);

    log::info!(
        "world created: {}x{} cells, {}x{} chunks, {} rects, seed {}",
        world.grid.width(),
        world.grid.height(),
        world.grid.chunks_x(),
        world.grid.chunks_y(),
        world.collision.bodies().total_rects(),
        world.config.seed,
    );

    Ok(world)
}

/// Dirty every chunk, then run the same mesh and color sync a tick does and
/// forget the dirty set. Used after bulk edits and scale changes.
pub(super) fn rebuild_everything(world: &mut WorldCore) {
    world.grid.mark_all_dirty();
    world.collision.rebuild_dirty(&world.grid);
    render_extract::sync_dirty_colors(world);
    render_extract::flatten_rebuilt(world);
    world.grid.clear_dirty();
}
