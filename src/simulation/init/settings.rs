use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::init::rebuild_everything;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn reseed(world: &mut WorldCore, seed: u64) {
    world.config.seed = seed;
    world.rng = ChaCha8Rng::seed_from_u64(seed);
}

/// Rescale collision geometry. Every chunk is re-meshed at the new scale.
pub(super) fn set_cell_size(world: &mut WorldCore, cell_size: f32) -> Result<(), String> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(format!("cell_size must be positive, got {cell_size}"));
    }
    world.config.cell_size = cell_size;
    world.collision.set_cell_size(cell_size);
    rebuild_everything(world);
    Ok(())
}
