use super::perf_timer::elapsed_or_zero;
use super::render_extract;
use super::{PerfTimer, WorldCore};

pub(super) fn tick(world: &mut WorldCore, dt: f32) {
    let perf_on = world.perf_enabled;
    world.stats.reset();
    let total_start = PerfTimer::start_if(perf_on);

    // === Automaton ===
    let t0 = PerfTimer::start_if(perf_on);
    let moved = world.stepper.step(&mut world.grid, &mut world.rng);
    world.stats.step_ms = elapsed_or_zero(t0);

    // === Actors push Sand ===
    let t0 = PerfTimer::start_if(perf_on);
    let displaced = world
        .actors
        .displace_sand(&mut world.grid, world.config.cell_size);
    world.stats.actors_ms = elapsed_or_zero(t0);

    // Grid is settled for this tick from here on.
    world.stats.dirty_chunks = world.grid.dirty_count() as u32;

    // === Collision mesh ===
    let t0 = PerfTimer::start_if(perf_on);
    let summary = world.collision.rebuild_dirty(&world.grid);
    world.stats.mesh_ms = elapsed_or_zero(t0);

    // === Render sync ===
    let t0 = PerfTimer::start_if(perf_on);
    render_extract::sync_dirty_colors(world);
    render_extract::flatten_rebuilt(world);
    world.stats.render_ms = elapsed_or_zero(t0);

    world.grid.clear_dirty();

    world.stats.tick = world.tick;
    world.stats.dt = dt;
    world.stats.cells_moved = moved;
    world.stats.cells_displaced = displaced;
    world.stats.chunks_rebuilt = summary.chunks;
    world.stats.rects_emitted = summary.rects;
    world.stats.total_rects = world.collision.bodies().total_rects() as u32;
    world.stats.actor_count = world.actors.count() as u32;
    world.stats.total_ms = elapsed_or_zero(total_start);

    if summary.chunks > 0 {
        log::debug!(
            "tick {}: moved {}, displaced {}, rebuilt {} chunks ({} rects)",
            world.tick,
            moved,
            displaced,
            summary.chunks,
            summary.rects,
        );
    }

    world.tick += 1;
    world.sim_time += dt as f64;
}
