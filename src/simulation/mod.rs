//! World - sand automaton plus chunked collision geometry.
//!
//! `WorldCore` only orchestrates. Each tick runs, in order:
//! - the cellular automaton stepper (systems/stepper.rs)
//! - actor displacement of Sand (systems/actors)
//! - collision re-meshing of dirty chunks (systems/collision)
//! - render color sync of the same dirty chunks
//!
//! The dirty set is cleared at the end of every tick, whether or not anything
//! consumed it.

use rand_chacha::ChaCha8Rng;

use crate::actors::{Actor, ActorShape, ActorSystem, Vec2};
use crate::chunks::ChunkCoord;
use crate::collision::{ChunkBodies, ChunkBody, CollisionMeshBuilder};
use crate::config::WorldConfig;
use crate::grid::Grid;
use crate::materials::Material;
use crate::stepper::Stepper;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/terrain.rs"]
mod terrain;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "actors/actors.rs"]
mod actors;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::TickStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: WorldConfig,
    grid: Grid,
    stepper: Stepper,
    collision: CollisionMeshBuilder,
    actors: ActorSystem,
    rng: ChaCha8Rng,

    // Render
    colors: Vec<u32>,
    rebuilt_flat: Vec<u32>,

    // State
    tick: u64,
    sim_time: f64,

    // Perf metrics
    perf_enabled: bool,
    stats: TickStats,
}

impl WorldCore {
    /// Create a world of the given size with the default terrain.
    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        init::create_world_core(WorldConfig::with_size(width, height))
    }

    pub fn from_config(config: WorldConfig) -> Result<Self, String> {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        init::create_world_core(WorldConfig::from_json(json)?)
    }

    pub fn config(&self) -> &WorldConfig { &self.config }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn tick_count(&self) -> u64 { self.tick }

    /// Sum of every `dt` passed to `tick`.
    pub fn sim_time(&self) -> f64 { self.sim_time }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, dt: f32) {
        step::tick(self, dt);
    }

    // === Settings ===

    /// Enable or disable per-tick timings (counters are always collected)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Stats of the last tick
    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    /// Restart the RNG stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed);
    }

    pub fn set_cell_size(&mut self, cell_size: f32) -> Result<(), String> {
        settings::set_cell_size(self, cell_size)
    }

    // === Commands ===

    pub fn get_cell(&self, x: i32, y: i32) -> Material {
        self.grid.get(x, y)
    }

    /// Write one cell. Returns true if the value changed.
    pub fn set_cell(&mut self, x: i32, y: i32, material: Material) -> bool {
        commands::set_cell(self, x, y, material)
    }

    /// Fill a disc with `material` (brush). Returns cells changed.
    pub fn paint(&mut self, cx: i32, cy: i32, radius: i32, material: Material) -> u32 {
        commands::paint(self, cx, cy, radius, material)
    }

    /// Empty a disc. Returns cells changed.
    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        commands::paint(self, cx, cy, radius, Material::Empty)
    }

    /// Empty the whole grid and drop actors.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Empty the grid and lay down the configured terrain again.
    pub fn reset_terrain(&mut self) {
        commands::reset_terrain(self)
    }

    // === Actors ===

    pub fn spawn_actor(&mut self, position: Vec2, shape: ActorShape) -> u32 {
        actors::spawn_actor(self, position, shape)
    }

    pub fn set_actor_position(&mut self, id: u32, position: Vec2) -> bool {
        actors::set_actor_position(self, id, position)
    }

    pub fn set_actor_shape(&mut self, id: u32, shape: ActorShape) -> bool {
        actors::set_actor_shape(self, id, shape)
    }

    pub fn remove_actor(&mut self, id: u32) -> bool {
        actors::remove_actor(self, id)
    }

    pub fn actor(&self, id: u32) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.count()
    }

    // === Collision ===

    pub fn chunk_body(&self, coord: ChunkCoord) -> Option<&ChunkBody> {
        self.collision.body(coord)
    }

    pub fn chunk_bodies(&self) -> &ChunkBodies {
        self.collision.bodies()
    }

    /// Chunks re-meshed by the last tick, in chunk-index order.
    pub fn rebuilt_chunks(&self) -> &[ChunkCoord] {
        self.collision.rebuilt()
    }

    /// Queue one chunk for re-meshing and repaint on the next tick, even if
    /// none of its cells changed. False for coordinates outside the grid.
    pub fn invalidate_chunk(&mut self, coord: ChunkCoord) -> bool {
        commands::invalidate_chunk(self, coord)
    }

    pub fn chunks_x(&self) -> u32 { self.grid.chunks_x() }

    pub fn chunks_y(&self) -> u32 { self.grid.chunks_y() }

    // === Render ===

    /// Pointer to material ids (for JS rendering)
    pub fn types_ptr(&self) -> *const u8 {
        self.grid.types_ptr()
    }

    pub fn types_len(&self) -> usize {
        self.grid.size()
    }

    /// Pointer to ABGR colors (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.colors.len()
    }

    /// `[cx, cy, ...]` of the chunks rebuilt by the last tick.
    pub fn rebuilt_chunks_flat(&self) -> &[u32] {
        &self.rebuilt_flat
    }

    /// `[center_x, center_y, width, height, ...]` for one chunk body.
    pub fn chunk_rects_flat(&self, cx: u32, cy: u32) -> Vec<f32> {
        render_extract::chunk_rects_flat(self, ChunkCoord::new(cx, cy))
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
