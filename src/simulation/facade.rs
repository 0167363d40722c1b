use wasm_bindgen::prelude::*;

use crate::actors::{ActorShape, Vec2};
use crate::materials::{Material, MaterialId};

use super::perf_stats::TickStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

impl World {
    /// Native access to the simulation core (tests, embedding).
    pub fn core(&self) -> &WorldCore {
        &self.core
    }
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and the default terrain
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Create a world from a JSON `WorldConfig` document
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.core.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn brush_radius(&self) -> i32 { self.core.config().brush_radius }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Advance one tick; `dt` is recorded in stats and simulated time
    pub fn tick(&mut self, dt: f32) {
        self.core.tick(dt);
    }

    /// Enable or disable per-tick timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Stats of the last tick
    pub fn get_stats(&self) -> TickStats {
        self.core.stats().clone()
    }

    pub fn reseed(&mut self, seed: u64) {
        self.core.reseed(seed);
    }

    pub fn set_cell_size(&mut self, cell_size: f32) -> Result<(), JsValue> {
        self.core
            .set_cell_size(cell_size)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === Cells ===

    pub fn get_cell(&self, x: i32, y: i32) -> MaterialId {
        self.core.get_cell(x, y).id()
    }

    /// Write one cell; false for unknown materials or no change
    pub fn set_cell(&mut self, x: i32, y: i32, material: MaterialId) -> bool {
        match Material::from_id(material) {
            Some(m) => self.core.set_cell(x, y, m),
            None => false,
        }
    }

    /// Paint a disc (brush); returns cells changed, 0 for unknown materials
    pub fn paint(&mut self, cx: i32, cy: i32, radius: i32, material: MaterialId) -> u32 {
        match Material::from_id(material) {
            Some(m) => self.core.paint(cx, cy, radius, m),
            None => 0,
        }
    }

    /// Paint with the configured brush radius
    pub fn paint_brush(&mut self, cx: i32, cy: i32, material: MaterialId) -> u32 {
        let radius = self.core.config().brush_radius;
        self.paint(cx, cy, radius, material)
    }

    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.erase(cx, cy, radius)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reset_terrain(&mut self) {
        self.core.reset_terrain();
    }

    // === Actors ===

    pub fn spawn_capsule_actor(&mut self, x: f32, y: f32, radius: f32, height: f32) -> u32 {
        self.core
            .spawn_actor(Vec2::new(x, y), ActorShape::Capsule { radius, height })
    }

    pub fn spawn_box_actor(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        self.core
            .spawn_actor(Vec2::new(x, y), ActorShape::Rect { width, height })
    }

    pub fn set_actor_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.set_actor_position(id, Vec2::new(x, y))
    }

    pub fn set_actor_capsule(&mut self, id: u32, radius: f32, height: f32) -> bool {
        self.core
            .set_actor_shape(id, ActorShape::Capsule { radius, height })
    }

    pub fn set_actor_box(&mut self, id: u32, width: f32, height: f32) -> bool {
        self.core.set_actor_shape(id, ActorShape::Rect { width, height })
    }

    pub fn remove_actor(&mut self, id: u32) -> bool {
        self.core.remove_actor(id)
    }

    #[wasm_bindgen(getter)]
    pub fn actor_count(&self) -> usize {
        self.core.actor_count()
    }

    // === Render buffers ===

    /// Get pointer to material ids (for JS rendering)
    pub fn types_ptr(&self) -> *const u8 {
        self.core.types_ptr()
    }

    pub fn types_len(&self) -> usize {
        self.core.types_len()
    }

    /// Get pointer to ABGR colors (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len() * std::mem::size_of::<u32>()
    }

    // === Collision ===

    pub fn chunks_x(&self) -> u32 {
        self.core.chunks_x()
    }

    pub fn chunks_y(&self) -> u32 {
        self.core.chunks_y()
    }

    /// Flattened `[cx, cy, ...]` of chunks rebuilt by the last tick
    pub fn rebuilt_chunks(&self) -> Vec<u32> {
        self.core.rebuilt_chunks_flat().to_vec()
    }

    /// Flattened `[center_x, center_y, width, height, ...]` of one chunk body
    pub fn chunk_rects(&self, cx: u32, cy: u32) -> Vec<f32> {
        self.core.chunk_rects_flat(cx, cy)
    }

    /// Force a re-mesh of one chunk on the next tick
    pub fn invalidate_chunk(&mut self, cx: u32, cy: u32) -> bool {
        self.core
            .invalidate_chunk(crate::chunks::ChunkCoord::new(cx, cy))
    }

    pub fn chunk_revision(&self, cx: u32, cy: u32) -> u64 {
        self.core
            .chunk_body(crate::chunks::ChunkCoord::new(cx, cy))
            .map_or(0, |b| b.revision())
    }

    pub fn total_rects(&self) -> usize {
        self.core.chunk_bodies().total_rects()
    }
}
