use wasm_bindgen::prelude::*;

/// Snapshot of the last tick. Counters are always filled; the `*_ms` timings
/// stay at zero unless perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(super) tick: u64,
    pub(super) dt: f32,
    pub(super) cells_moved: u32,
    pub(super) cells_displaced: u32,
    pub(super) dirty_chunks: u32,
    pub(super) chunks_rebuilt: u32,
    pub(super) rects_emitted: u32,
    pub(super) total_rects: u32,
    pub(super) actor_count: u32,

    pub(super) step_ms: f64,
    pub(super) actors_ms: f64,
    pub(super) mesh_ms: f64,
    pub(super) render_ms: f64,
    pub(super) total_ms: f64,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.tick }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn cells_moved(&self) -> u32 { self.cells_moved }
    #[wasm_bindgen(getter)]
    pub fn cells_displaced(&self) -> u32 { self.cells_displaced }
    #[wasm_bindgen(getter)]
    pub fn dirty_chunks(&self) -> u32 { self.dirty_chunks }
    #[wasm_bindgen(getter)]
    pub fn chunks_rebuilt(&self) -> u32 { self.chunks_rebuilt }
    #[wasm_bindgen(getter)]
    pub fn rects_emitted(&self) -> u32 { self.rects_emitted }
    #[wasm_bindgen(getter)]
    pub fn total_rects(&self) -> u32 { self.total_rects }
    #[wasm_bindgen(getter)]
    pub fn actor_count(&self) -> u32 { self.actor_count }

    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn actors_ms(&self) -> f64 { self.actors_ms }
    #[wasm_bindgen(getter)]
    pub fn mesh_ms(&self) -> f64 { self.mesh_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn total_ms(&self) -> f64 { self.total_ms }
}
