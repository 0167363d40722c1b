//! Sandfall Engine - falling-sand simulation with chunked collision meshing
//!
//! Architecture:
//! - domain/     - Materials and world configuration
//! - spatial/    - Grid store and dirty-chunk tracking
//! - systems/    - Automaton rules, actor interaction, collision meshing
//! - simulation/ - Tick orchestration and the WASM facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths used throughout the crate
pub use domain::config;
pub use domain::materials;
pub use spatial::chunks;
pub use spatial::grid;
pub use systems::actors;
pub use systems::behaviors;
pub use systems::collision;
pub use systems::stepper;

use wasm_bindgen::prelude::*;

// Thread pool initialization for rayon inside a threaded WASM build
#[cfg(feature = "wasm-threads")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandfall WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use config::WorldConfig;
pub use materials::Material;
pub use simulation::{TickStats, World, WorldCore};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { Material::Empty.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_bedrock() -> u8 { Material::BEDROCK.id() }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_emitter() -> u8 { Material::Emitter.id() }

/// Shader-style color id of a material (0.0 empty .. 1.0 water); -1 if unknown
#[wasm_bindgen]
pub fn material_color_id(id: u8) -> f32 {
    Material::from_id(id).map_or(-1.0, |m| m.color_id())
}

#[wasm_bindgen]
pub fn chunk_size() -> u32 { chunks::CHUNK_SIZE }
