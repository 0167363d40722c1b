//! World configuration, loadable from JSON.
//!
//! Every field has a default so a partial document like
//! `{"width": 512, "seed": 7}` is a valid config.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 256;
pub const DEFAULT_HEIGHT: u32 = 256;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_GROUND_DEPTH: u32 = 5;
pub const DEFAULT_BRUSH_RADIUS: i32 = 5;

/// One-time terrain seeding applied when the world is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Number of stone rows at the bottom of the grid.
    pub ground_depth: u32,
    /// Emitter cell position, if any.
    pub emitter: Option<[u32; 2]>,
}

impl TerrainConfig {
    /// Floor plus a centered emitter near the top, sized for `width × height`.
    pub fn for_size(width: u32, height: u32) -> Self {
        Self {
            ground_depth: DEFAULT_GROUND_DEPTH.min(height),
            emitter: Some([width / 2, height / 8]),
        }
    }

    /// No seeding at all: the world starts empty.
    pub fn none() -> Self {
        Self {
            ground_depth: 0,
            emitter: None,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self::for_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    /// Seed for the simulation RNG (row scan direction, diagonal ties).
    pub seed: u64,
    /// World units per cell. Collision rects and actor bounds use world units.
    pub cell_size: f32,
    pub brush_radius: i32,
    pub terrain: TerrainConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            cell_size: 1.0,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            terrain: TerrainConfig::default(),
        }
    }
}

impl WorldConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            terrain: TerrainConfig::for_size(width, height),
            ..Self::default()
        }
    }

    /// Same as `with_size` but without terrain seeding.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            terrain: TerrainConfig::none(),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: WorldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }
        if (self.width as usize).checked_mul(self.height as usize).is_none() {
            return Err(format!("grid {}x{} is too large", self.width, self.height));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(format!("cell_size must be positive, got {}", self.cell_size));
        }
        if self.brush_radius < 0 {
            return Err(format!(
                "brush_radius must not be negative, got {}",
                self.brush_radius
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config = WorldConfig::from_json(r#"{"width": 128, "seed": 7}"#).unwrap();
        assert_eq!(config.width, 128);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, 7);
        assert_eq!(config.terrain.ground_depth, DEFAULT_GROUND_DEPTH);
    }

    #[test]
    fn terrain_can_be_disabled_from_json() {
        let json = r#"{"terrain": {"ground_depth": 0, "emitter": null}}"#;
        let config = WorldConfig::from_json(json).unwrap();
        assert_eq!(config.terrain, TerrainConfig::none());
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert!(WorldConfig::from_json(r#"{"width": 0}"#).is_err());
        assert!(WorldConfig::from_json(r#"{"cell_size": -1.0}"#).is_err());
        assert!(WorldConfig::from_json("not json").is_err());
    }

    #[test]
    fn json_output_parses_back() {
        let config = WorldConfig::with_size(64, 32).with_seed(99);
        let parsed = WorldConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }
}
