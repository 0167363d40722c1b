//! Behaviors - per-material transition rules for the automaton.
//!
//! Motion is source-driven: each moving cell decides where it goes and writes
//! both the destination and its own (now empty) cell. Empty cells never run a
//! rule of their own.

mod emitter;
mod liquid;
mod powder;

pub use emitter::EmitterBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

use rand::RngCore;

use crate::grid::Grid;
use crate::materials::Material;

/// Update context passed to behaviors for one cell.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    /// Per-tick mask of cells that already received a moved/spawned cell.
    pub moved: &'a mut [bool],
    pub rng: &'a mut dyn RngCore,
    pub x: i32,
    pub y: i32,
}

impl<'a> UpdateContext<'a> {
    /// Target is inside the grid and empty. Out-of-bounds targets are never
    /// open, which pins cells against the border.
    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y) && self.grid.get(x, y).is_empty()
    }

    /// Move the current cell to `(tx, ty)`; the caller has checked `is_open`.
    #[inline]
    pub fn move_to(&mut self, tx: i32, ty: i32) -> bool {
        let material = self.grid.get(self.x, self.y);
        if !self.grid.set(tx, ty, material) {
            return false;
        }
        self.grid.set(self.x, self.y, Material::Empty);
        self.flag_moved(tx, ty);
        true
    }

    /// Write a new cell at `(tx, ty)` without touching the current one.
    #[inline]
    pub fn spawn(&mut self, tx: i32, ty: i32, material: Material) -> bool {
        if !self.grid.set(tx, ty, material) {
            return false;
        }
        self.flag_moved(tx, ty);
        true
    }

    #[inline]
    fn flag_moved(&mut self, x: i32, y: i32) {
        let idx = self.grid.index(x as u32, y as u32);
        self.moved[idx] = true;
    }
}

/// Behavior trait - each moving material implements this.
/// Returns true if the grid changed.
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool;
}

/// Behavior registry - dispatch by material.
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    emitter: EmitterBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            emitter: EmitterBehavior::new(),
        }
    }

    pub fn update(&self, material: Material, ctx: &mut UpdateContext) -> bool {
        match material {
            Material::Sand => self.powder.update(ctx),
            Material::Water => self.liquid.update(ctx),
            Material::Emitter => self.emitter.update(ctx),
            Material::Stone | Material::Empty => false, // Immobile / no rule
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
