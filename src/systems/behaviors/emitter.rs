use crate::materials::Material;

use super::{Behavior, UpdateContext};

/// Emitter - drops one sand cell below itself whenever that cell is free.
/// The emitter itself never moves or changes.
pub struct EmitterBehavior;

impl EmitterBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for EmitterBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        let below = ctx.y + 1;
        if ctx.is_open(ctx.x, below) {
            return ctx.spawn(ctx.x, below, Material::Sand);
        }
        false
    }
}
