//! LiquidBehavior - water.
//!
//! Fixed priority, first open target wins: down, down-left, down-right,
//! left, right. No pressure or flow model.

use super::{Behavior, UpdateContext};

const FLOW_ORDER: [(i32, i32); 5] = [(0, 1), (-1, 1), (1, 1), (-1, 0), (1, 0)];

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        for (dx, dy) in FLOW_ORDER {
            let tx = ctx.x + dx;
            let ty = ctx.y + dy;
            if ctx.is_open(tx, ty) {
                return ctx.move_to(tx, ty);
            }
        }
        false
    }
}
