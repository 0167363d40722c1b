//! PowderBehavior - falling sand.
//!
//! Priority: straight down, then a diagonal. When both diagonals are open the
//! side is picked uniformly at random so piles grow symmetrically.

use rand::Rng;

use super::{Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        let x = ctx.x;
        let below = ctx.y + 1;

        if ctx.is_open(x, below) {
            return ctx.move_to(x, below);
        }

        let left = ctx.is_open(x - 1, below);
        let right = ctx.is_open(x + 1, below);
        match (left, right) {
            (true, true) => {
                let dx = if ctx.rng.gen_bool(0.5) { -1 } else { 1 };
                ctx.move_to(x + dx, below)
            }
            (true, false) => ctx.move_to(x - 1, below),
            (false, true) => ctx.move_to(x + 1, below),
            (false, false) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run;
    use super::*;
    use crate::grid::Grid;
    use crate::materials::Material;

    #[test]
    fn falls_straight_down_when_below_is_empty() {
        let mut grid = Grid::new(8, 8);
        grid.set(3, 3, Material::Sand);
        assert!(run(&PowderBehavior::new(), &mut grid, 3, 3, 1));
        assert_eq!(grid.get(3, 3), Material::Empty);
        assert_eq!(grid.get(3, 4), Material::Sand);
    }

    #[test]
    fn takes_the_only_open_diagonal() {
        for seed in 0..16 {
            let mut grid = Grid::new(8, 8);
            grid.set(3, 3, Material::Sand);
            grid.set(3, 4, Material::Stone);
            grid.set(2, 4, Material::Stone);
            assert!(run(&PowderBehavior::new(), &mut grid, 3, 3, seed));
            assert_eq!(grid.get(4, 4), Material::Sand);
        }
    }

    #[test]
    fn rests_when_fully_supported() {
        let mut grid = Grid::new(8, 8);
        grid.set(3, 3, Material::Sand);
        for x in 2..=4 {
            grid.set(x, 4, Material::Stone);
        }
        assert!(!run(&PowderBehavior::new(), &mut grid, 3, 3, 7));
        assert_eq!(grid.get(3, 3), Material::Sand);
    }

    #[test]
    fn does_not_slide_out_of_the_grid() {
        // Bottom-left corner case: left diagonal is outside the grid.
        let mut grid = Grid::new(4, 4);
        grid.set(0, 2, Material::Sand);
        grid.set(0, 3, Material::Stone);
        grid.set(1, 3, Material::Stone);
        assert!(!run(&PowderBehavior::new(), &mut grid, 0, 2, 3));
        assert_eq!(grid.get(0, 2), Material::Sand);
    }
}
