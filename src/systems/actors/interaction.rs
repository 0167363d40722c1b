//! Actor–grid interaction: actors push Sand out of their bounds.
//!
//! Per actor, the Sand cells under its AABB are collected first and then
//! displaced one by one, so a cell pushed into a position that is still under
//! the actor is not pushed again in the same tick. Targets must be empty, so a
//! push never lands on a collected cell that has not been handled yet.

use crate::grid::Grid;
use crate::materials::Material;

use super::ActorSystem;

/// Targets tried for a displaced cell, in order: right, left, up.
pub const DISPLACEMENT_OFFSETS: [(i32, i32); 3] = [(2, 0), (-2, 0), (0, -2)];

impl ActorSystem {
    /// Displace Sand overlapping any actor. Returns the number of cells moved.
    pub fn displace_sand(&mut self, grid: &mut Grid, cell_size: f32) -> u32 {
        let Self { actors, scratch, .. } = self;
        let mut displaced = 0u32;

        for actor in actors.iter() {
            let Some(bounds) = actor.bounds() else {
                continue;
            };
            let Some((x0, y0, x1, y1)) = bounds.cell_range(cell_size, grid.width(), grid.height())
            else {
                continue;
            };

            scratch.clear();
            for y in y0 as i32..y1 as i32 {
                for x in x0 as i32..x1 as i32 {
                    if grid.get(x, y).is_displaceable() {
                        scratch.push((x, y));
                    }
                }
            }

            for &(x, y) in scratch.iter() {
                for (dx, dy) in DISPLACEMENT_OFFSETS {
                    let (tx, ty) = (x + dx, y + dy);
                    if grid.in_bounds(tx, ty) && grid.is_empty(tx, ty) {
                        grid.set(tx, ty, Material::Sand);
                        grid.set(x, y, Material::Empty);
                        displaced += 1;
                        break;
                    }
                }
            }
        }

        displaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::{ActorShape, Vec2};

    /// Actor whose bounds cover exactly cell `(x, y)` at cell size 1.
    fn unit_actor(actors: &mut ActorSystem, x: i32, y: i32) -> u32 {
        actors.spawn(
            Vec2::new(x as f32 + 0.5, y as f32 + 0.5),
            ActorShape::Rect { width: 1.0, height: 1.0 },
        )
    }

    fn setup() -> (Grid, ActorSystem) {
        let mut grid = Grid::new(16, 16);
        grid.set(5, 5, Material::Sand);
        let mut actors = ActorSystem::new();
        unit_actor(&mut actors, 5, 5);
        (grid, actors)
    }

    #[test]
    fn pushes_right_first() {
        let (mut grid, mut actors) = setup();
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 1);
        assert_eq!(grid.get(7, 5), Material::Sand);
        assert_eq!(grid.get(5, 5), Material::Empty);
    }

    #[test]
    fn pushes_left_when_right_is_blocked() {
        let (mut grid, mut actors) = setup();
        grid.set(7, 5, Material::Stone);
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 1);
        assert_eq!(grid.get(3, 5), Material::Sand);
        assert_eq!(grid.get(5, 3), Material::Empty);
    }

    #[test]
    fn pushes_up_only_when_both_sides_are_blocked() {
        let (mut grid, mut actors) = setup();
        grid.set(7, 5, Material::Stone);
        grid.set(3, 5, Material::Water);
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 1);
        assert_eq!(grid.get(5, 3), Material::Sand);
        assert_eq!(grid.get(3, 5), Material::Water);
    }

    #[test]
    fn stays_when_every_target_is_blocked() {
        let (mut grid, mut actors) = setup();
        grid.set(7, 5, Material::Stone);
        grid.set(3, 5, Material::Stone);
        grid.set(5, 3, Material::Sand);
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 0);
        assert_eq!(grid.get(5, 5), Material::Sand);
    }

    #[test]
    fn grid_edge_counts_as_blocked() {
        let mut grid = Grid::new(16, 16);
        grid.set(15, 5, Material::Sand);
        let mut actors = ActorSystem::new();
        unit_actor(&mut actors, 15, 5);
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 1);
        assert_eq!(grid.get(13, 5), Material::Sand);
    }

    #[test]
    fn only_sand_is_displaced() {
        let mut grid = Grid::new(16, 16);
        grid.set(5, 5, Material::Water);
        grid.set(6, 5, Material::Stone);
        let mut actors = ActorSystem::new();
        actors.spawn(Vec2::new(6.0, 6.0), ActorShape::Rect { width: 4.0, height: 4.0 });
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 0);
        assert_eq!(grid.get(5, 5), Material::Water);
        assert_eq!(grid.get(6, 5), Material::Stone);
    }

    #[test]
    fn unsupported_shapes_are_skipped() {
        let mut grid = Grid::new(16, 16);
        grid.set(5, 5, Material::Sand);
        let mut actors = ActorSystem::new();
        actors.spawn(Vec2::new(5.5, 5.5), ActorShape::Unsupported);
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 0);
        assert_eq!(grid.get(5, 5), Material::Sand);
    }

    #[test]
    fn cell_pushed_within_the_bounds_is_not_pushed_again() {
        let mut grid = Grid::new(16, 16);
        grid.set(5, 5, Material::Sand);
        let mut actors = ActorSystem::new();
        // Covers cells x in 5..8 on row 5.
        actors.spawn(Vec2::new(6.5, 5.5), ActorShape::Rect { width: 3.0, height: 1.0 });
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 1);
        assert_eq!(grid.get(7, 5), Material::Sand);
        assert_eq!(grid.get(9, 5), Material::Empty);
    }

    #[test]
    fn capsule_covers_its_caps() {
        let mut grid = Grid::new(16, 16);
        // Capsule at (8, 8), radius 1, segment 2: bounds x 7..9, y 6..10.
        grid.set(8, 6, Material::Sand);
        grid.set(8, 9, Material::Sand);
        let mut actors = ActorSystem::new();
        actors.spawn(Vec2::new(8.0, 8.0), ActorShape::Capsule { radius: 1.0, height: 2.0 });
        assert_eq!(actors.displace_sand(&mut grid, 1.0), 2);
        assert_eq!(grid.get(10, 6), Material::Sand);
        assert_eq!(grid.get(10, 9), Material::Sand);
    }
}
