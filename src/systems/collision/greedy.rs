//! Greedy meshing of one chunk into collision rectangles.
//!
//! Row-major scan over the chunk. From each unprocessed collidable cell the
//! rect grows right while cells are collidable and unprocessed, then down one
//! full row at a time while every cell across the width is collidable. The
//! result is a small (not optimal) cover, deterministic for a given grid.
//!
//! A row below can never hold processed cells inside the current width: any
//! earlier rect reaching that row also covers the current row in the same
//! columns, and those were skipped while growing the width.

use crate::chunks::{ChunkCoord, CHUNK_SIZE};
use crate::grid::Grid;

use super::bodies::CollisionRect;

/// Mesh `coord` into `out` (cleared first). `processed` is chunk-local scratch
/// of at least `CHUNK_SIZE²` entries; it is reset here.
pub fn mesh_chunk_into(
    grid: &Grid,
    coord: ChunkCoord,
    cell_size: f32,
    processed: &mut [bool],
    out: &mut Vec<CollisionRect>,
) {
    out.clear();

    let size = CHUNK_SIZE as usize;
    processed[..size * size].fill(false);

    let (x0, y0, x1, y1) = grid.chunk_cell_bounds(coord);
    // Cells past the grid edge read as Empty, so clipping changes nothing but speed.
    let span_x = (x1 - x0) as usize;
    let span_y = (y1 - y0) as usize;

    let solid = |lx: usize, ly: usize| -> bool {
        grid.get((x0 as usize + lx) as i32, (y0 as usize + ly) as i32)
            .is_collidable()
    };

    for ly in 0..span_y {
        for lx in 0..span_x {
            if processed[ly * size + lx] || !solid(lx, ly) {
                continue;
            }

            let mut width = 1;
            while lx + width < span_x
                && !processed[ly * size + lx + width]
                && solid(lx + width, ly)
            {
                width += 1;
            }

            let mut height = 1;
            'grow: while ly + height < span_y {
                for dx in 0..width {
                    if !solid(lx + dx, ly + height) {
                        break 'grow;
                    }
                }
                height += 1;
            }

            for dy in 0..height {
                let row = (ly + dy) * size;
                processed[row + lx..row + lx + width].fill(true);
            }

            out.push(CollisionRect::from_cells(
                x0 + lx as u32,
                y0 + ly as u32,
                width as u32,
                height as u32,
                cell_size,
            ));
        }
    }
}
