use super::Vec2;

/// Collision shape reported by the host physics engine for an actor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActorShape {
    /// Vertical capsule; `height` is the length of the straight segment.
    Capsule { radius: f32, height: f32 },
    Rect { width: f32, height: f32 },
    /// Anything the grid interaction does not understand. Skipped.
    Unsupported,
}

impl ActorShape {
    /// Full AABB size in world units, `None` for unsupported shapes.
    pub fn extents(self) -> Option<Vec2> {
        match self {
            ActorShape::Capsule { radius, height } => {
                Some(Vec2::new(2.0 * radius, height + 2.0 * radius))
            }
            ActorShape::Rect { width, height } => Some(Vec2::new(width, height)),
            ActorShape::Unsupported => None,
        }
    }
}

/// World-space AABB of an actor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ActorBounds {
    pub fn around(center: Vec2, shape: ActorShape) -> Option<Self> {
        let half = shape.extents()? * 0.5;
        Some(Self {
            min: center - half,
            max: center + half,
        })
    }

    /// Cell range `[x0, x1) × [y0, y1)` touched by the bounds, using
    /// `floor(min) .. ceil(max)` in cell units and clamped to the grid.
    /// `None` when the clamped range is empty.
    pub fn cell_range(&self, cell_size: f32, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let clamp = |v: f32, hi: u32| -> u32 {
            if v <= 0.0 {
                0
            } else if v >= hi as f32 {
                hi
            } else {
                v as u32
            }
        };

        let x0 = clamp((self.min.x / cell_size).floor(), width);
        let y0 = clamp((self.min.y / cell_size).floor(), height);
        let x1 = clamp((self.max.x / cell_size).ceil(), width);
        let y1 = clamp((self.max.y / cell_size).ceil(), height);

        if x0 < x1 && y0 < y1 {
            Some((x0, y0, x1, y1))
        } else {
            None
        }
    }
}
