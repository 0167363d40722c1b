//! Materials - the closed set of cell kinds the automaton understands.
//!
//! Each cell stores exactly one `Material` as a `u8` tag. There is no
//! per-cell side state: velocity, temperature and lifetime are not modelled.

/// Raw material tag as stored in the grid and exchanged with JS.
pub type MaterialId = u8;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Material {
    #[default]
    Empty = 0,
    /// Immobile rock. The terrain floor ("bedrock") uses this material too.
    Stone = 1,
    Sand = 2,
    Water = 3,
    /// Spawns sand into the empty cell directly below it every tick.
    Emitter = 4,
}

// Palette in ABGR format (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
const COLOR_EMPTY: u32 = 0x0000_0000;
const COLOR_STONE: u32 = 0xFF80_8080;
const COLOR_SAND: u32 = 0xFF80_B2C2;
const COLOR_WATER: u32 = 0xFFDC_7840;
const COLOR_EMITTER: u32 = 0xFFFF_00FF;

impl Material {
    pub const BEDROCK: Material = Material::Stone;

    pub const ALL: [Material; 5] = [
        Material::Empty,
        Material::Stone,
        Material::Sand,
        Material::Water,
        Material::Emitter,
    ];

    #[inline]
    pub const fn id(self) -> MaterialId {
        self as MaterialId
    }

    /// Decode a raw tag. Unknown ids are rejected rather than mapped to Empty.
    #[inline]
    pub fn from_id(id: MaterialId) -> Option<Self> {
        match id {
            0 => Some(Material::Empty),
            1 => Some(Material::Stone),
            2 => Some(Material::Sand),
            3 => Some(Material::Water),
            4 => Some(Material::Emitter),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    /// Solid for the collision mesher. Sand counts even though it falls.
    #[inline]
    pub fn is_collidable(self) -> bool {
        matches!(self, Material::Stone | Material::Sand)
    }

    /// Solid in the simulation sense: what an actor pushes out of its way.
    #[inline]
    pub fn is_displaceable(self) -> bool {
        self == Material::Sand
    }

    /// Normalized color id used by the texture shader path.
    pub fn color_id(self) -> f32 {
        match self {
            Material::Empty => 0.0,
            Material::Stone => 0.1,
            Material::Sand => 0.5,
            Material::Emitter => 0.8,
            Material::Water => 1.0,
        }
    }

    /// Fixed render color (ABGR).
    #[inline]
    pub fn color(self) -> u32 {
        match self {
            Material::Empty => COLOR_EMPTY,
            Material::Stone => COLOR_STONE,
            Material::Sand => COLOR_SAND,
            Material::Water => COLOR_WATER,
            Material::Emitter => COLOR_EMITTER,
        }
    }
}
