//! Terrain classification for navigation grid cells.

use serde::{Deserialize, Serialize};

/// Semantic terrain type - what does this cell's ground look like?
///
/// The classification hierarchy:
/// - `Clear` - Open, walkable ground
/// - `Water` - Inside a water-area or river polygon
/// - `Cliff` - Corner elevation delta exceeds the cliff threshold
/// - `Rubble` - Broken ground stamped from debris-field map objects
/// - `Obstacle` - Stamped by an immobile structure footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TerrainType {
    /// Open, walkable ground
    #[default]
    Clear = 0,

    /// Water surface (lake, sea or river polygon hit)
    Water = 1,

    /// Steep elevation change, impassable for ground movers
    Cliff = 2,

    /// Broken ground stamped by debris-field objects; costly for the
    /// profiles that can cross it at all
    Rubble = 3,

    /// Cell covered by a static structure footprint
    Obstacle = 4,
}

impl TerrainType {
    /// Convert from u8 (for the packed grid array)
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => TerrainType::Clear,
            1 => TerrainType::Water,
            2 => TerrainType::Cliff,
            3 => TerrainType::Rubble,
            4 => TerrainType::Obstacle,
            _ => TerrainType::Obstacle,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            TerrainType::Clear => '.',
            TerrainType::Water => '~',
            TerrainType::Cliff => '^',
            TerrainType::Rubble => ':',
            TerrainType::Obstacle => '#',
        }
    }
}
