//! Coordinate types for the navigation grid.
//!
//! The horizontal plane is spanned by X and Z (Y is up); grid cells index
//! into that plane.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Z coordinate (row index)
    pub z: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    /// Chebyshev distance (max of x and z distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Get the 8 neighbors: the 4 orthogonal directions first, then the
    /// 4 diagonals. Step-cost logic relies on this ordering.
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x + 1, self.z), // E
            GridCoord::new(self.x - 1, self.z), // W
            GridCoord::new(self.x, self.z + 1), // N
            GridCoord::new(self.x, self.z - 1), // S
            GridCoord::new(self.x + 1, self.z + 1), // NE
            GridCoord::new(self.x + 1, self.z - 1), // SE
            GridCoord::new(self.x - 1, self.z + 1), // NW
            GridCoord::new(self.x - 1, self.z - 1), // SW
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.z + other.z)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.z - other.z)
    }
}

/// World coordinates on the ground plane (f32, world units)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in world units
    pub x: f32,
    /// Z coordinate in world units
    pub z: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, z: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalize(&self) -> WorldPoint {
        let len = self.length();
        if len > 0.0 {
            WorldPoint::new(self.x / len, self.z / len)
        } else {
            *self
        }
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: &WorldPoint) -> f32 {
        self.x * other.x + self.z * other.z
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.z + other.z)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.z - other.z)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        WorldPoint::new(self.x * scalar, self.z * scalar)
    }
}
