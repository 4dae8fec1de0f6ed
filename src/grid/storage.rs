//! Navigation grid storage.
//!
//! Uses a Structure-of-Arrays layout: terrain classification, the
//! static-obstacle flag and the pinch flag are stored in separate parallel
//! arrays indexed `z * width + x`.

use crate::core::{GridCoord, TerrainType, WorldPoint};
use crate::profile::MovementProfile;

/// Per-type cell tallies for debugging and build summaries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub clear: usize,
    pub water: usize,
    pub cliff: usize,
    pub rubble: usize,
    pub obstacle: usize,
    pub pinched: usize,
}

/// The discretized navigability grid for one map.
///
/// A grid is immutable after construction: any change to the static world
/// requires a full rebuild producing a brand-new instance. Concurrent hosts
/// should publish rebuilt grids by swapping an `Arc<NavigationGrid>` so
/// in-flight searches keep reading the old instance; reads never mutate
/// grid state.
///
/// Cell `(x, z)` covers world `[x*cell_size, (x+1)*cell_size)` on each axis,
/// with the cell center at `(x + 0.5) * cell_size`.
#[derive(Clone, Debug)]
pub struct NavigationGrid {
    /// Terrain classification per cell (TerrainType as u8)
    terrain: Vec<u8>,
    /// Set only by static-obstacle stamping
    blocked: Vec<bool>,
    /// Derived two-cell buffer skirt around cliffs
    pinched: Vec<bool>,

    /// Grid width in cells
    width: usize,
    /// Grid height (depth) in cells
    height: usize,
    /// World units per cell
    cell_size: f32,
}

impl NavigationGrid {
    /// Create a grid with every cell set to the given terrain.
    ///
    /// Dimensions are clamped to at least 1x1 so callers never hold a
    /// zero-size grid.
    pub(crate) fn filled(width: usize, height: usize, cell_size: f32, fill: TerrainType) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = width * height;
        Self {
            terrain: vec![fill as u8; size],
            blocked: vec![false; size],
            pinched: vec![false; size],
            width,
            height,
            cell_size,
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World units per cell
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Is this coordinate inside the grid?
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.z >= 0
            && (coord.x as usize) < self.width
            && (coord.z as usize) < self.height
    }

    /// Flat index for a coordinate, or `None` if out of bounds
    #[inline]
    pub(crate) fn idx(&self, coord: GridCoord) -> Option<usize> {
        if !self.is_valid_coord(coord) {
            return None;
        }
        Some(coord.z as usize * self.width + coord.x as usize)
    }

    /// Terrain classification at a coordinate.
    ///
    /// Out-of-bounds coordinates read as `Obstacle`.
    #[inline]
    pub fn terrain_at(&self, coord: GridCoord) -> TerrainType {
        match self.idx(coord) {
            Some(i) => TerrainType::from_u8(self.terrain[i]),
            None => TerrainType::Obstacle,
        }
    }

    /// Was this cell stamped by a static structure footprint?
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        self.idx(coord).map(|i| self.blocked[i]).unwrap_or(true)
    }

    /// Is this cell inside the cliff buffer skirt?
    #[inline]
    pub fn is_pinched(&self, coord: GridCoord) -> bool {
        self.idx(coord).map(|i| self.pinched[i]).unwrap_or(false)
    }

    /// May a mover with this profile occupy the cell?
    ///
    /// Out-of-bounds coordinates are never occupiable. Pinch does not forbid
    /// occupancy; it is charged as a step penalty during search.
    pub fn can_occupy(&self, coord: GridCoord, profile: &MovementProfile) -> bool {
        let Some(i) = self.idx(coord) else {
            return false;
        };
        if self.blocked[i] && !profile.can_pass_obstacle {
            return false;
        }
        match TerrainType::from_u8(self.terrain[i]) {
            TerrainType::Clear => true,
            TerrainType::Water => profile.can_cross_water,
            TerrainType::Cliff => profile.can_cross_cliff,
            TerrainType::Rubble => profile.can_cross_rubble,
            TerrainType::Obstacle => profile.can_pass_obstacle,
        }
    }

    /// Convert a world position to its containing cell (floor division)
    #[inline]
    pub fn world_to_grid(&self, p: WorldPoint) -> GridCoord {
        GridCoord::new(
            (p.x / self.cell_size).floor() as i32,
            (p.z / self.cell_size).floor() as i32,
        )
    }

    /// Convert a cell to its world-space center
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            (coord.x as f32 + 0.5) * self.cell_size,
            (coord.z as f32 + 0.5) * self.cell_size,
        )
    }

    /// Tally cells per classification
    pub fn cell_counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &t in &self.terrain {
            match TerrainType::from_u8(t) {
                TerrainType::Clear => counts.clear += 1,
                TerrainType::Water => counts.water += 1,
                TerrainType::Cliff => counts.cliff += 1,
                TerrainType::Rubble => counts.rubble += 1,
                TerrainType::Obstacle => counts.obstacle += 1,
            }
        }
        counts.pinched = self.pinched.iter().filter(|&&p| p).count();
        counts
    }

    /// ASCII rendering for test failure output (row z=0 last, like a map)
    pub fn ascii_art(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for z in (0..self.height).rev() {
            for x in 0..self.width {
                let coord = GridCoord::new(x as i32, z as i32);
                let c = if self.is_pinched(coord) && self.terrain_at(coord) == TerrainType::Clear {
                    'p'
                } else {
                    self.terrain_at(coord).as_char()
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }

    // Builder-only mutation. The public surface stays read-only.

    #[inline]
    pub(crate) fn set_terrain(&mut self, coord: GridCoord, t: TerrainType) {
        if let Some(i) = self.idx(coord) {
            self.terrain[i] = t as u8;
        }
    }

    #[inline]
    pub(crate) fn set_blocked(&mut self, coord: GridCoord) {
        if let Some(i) = self.idx(coord) {
            self.blocked[i] = true;
        }
    }

    #[inline]
    pub(crate) fn set_pinched(&mut self, coord: GridCoord) {
        if let Some(i) = self.idx(coord) {
            self.pinched[i] = true;
        }
    }
}
