//! Collaborator interfaces consumed by the grid builder.
//!
//! The pathfinding core does not own terrain data. It reads three inputs,
//! captured at grid-build time:
//!
//! - [`HeightSource`]: elevation sampling over the heightmap cell grid
//! - [`WaterRegion`]: water-area / river polygons in world X/Z
//! - [`StaticObject`]: snapshot of immobile map objects

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;

/// Elevation sampling over the heightmap cell grid.
///
/// Corner samples index the cell quad corners, so valid corner indices run
/// `0..=cells_wide()` / `0..=cells_deep()`.
pub trait HeightSource {
    /// Heightmap width in cells
    fn cells_wide(&self) -> usize;

    /// Heightmap depth in cells
    fn cells_deep(&self) -> usize;

    /// Discrete corner elevation sample
    fn corner_height(&self, cx: i32, cz: i32) -> f32;

    /// Continuous bilinear elevation sample at a world position
    fn sample_height(&self, x: f32, z: f32) -> f32;
}

/// Corner-sampled heightmap with bilinear interpolation.
///
/// Stores `(cells_wide + 1) * (cells_deep + 1)` corner elevations. This is
/// the reference [`HeightSource`] used by tests and simple hosts; engines
/// with their own terrain representation implement the trait directly.
#[derive(Clone, Debug)]
pub struct HeightMap {
    cells_wide: usize,
    cells_deep: usize,
    cell_size: f32,
    /// Corner elevations, row-major, `(cells_wide + 1)` per row
    corners: Vec<f32>,
}

impl HeightMap {
    /// Create a flat heightmap at the given elevation
    pub fn flat(cells_wide: usize, cells_deep: usize, cell_size: f32, elevation: f32) -> Self {
        let corners = vec![elevation; (cells_wide + 1) * (cells_deep + 1)];
        Self {
            cells_wide,
            cells_deep,
            cell_size,
            corners,
        }
    }

    /// Create from explicit corner samples.
    ///
    /// `corners` must hold `(cells_wide + 1) * (cells_deep + 1)` values in
    /// row-major order.
    pub fn from_corners(
        cells_wide: usize,
        cells_deep: usize,
        cell_size: f32,
        corners: Vec<f32>,
    ) -> Self {
        assert_eq!(corners.len(), (cells_wide + 1) * (cells_deep + 1));
        Self {
            cells_wide,
            cells_deep,
            cell_size,
            corners,
        }
    }

    /// Set a single corner elevation
    pub fn set_corner(&mut self, cx: usize, cz: usize, elevation: f32) {
        let stride = self.cells_wide + 1;
        self.corners[cz * stride + cx] = elevation;
    }

    /// World units per cell
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }
}

impl HeightSource for HeightMap {
    fn cells_wide(&self) -> usize {
        self.cells_wide
    }

    fn cells_deep(&self) -> usize {
        self.cells_deep
    }

    fn corner_height(&self, cx: i32, cz: i32) -> f32 {
        let cx = cx.clamp(0, self.cells_wide as i32) as usize;
        let cz = cz.clamp(0, self.cells_deep as i32) as usize;
        self.corners[cz * (self.cells_wide + 1) + cx]
    }

    fn sample_height(&self, x: f32, z: f32) -> f32 {
        let fx = (x / self.cell_size).clamp(0.0, self.cells_wide as f32);
        let fz = (z / self.cell_size).clamp(0.0, self.cells_deep as f32);

        let cx = (fx.floor() as i32).min(self.cells_wide as i32 - 1).max(0);
        let cz = (fz.floor() as i32).min(self.cells_deep as i32 - 1).max(0);
        let tx = fx - cx as f32;
        let tz = fz - cz as f32;

        let h00 = self.corner_height(cx, cz);
        let h10 = self.corner_height(cx + 1, cz);
        let h01 = self.corner_height(cx, cz + 1);
        let h11 = self.corner_height(cx + 1, cz + 1);

        let near = h00 + (h10 - h00) * tx;
        let far = h01 + (h11 - h01) * tx;
        near + (far - near) * tz
    }
}

/// Kind of water polygon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterKind {
    /// Closed water area (lake, sea)
    Area,
    /// River loop
    River,
}

/// A water polygon: an ordered vertex loop in world X/Z.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaterRegion {
    vertices: Vec<WorldPoint>,
    kind: WaterKind,
    // Cached bounding box for the cheap reject in `contains`
    min: WorldPoint,
    max: WorldPoint,
}

impl WaterRegion {
    /// Create a region from an ordered vertex loop
    pub fn new(vertices: Vec<WorldPoint>, kind: WaterKind) -> Self {
        let mut min = WorldPoint::new(f32::MAX, f32::MAX);
        let mut max = WorldPoint::new(f32::MIN, f32::MIN);
        for v in &vertices {
            min.x = min.x.min(v.x);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.z = max.z.max(v.z);
        }
        Self {
            vertices,
            kind,
            min,
            max,
        }
    }

    /// Kind of this region
    #[inline]
    pub fn kind(&self) -> WaterKind {
        self.kind
    }

    /// Vertex loop
    #[inline]
    pub fn vertices(&self) -> &[WorldPoint] {
        &self.vertices
    }

    /// Point-in-polygon test with bounding-box reject (even-odd rule).
    pub fn contains(&self, p: WorldPoint) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        if p.x < self.min.x || p.x > self.max.x || p.z < self.min.z || p.z > self.max.z {
            return false;
        }

        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.z > p.z) != (b.z > p.z) {
                let x_cross = (b.x - a.x) * (p.z - a.z) / (b.z - a.z) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Category of an immobile map object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Structure with a stamped obstacle footprint
    Building,
    /// Debris field stamping a rubble patch on clear ground
    Rubble,
    /// Decoration without a footprint (trees, rocks)
    Prop,
}

/// One immobile map object, captured at grid-build time
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StaticObject {
    /// World X of the object center
    pub x: f32,
    /// World Z of the object center
    pub z: f32,
    /// Object category; `Building` stamps an obstacle footprint, `Rubble`
    /// a debris patch, `Prop` nothing
    pub kind: ObjectKind,
}

impl StaticObject {
    /// Create a new static object
    pub fn new(x: f32, z: f32, kind: ObjectKind) -> Self {
        Self { x, z, kind }
    }
}
