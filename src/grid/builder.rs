//! Navigation grid construction.
//!
//! [`build_navigation_grid`] converts static map data into a
//! [`NavigationGrid`] in four passes:
//!
//! 1. Water classification (point-in-polygon per cell center)
//! 2. Cliff classification (corner elevation delta threshold)
//! 3. Pinch propagation (two-cell buffer skirt around cliffs)
//! 4. Static stamping (building footprints, debris fields)
//!
//! The builder is a pure function of its inputs. There is no incremental
//! update path: any change to the static world rebuilds the whole grid.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, TerrainType};
use crate::grid::NavigationGrid;
use crate::sources::{HeightSource, ObjectKind, StaticObject, WaterRegion};

/// Grid construction settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// World units per navigation cell
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,

    /// Cliff threshold as a fraction of cell size: a cell is Cliff when its
    /// corner elevation delta exceeds `cell_size * cliff_delta_factor`
    #[serde(default = "default_cliff_delta_factor")]
    pub cliff_delta_factor: f32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            cliff_delta_factor: default_cliff_delta_factor(),
        }
    }
}

fn default_cell_size() -> f32 {
    10.0
}

fn default_cliff_delta_factor() -> f32 {
    0.5
}

/// Build a navigation grid from static map data.
///
/// Degenerate inputs (a zero-size height field) still produce a well-formed
/// 1x1 fully-obstacle grid, so callers never special-case a missing grid.
pub fn build_navigation_grid(
    height: &dyn HeightSource,
    water: &[WaterRegion],
    statics: &[StaticObject],
    config: &BuilderConfig,
) -> NavigationGrid {
    let width = height.cells_wide();
    let depth = height.cells_deep();

    if width == 0 || depth == 0 {
        debug!("[GridBuilder] zero-size height field, returning 1x1 obstacle grid");
        let mut grid = NavigationGrid::filled(1, 1, config.cell_size, TerrainType::Obstacle);
        grid.set_blocked(GridCoord::new(0, 0));
        return grid;
    }

    let mut grid = NavigationGrid::filled(width, depth, config.cell_size, TerrainType::Clear);

    classify_water(&mut grid, water);
    classify_cliffs(&mut grid, height, config);
    propagate_pinch(&mut grid);
    stamp_statics(&mut grid, statics);

    let counts = grid.cell_counts();
    info!(
        "[GridBuilder] built {}x{} grid: {} clear, {} water, {} cliff, {} rubble, {} obstacle, {} pinched",
        grid.width(),
        grid.height(),
        counts.clear,
        counts.water,
        counts.cliff,
        counts.rubble,
        counts.obstacle,
        counts.pinched
    );

    grid
}

/// Pass 1: mark cells whose center falls inside any water polygon.
fn classify_water(grid: &mut NavigationGrid, water: &[WaterRegion]) {
    if water.is_empty() {
        return;
    }
    for z in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let coord = GridCoord::new(x, z);
            let sample = grid.grid_to_world(coord);
            if water.iter().any(|region| region.contains(sample)) {
                grid.set_terrain(coord, TerrainType::Water);
            }
        }
    }
}

/// Pass 2: classify non-water cells by the elevation span of their quad.
fn classify_cliffs(grid: &mut NavigationGrid, height: &dyn HeightSource, config: &BuilderConfig) {
    let threshold = config.cell_size * config.cliff_delta_factor;

    for z in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let coord = GridCoord::new(x, z);
            if grid.terrain_at(coord) != TerrainType::Clear {
                continue;
            }

            let corners = [
                height.corner_height(x, z),
                height.corner_height(x + 1, z),
                height.corner_height(x, z + 1),
                height.corner_height(x + 1, z + 1),
            ];
            let min = corners.iter().cloned().fold(f32::MAX, f32::min);
            let max = corners.iter().cloned().fold(f32::MIN, f32::max);

            if max - min > threshold {
                grid.set_terrain(coord, TerrainType::Cliff);
            }
        }
    }
}

/// Pass 3: two-pass pinch propagation.
///
/// Pass one marks Clear cells 8-adjacent to a Cliff; pass two marks the
/// remaining Clear cells 8-adjacent to a pass-one pinched cell, producing a
/// two-cell skirt. Pass two reads only pass-one results so the skirt does
/// not flood outward.
fn propagate_pinch(grid: &mut NavigationGrid) {
    for z in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let coord = GridCoord::new(x, z);
            if grid.terrain_at(coord) != TerrainType::Clear {
                continue;
            }
            let near_cliff = coord
                .neighbors_8()
                .iter()
                .any(|&n| grid.is_valid_coord(n) && grid.terrain_at(n) == TerrainType::Cliff);
            if near_cliff {
                grid.set_pinched(coord);
            }
        }
    }

    let mut second_ring = Vec::new();
    for z in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let coord = GridCoord::new(x, z);
            if grid.terrain_at(coord) != TerrainType::Clear || grid.is_pinched(coord) {
                continue;
            }
            let near_pinched = coord
                .neighbors_8()
                .iter()
                .any(|&n| grid.is_valid_coord(n) && grid.is_pinched(n));
            if near_pinched {
                second_ring.push(coord);
            }
        }
    }
    for coord in second_ring {
        grid.set_pinched(coord);
    }
}

/// Pass 4: stamp static-object footprints over the cell classification.
/// Both footprints cover the object's cell plus the 1-cell ring; props
/// stamp nothing.
///
/// Buildings override any prior classification and set the blocked flag.
/// Debris fields overlay only clear ground: water, cliffs and stamped
/// structures keep their classification.
fn stamp_statics(grid: &mut NavigationGrid, statics: &[StaticObject]) {
    for object in statics {
        let center = grid.world_to_grid(crate::core::WorldPoint::new(object.x, object.z));
        for dz in -1..=1 {
            for dx in -1..=1 {
                let coord = GridCoord::new(center.x + dx, center.z + dz);
                if !grid.is_valid_coord(coord) {
                    continue;
                }
                match object.kind {
                    ObjectKind::Building => {
                        grid.set_terrain(coord, TerrainType::Obstacle);
                        grid.set_blocked(coord);
                    }
                    ObjectKind::Rubble => {
                        if grid.terrain_at(coord) == TerrainType::Clear {
                            grid.set_terrain(coord, TerrainType::Rubble);
                        }
                    }
                    ObjectKind::Prop => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldPoint;
    use crate::sources::{HeightMap, WaterKind};

    fn flat_map(cells: usize) -> HeightMap {
        HeightMap::flat(cells, cells, 10.0, 0.0)
    }

    #[test]
    fn test_all_clear_on_flat_ground() {
        let grid = build_navigation_grid(&flat_map(4), &[], &[], &BuilderConfig::default());

        let counts = grid.cell_counts();
        assert_eq!(counts.clear, 16);
        assert_eq!(counts.pinched, 0);
    }

    #[test]
    fn test_water_classification() {
        // Square lake covering cells (1,1)..(2,2)
        let lake = WaterRegion::new(
            vec![
                WorldPoint::new(10.0, 10.0),
                WorldPoint::new(30.0, 10.0),
                WorldPoint::new(30.0, 30.0),
                WorldPoint::new(10.0, 30.0),
            ],
            WaterKind::Area,
        );

        let grid = build_navigation_grid(&flat_map(4), &[lake], &[], &BuilderConfig::default());

        assert_eq!(grid.terrain_at(GridCoord::new(1, 1)), TerrainType::Water);
        assert_eq!(grid.terrain_at(GridCoord::new(2, 2)), TerrainType::Water);
        assert_eq!(grid.terrain_at(GridCoord::new(0, 0)), TerrainType::Clear);
        assert_eq!(grid.terrain_at(GridCoord::new(3, 3)), TerrainType::Clear);
    }

    #[test]
    fn test_cliff_classification_threshold() {
        // Raise one corner shared by cells around (3,3). Threshold is
        // cell_size * 0.5 = 5.0; a 6.0 delta crosses it.
        let mut hm = HeightMap::flat(8, 8, 10.0, 0.0);
        hm.set_corner(3, 3, 6.0);

        let grid = build_navigation_grid(&hm, &[], &[], &BuilderConfig::default());

        // The four cells sharing corner (3,3) become cliffs
        for coord in [
            GridCoord::new(2, 2),
            GridCoord::new(3, 2),
            GridCoord::new(2, 3),
            GridCoord::new(3, 3),
        ] {
            assert_eq!(grid.terrain_at(coord), TerrainType::Cliff, "{coord:?}");
        }
        assert_eq!(grid.terrain_at(GridCoord::new(6, 6)), TerrainType::Clear);
    }

    #[test]
    fn test_below_threshold_stays_clear() {
        let mut hm = HeightMap::flat(4, 4, 10.0, 0.0);
        hm.set_corner(2, 2, 4.9);

        let grid = build_navigation_grid(&hm, &[], &[], &BuilderConfig::default());
        assert_eq!(grid.cell_counts().cliff, 0);
    }

    #[test]
    fn test_pinch_skirt_two_cells() {
        // Single raised corner in the middle of a large flat field produces
        // a 2x2 cliff cluster with a two-cell pinched skirt.
        let mut hm = HeightMap::flat(12, 12, 10.0, 0.0);
        hm.set_corner(6, 6, 10.0);

        let grid = build_navigation_grid(&hm, &[], &[], &BuilderConfig::default());

        assert_eq!(grid.terrain_at(GridCoord::new(5, 5)), TerrainType::Cliff);
        // Ring 1 (adjacent to cliff) and ring 2 are pinched
        assert!(grid.is_pinched(GridCoord::new(7, 5)));
        assert!(grid.is_pinched(GridCoord::new(8, 5)));
        // Ring 3 is not
        assert!(!grid.is_pinched(GridCoord::new(9, 5)));
        // Cliff cells themselves are never pinched
        assert!(!grid.is_pinched(GridCoord::new(5, 5)));
    }

    #[test]
    fn test_building_stamps_ring() {
        let building = StaticObject::new(25.0, 25.0, ObjectKind::Building);
        let grid =
            build_navigation_grid(&flat_map(6), &[], &[building], &BuilderConfig::default());

        // 3x3 block centered on cell (2,2)
        for dz in -1..=1 {
            for dx in -1..=1 {
                let coord = GridCoord::new(2 + dx, 2 + dz);
                assert_eq!(grid.terrain_at(coord), TerrainType::Obstacle);
                assert!(grid.is_blocked(coord));
            }
        }
        assert_eq!(grid.terrain_at(GridCoord::new(4, 2)), TerrainType::Clear);
    }

    #[test]
    fn test_rubble_field_stamps_patch() {
        let debris = StaticObject::new(25.0, 25.0, ObjectKind::Rubble);
        let grid = build_navigation_grid(&flat_map(6), &[], &[debris], &BuilderConfig::default());

        // 3x3 patch centered on cell (2,2), passable flag untouched
        for dz in -1..=1 {
            for dx in -1..=1 {
                let coord = GridCoord::new(2 + dx, 2 + dz);
                assert_eq!(grid.terrain_at(coord), TerrainType::Rubble);
                assert!(!grid.is_blocked(coord));
            }
        }
        assert_eq!(grid.cell_counts().rubble, 9);
    }

    #[test]
    fn test_rubble_does_not_override_water() {
        let lake = WaterRegion::new(
            vec![
                WorldPoint::new(0.0, 0.0),
                WorldPoint::new(30.0, 0.0),
                WorldPoint::new(30.0, 30.0),
                WorldPoint::new(0.0, 30.0),
            ],
            WaterKind::Area,
        );
        let debris = StaticObject::new(25.0, 25.0, ObjectKind::Rubble);
        let grid = build_navigation_grid(
            &flat_map(6),
            &[lake],
            &[debris],
            &BuilderConfig::default(),
        );

        // Lake cells keep their classification; the dry part of the patch
        // becomes rubble.
        assert_eq!(grid.terrain_at(GridCoord::new(2, 2)), TerrainType::Water);
        assert_eq!(grid.terrain_at(GridCoord::new(3, 2)), TerrainType::Rubble);
        assert_eq!(grid.terrain_at(GridCoord::new(3, 3)), TerrainType::Rubble);
    }

    #[test]
    fn test_prop_stamps_nothing() {
        let prop = StaticObject::new(25.0, 25.0, ObjectKind::Prop);
        let grid = build_navigation_grid(&flat_map(6), &[], &[prop], &BuilderConfig::default());
        assert_eq!(grid.cell_counts().obstacle, 0);
    }

    #[test]
    fn test_stamp_overrides_water() {
        let lake = WaterRegion::new(
            vec![
                WorldPoint::new(0.0, 0.0),
                WorldPoint::new(60.0, 0.0),
                WorldPoint::new(60.0, 60.0),
                WorldPoint::new(0.0, 60.0),
            ],
            WaterKind::Area,
        );
        let building = StaticObject::new(25.0, 25.0, ObjectKind::Building);
        let grid = build_navigation_grid(
            &flat_map(6),
            &[lake],
            &[building],
            &BuilderConfig::default(),
        );

        assert_eq!(grid.terrain_at(GridCoord::new(2, 2)), TerrainType::Obstacle);
    }

    #[test]
    fn test_building_near_edge_clips() {
        let building = StaticObject::new(5.0, 5.0, ObjectKind::Building);
        let grid =
            build_navigation_grid(&flat_map(4), &[], &[building], &BuilderConfig::default());

        // Footprint clipped to the grid; the in-bounds 2x2 corner is stamped
        assert_eq!(grid.terrain_at(GridCoord::new(0, 0)), TerrainType::Obstacle);
        assert_eq!(grid.terrain_at(GridCoord::new(1, 1)), TerrainType::Obstacle);
        assert_eq!(grid.cell_counts().obstacle, 4);
    }

    #[test]
    fn test_zero_size_height_field() {
        let empty = HeightMap::flat(0, 0, 10.0, 0.0);
        let grid = build_navigation_grid(&empty, &[], &[], &BuilderConfig::default());

        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.terrain_at(GridCoord::new(0, 0)), TerrainType::Obstacle);
        assert!(grid.is_blocked(GridCoord::new(0, 0)));
    }
}
