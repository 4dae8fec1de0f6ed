//! String-pulling path smoothing.
//!
//! Collapses the dense cell path produced by the search into the minimal
//! straight-segment polyline that never crosses terrain the search itself
//! would have refused. Line passability uses a Bresenham-style stepped walk
//! whose diagonal steps obey the same corner-cutting rule as the search.

use crate::core::{GridCoord, WorldPoint};
use crate::grid::NavigationGrid;
use crate::profile::MovementProfile;

/// All cells visited by a stepped straight-line walk from `a` to `b`,
/// inclusive of both endpoints. Diagonal steps are taken as single combined
/// steps, matching the search's movement set.
pub fn line_cells(a: GridCoord, b: GridCoord) -> Vec<GridCoord> {
    let mut cells = Vec::with_capacity(a.chebyshev_distance(&b) as usize + 1);
    walk_line(a, b, |cell, _| {
        cells.push(cell);
        true
    });
    cells
}

/// Is the straight line from `a` to `b` fully passable for this profile?
///
/// Every visited cell must satisfy `can_occupy`; a combined diagonal step
/// additionally requires both orthogonally-adjacent flank cells to be
/// independently passable, mirroring the search's diagonal rule.
pub fn line_passable(
    grid: &NavigationGrid,
    profile: &MovementProfile,
    a: GridCoord,
    b: GridCoord,
) -> bool {
    let mut clear = true;
    walk_line(a, b, |cell, flanks| {
        if !grid.can_occupy(cell, profile) {
            clear = false;
            return false;
        }
        if let Some((fa, fb)) = flanks {
            if !grid.can_occupy(fa, profile) || !grid.can_occupy(fb, profile) {
                clear = false;
                return false;
            }
        }
        true
    });
    clear
}

/// Bresenham-style walk. The visitor receives each visited cell and, for
/// cells entered by a combined diagonal step, the two flank cells that step
/// slid between. Returning `false` stops the walk.
fn walk_line<F>(a: GridCoord, b: GridCoord, mut visit: F)
where
    F: FnMut(GridCoord, Option<(GridCoord, GridCoord)>) -> bool,
{
    let mut x = a.x;
    let mut z = a.z;
    let dx = (b.x - a.x).abs();
    let dz = (b.z - a.z).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sz = if a.z < b.z { 1 } else { -1 };
    let mut err = dx - dz;

    if !visit(GridCoord::new(x, z), None) {
        return;
    }

    while x != b.x || z != b.z {
        let e2 = 2 * err;
        let step_x = e2 > -dz && x != b.x;
        let step_z = e2 < dx && z != b.z;

        let flanks = if step_x && step_z {
            Some((GridCoord::new(x + sx, z), GridCoord::new(x, z + sz)))
        } else {
            None
        };

        if step_x {
            err -= dz;
            x += sx;
        }
        if step_z {
            err += dx;
            z += sz;
        }

        if !visit(GridCoord::new(x, z), flanks) {
            return;
        }
    }
}

/// Collapse a dense cell path into its minimal straight-segment polyline.
///
/// Each committed cell is the furthest path cell directly visible from the
/// current anchor, found by scanning from the tail backward. Visibility is
/// not monotone along the path (a nearer cell can be occluded while a
/// further one is not), so stopping at the first blocked probe would commit
/// corners a later segment makes redundant; taking the furthest visible
/// cell makes smoothing idempotent.
pub fn string_pull(
    grid: &NavigationGrid,
    profile: &MovementProfile,
    cells: &[GridCoord],
) -> Vec<GridCoord> {
    if cells.len() <= 2 {
        return cells.to_vec();
    }

    let mut pulled = vec![cells[0]];
    let mut anchor = 0;

    while anchor + 1 < cells.len() {
        // Adjacent path cells are always mutually reachable
        let mut next = anchor + 1;
        for candidate in (anchor + 2..cells.len()).rev() {
            if line_passable(grid, profile, cells[anchor], cells[candidate]) {
                next = candidate;
                break;
            }
        }
        pulled.push(cells[next]);
        anchor = next;
    }
    pulled
}

/// Convert a cell sequence to world waypoints at cell centers
pub fn cells_to_world(grid: &NavigationGrid, cells: &[GridCoord]) -> Vec<WorldPoint> {
    cells.iter().map(|&c| grid.grid_to_world(c)).collect()
}
