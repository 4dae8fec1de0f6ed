//! Navigation grid storage and construction.
//!
//! - [`NavigationGrid`]: read-only SoA cell storage with coordinate
//!   conversion and occupancy queries
//! - [`build_navigation_grid`]: the four-pass builder (water, cliffs,
//!   pinch skirt, static obstacle stamping)

mod builder;
mod storage;

pub use builder::{build_navigation_grid, BuilderConfig};
pub use storage::{CellCounts, NavigationGrid};
