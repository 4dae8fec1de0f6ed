//! # gridnav: Navigation Grids and Tactical Pathfinding
//!
//! Grid-based navigation for RTS-style maps: converts static map data
//! (elevation samples, water polygons, immobile structures) into a
//! discretized navigability grid, computes cost-aware paths between world
//! positions respecting per-unit movement capabilities, and drives per-tick
//! path following for each moving entity.
//!
//! ## Features
//!
//! - **Four-pass grid builder**: water polygons, cliff thresholds, a
//!   two-cell pinch skirt around cliffs, and structure footprint stamping
//! - **Cost-aware A\***: terrain penalties, corner-cutting prevention,
//!   direction-change bias, nearest-passable-cell goal fallback, and a
//!   node-expansion ceiling bounding worst-case latency
//! - **String-pulling smoother**: minimal straight-segment polylines that
//!   preserve the search's own passability guarantees
//! - **Path-following executor**: waypoint advancement with overshoot
//!   clamping and filtered terrain-height tracking
//!
//! ## Quick Start
//!
//! ```rust
//! use gridnav::{
//!     build_navigation_grid, request_path, BuilderConfig, HeightMap, Mover,
//!     MoverClass, MoverConfig, MovementProfile, WorldPoint,
//! };
//!
//! // Build the grid once per map load
//! let heights = HeightMap::flat(16, 16, 10.0, 0.0);
//! let grid = build_navigation_grid(&heights, &[], &[], &BuilderConfig::default());
//!
//! // Request a path and hand it to a mover
//! let profile = MovementProfile::for_class(MoverClass::Vehicle);
//! let mut tank = Mover::new(MoverClass::Vehicle, 5.0, 0.0, 5.0, 12.0);
//! if let Some(path) = request_path(
//!     &grid,
//!     WorldPoint::new(5.0, 5.0),
//!     WorldPoint::new(145.0, 145.0),
//!     &profile,
//! ) {
//!     tank.assign_path(path);
//! }
//!
//! // Drive the executor once per simulation tick
//! tank.advance(&heights, &MoverConfig::default(), 1.0 / 30.0);
//! assert!(tank.is_moving());
//! ```
//!
//! ## Architecture
//!
//! Data flows one way:
//!
//! ```text
//! HeightSource + WaterRegion + StaticObject
//!                 |
//!                 v
//!      build_navigation_grid          MovementProfile::for_class
//!                 |                              |
//!                 v                              v
//!          NavigationGrid  <------------  PathPlanner (A*)
//!           (read-only)                          |
//!                                                v
//!                                          string_pull
//!                                                |
//!                                                v
//!                                       Mover::advance per tick
//! ```
//!
//! The grid is immutable after construction; any change to the static world
//! rebuilds it from scratch. Searches only read the grid, so a concurrent
//! host publishes rebuilds by swapping an `Arc<NavigationGrid>`.
//!
//! ## Modules
//!
//! - [`core`]: Fundamental types ([`GridCoord`], [`WorldPoint`], [`TerrainType`])
//! - [`sources`]: Collaborator interfaces the builder consumes
//! - [`grid`]: Grid storage and the four-pass builder
//! - [`profile`]: Per-class movement capabilities
//! - [`pathfinding`]: A* search and string-pulling smoothing
//! - [`movement`]: Per-tick path-following executor
//! - [`config`]: Unified TOML configuration

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod movement;
pub mod pathfinding;
pub mod profile;
pub mod sources;

pub use config::NavConfig;
pub use core::{GridCoord, TerrainType, WorldPoint};
pub use error::{NavError, Result};
pub use grid::{build_navigation_grid, BuilderConfig, CellCounts, NavigationGrid};
pub use movement::{Mover, MoverConfig, MoverState};
pub use pathfinding::{request_path, AStarConfig, PathFailure, PathPlanner, PathResult};
pub use profile::{MoverClass, MovementProfile};
pub use sources::{HeightMap, HeightSource, ObjectKind, StaticObject, WaterKind, WaterRegion};
