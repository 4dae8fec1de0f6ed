//! Path search and smoothing.
//!
//! - **A\* search**: cost-aware 8-connected search with a reusable scratch
//!   arena ([`PathPlanner`], [`request_path`])
//! - **String pulling**: collapses dense cell paths into minimal
//!   straight-segment polylines ([`string_pull`])
//!
//! ```rust,ignore
//! use gridnav::pathfinding::request_path;
//!
//! if let Some(waypoints) = request_path(&grid, start, goal, &profile) {
//!     mover.assign_path(waypoints);
//! }
//! ```

pub mod astar;
pub mod smoothing;

pub use astar::{request_path, AStarConfig, PathFailure, PathPlanner, PathResult};
pub use smoothing::{cells_to_world, line_cells, line_passable, string_pull};
