//! Core types for the gridnav navigation library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GridCoord`] and [`WorldPoint`]: Coordinate types
//! - [`TerrainType`]: Semantic cell classification

mod point;
mod terrain;

pub use point::{GridCoord, WorldPoint};
pub use terrain::TerrainType;
