//! Per-tick path following for movers.

mod mover;

pub use mover::{Mover, MoverConfig, MoverState};
