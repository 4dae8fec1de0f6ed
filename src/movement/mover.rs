//! Per-tick path following.
//!
//! Each [`Mover`] owns its waypoint list and index exclusively; movers are
//! independent and the executor never touches shared state. The state
//! machine is Idle -> Moving -> Idle: Moving on a successful path
//! assignment, back to Idle on arrival at the final waypoint or on
//! [`Mover::stop`].

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::profile::MoverClass;
use crate::sources::HeightSource;

/// Path-following settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoverConfig {
    /// Distance at which a waypoint counts as reached (world units)
    #[serde(default = "default_arrive_epsilon")]
    pub arrive_epsilon: f32,

    /// Rate of the single-pole vertical filter toward terrain height (1/s)
    #[serde(default = "default_height_snap_speed")]
    pub height_snap_speed: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            arrive_epsilon: default_arrive_epsilon(),
            height_snap_speed: default_height_snap_speed(),
        }
    }
}

fn default_arrive_epsilon() -> f32 {
    0.25
}

fn default_height_snap_speed() -> f32 {
    8.0
}

/// Path-following state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MoverState {
    /// No active path
    #[default]
    Idle,
    /// Following the assigned waypoint list
    Moving,
}

/// One path-following entity.
///
/// The pathfinding core only manages the waypoint list, index and state it
/// was handed; everything else (combat, selection, rendering hooks) belongs
/// to the entity layer.
#[derive(Clone, Debug)]
pub struct Mover {
    /// World X position
    pub x: f32,
    /// World Y position (elevation)
    pub y: f32,
    /// World Z position
    pub z: f32,
    /// Facing angle in radians, recomputed from the movement vector
    pub yaw: f32,
    /// Movement category, used to resolve the profile per request
    pub class: MoverClass,
    /// Movement speed in world units per second
    pub speed: f32,

    waypoints: Vec<WorldPoint>,
    waypoint_index: usize,
    state: MoverState,
}

impl Mover {
    /// Create an idle mover at a world position
    pub fn new(class: MoverClass, x: f32, y: f32, z: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            z,
            yaw: 0.0,
            class,
            speed,
            waypoints: Vec::new(),
            waypoint_index: 0,
            state: MoverState::Idle,
        }
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> MoverState {
        self.state
    }

    /// Is the mover following a path?
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state == MoverState::Moving
    }

    /// Remaining waypoints (active one first)
    pub fn remaining_waypoints(&self) -> &[WorldPoint] {
        &self.waypoints[self.waypoint_index.min(self.waypoints.len())..]
    }

    /// Ground-plane position
    #[inline]
    pub fn ground_position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.z)
    }

    /// Assign a freshly requested path.
    ///
    /// An empty list means the request resolved to the mover's own cell;
    /// the mover arrives immediately and stays Idle.
    pub fn assign_path(&mut self, waypoints: Vec<WorldPoint>) {
        if waypoints.is_empty() {
            trace!("[Mover] empty path assigned, staying idle");
            self.clear();
            return;
        }
        trace!("[Mover] path assigned: {} waypoints", waypoints.len());
        self.waypoints = waypoints;
        self.waypoint_index = 0;
        self.state = MoverState::Moving;
    }

    /// Cancel the in-progress path and return to Idle
    pub fn stop(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.waypoints.clear();
        self.waypoint_index = 0;
        self.state = MoverState::Idle;
    }

    /// Advance one simulation tick.
    ///
    /// Moves toward the active waypoint clamped to `speed * dt`, filters the
    /// vertical position toward the sampled terrain height and recomputes
    /// facing from the instantaneous movement vector.
    pub fn advance(&mut self, height: &dyn HeightSource, config: &MoverConfig, dt: f32) {
        if self.state != MoverState::Moving {
            return;
        }

        let Some(&target) = self.waypoints.get(self.waypoint_index) else {
            self.clear();
            return;
        };

        let to_target = target - self.ground_position();
        let distance = to_target.length();

        if distance <= config.arrive_epsilon {
            self.waypoint_index += 1;
            if self.waypoint_index >= self.waypoints.len() {
                trace!("[Mover] arrived at final waypoint");
                self.clear();
            }
            return;
        }

        // Clamped so a single tick never overshoots the waypoint
        let step = (self.speed * dt).min(distance);
        let dir = to_target.normalize();
        self.x += dir.x * step;
        self.z += dir.z * step;
        self.yaw = dir.x.atan2(dir.z);

        // Single-pole decay toward terrain height rides smoothly over slopes
        let target_y = height.sample_height(self.x, self.z);
        let alpha = 1.0 - (-config.height_snap_speed * dt).exp();
        self.y += (target_y - self.y) * alpha;
    }
}
