//! Movement capability profiles.
//!
//! A [`MovementProfile`] decides which terrain classifications a mover may
//! occupy and whether pinched cells are penalized. Profiles are derived from
//! a [`MoverClass`] per path request; they are cheap value types and are
//! never cached.

use serde::{Deserialize, Serialize};

/// Category of a path-following entity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoverClass {
    /// Aircraft: ignores terrain entirely
    Air,
    /// Ground vehicle
    Vehicle,
    /// Infantry
    Infantry,
    /// Structures and anything unclassified; treated as ground movement
    Building,
}

/// Terrain-crossing capabilities for one path request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementProfile {
    /// May occupy Water cells
    pub can_cross_water: bool,
    /// May occupy Cliff cells
    pub can_cross_cliff: bool,
    /// May occupy Rubble cells
    pub can_cross_rubble: bool,
    /// May occupy Obstacle cells and cells blocked by structure footprints
    pub can_pass_obstacle: bool,
    /// Pay the pinch penalty when entering pinched cells
    pub avoid_pinched: bool,
}

impl MovementProfile {
    /// Resolve the profile for a mover class.
    ///
    /// Air movers cross everything and ignore pinch; every other class is
    /// restricted to clear ground and steers around cliff skirts.
    pub fn for_class(class: MoverClass) -> Self {
        match class {
            MoverClass::Air => Self {
                can_cross_water: true,
                can_cross_cliff: true,
                can_cross_rubble: true,
                can_pass_obstacle: true,
                avoid_pinched: false,
            },
            MoverClass::Vehicle | MoverClass::Infantry | MoverClass::Building => Self {
                can_cross_water: false,
                can_cross_cliff: false,
                can_cross_rubble: false,
                can_pass_obstacle: false,
                avoid_pinched: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_profile() {
        let p = MovementProfile::for_class(MoverClass::Air);
        assert!(p.can_cross_water);
        assert!(p.can_cross_cliff);
        assert!(p.can_cross_rubble);
        assert!(p.can_pass_obstacle);
        assert!(!p.avoid_pinched);
    }

    #[test]
    fn test_ground_profiles_match() {
        let vehicle = MovementProfile::for_class(MoverClass::Vehicle);
        let infantry = MovementProfile::for_class(MoverClass::Infantry);
        let building = MovementProfile::for_class(MoverClass::Building);

        assert_eq!(vehicle, infantry);
        assert_eq!(vehicle, building);
        assert!(!vehicle.can_cross_water);
        assert!(!vehicle.can_cross_cliff);
        assert!(!vehicle.can_cross_rubble);
        assert!(!vehicle.can_pass_obstacle);
        assert!(vehicle.avoid_pinched);
    }
}
