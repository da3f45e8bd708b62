//! Gameplay tuning constants.
//!
//! Speeds are world units (pixels) per second, durations are seconds.

/// Player movement and inventory
pub mod player {
    pub const WIDTH: f32 = 40.0;
    pub const HEIGHT: f32 = 40.0;
    pub const SPEED: f32 = 200.0;
    pub const MAX_SNACKS: u8 = 5;
    pub const STARTING_SNACKS: u8 = 5;
}

/// Bandwidth meter (the Working-mode fail resource)
pub mod bandwidth {
    pub const MAX: f32 = 100.0;
    pub const WORKING_DRAIN: f32 = 5.0;
    pub const CAMERA_DRAIN: f32 = 5.0;
    pub const SLACKING_REFILL: f32 = 10.0;
    pub const FREE_ROAM_REFILL: f32 = 2.0;
    /// Below this a warning event fires (once per crossing)
    pub const WARNING_LEVEL: f32 = 20.0;
}

/// Chaser variant (constant pursuit, bribable with an egg)
pub mod chaser {
    pub const SPEED: f32 = 60.0;
    pub const ACTIVATION_DELAY: f32 = 30.0;
    pub const EATING_DURATION: f32 = 10.0;
    /// Speed multiplier while carrying the egg home
    pub const RETURN_FACTOR: f32 = 1.5;
    /// Close enough to home to start eating
    pub const HOME_RADIUS: f32 = 10.0;
}

/// Patrol variant (duty-cycles between roaming and desk, angry on snack depletion)
pub mod patrol {
    pub const SPEED: f32 = 50.0;
    pub const ANGRY_SPEED: f32 = 85.0;
    pub const ACTIVATION_DELAY: f32 = 8.0;
    pub const PATROL_DURATION: f32 = 10.0;
    pub const DESK_DURATION: f32 = 5.0;
    /// Snack depletion must persist this long before anger triggers
    pub const SNACK_CHECK_DELAY: f32 = 10.0;
    pub const DESK_RADIUS: f32 = 5.0;
}

/// Conditional variant (hostile when the player's mode is unsafe)
pub mod conditional {
    pub const SPEED: f32 = 70.0;
    pub const ACTIVATION_DELAY: f32 = 10.0;
    /// Mode check cadence while active
    pub const CHECK_INTERVAL: f32 = 5.0;
    pub const DESK_RETURN_INTERVAL: f32 = 15.0;
    pub const DESK_DURATION: f32 = 8.0;
    /// Speed multiplier while drifting back to the desk
    pub const DESK_RETURN_FACTOR: f32 = 0.5;
    pub const DESK_RADIUS: f32 = 5.0;
}

/// Sprinter variant (hit-and-run bursts through random rooms)
pub mod sprinter {
    pub const SPEED: f32 = 40.0;
    pub const SPRINT_SPEED: f32 = 200.0;
    pub const ACTIVATION_DELAY: f32 = 20.0;
    pub const SPRINT_DURATION: f32 = 3.0;
    pub const COOLDOWN: f32 = 10.0;
    /// Reached the sprint target; pick a new one
    pub const TARGET_RADIUS: f32 = 10.0;
    pub const HOME_RADIUS: f32 = 20.0;
}

/// Thief variant (harmless snack pilferer)
pub mod thief {
    pub const SPEED: f32 = 60.0;
    pub const ACTIVATION_DELAY: f32 = 15.0;
    pub const TRIP_INTERVAL_MIN: f32 = 30.0;
    pub const TRIP_INTERVAL_MAX: f32 = 60.0;
    /// Close enough to the snack stash to steal
    pub const STEAL_RADIUS: f32 = 50.0;
    pub const HOME_RADIUS: f32 = 20.0;
}

/// Enemy bounding boxes
pub mod enemy {
    pub const WIDTH: f32 = 38.0;
    pub const HEIGHT: f32 = 38.0;
}
