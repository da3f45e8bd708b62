//! Systems operate on the component data each tick.

pub mod behavior;
pub mod player;

pub use behavior::{behavior_system, PlayerSnapshot, Signal, Surroundings};
pub use player::{interact_system, move_player_system, InteractOutcome};
