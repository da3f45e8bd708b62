//! Named event signals for external consumers.
//!
//! The renderer and audio layers drain these read-only each frame; the
//! engine only pushes events and never waits on them.

use crate::engine::Mode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    ModeChanged { from: Mode, to: Mode },
    /// HUD feedback line with a suggested display duration
    Message { text: String, seconds: f32 },
    EggPickedUp,
    SnackRestocked { count: u8 },
    /// A hostile enemy caught the player; the day is lost
    Caught { enemy: &'static str },
    /// The chaser took the egg instead of the player
    EggConsumed { enemy: &'static str },
    SnackStolen { enemy: &'static str },
    BandwidthWarning,
    BandwidthExhausted,
    DayCompleted { day: u32 },
    Victory,
}

impl GameEvent {
    pub fn message(text: impl Into<String>, seconds: f32) -> Self {
        GameEvent::Message {
            text: text.into(),
            seconds,
        }
    }
}
