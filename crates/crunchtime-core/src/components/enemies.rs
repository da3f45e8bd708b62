//! Enemy components: variant tags and per-variant state machines.
//!
//! Each enemy entity carries an [`Enemy`] record (static identity and
//! anchors) and a [`Behavior`] (the live state machine). Behavior is a
//! tagged enum, one variant per kind, dispatched with a `match` in the
//! behavior system.

use crunchtime_logic::constants::{chaser, conditional, patrol, sprinter, thief};
use crunchtime_logic::geometry::Vec2;
use crunchtime_logic::layout::RoomId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The five enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Chaser,
    Patrol,
    Conditional,
    Sprinter,
    Thief,
}

/// Static enemy identity: display name plus home/desk anchor points.
/// Names are interned strings, so this serializes but is never restored.
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub name: &'static str,
    /// Spawn point; also the return/eating location
    pub home: Vec2,
    pub home_room: RoomId,
    /// Desk anchor for variants with desk duty; equals `home` otherwise
    pub desk: Vec2,
}

// ── Chaser ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaserPhase {
    Dormant,
    Chasing,
    /// Carrying the egg back home (not hostile)
    Returning,
    Eating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaserState {
    pub phase: ChaserPhase,
    pub activation: f32,
    pub eating_left: f32,
}

// ── Patrol ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatrolPhase {
    Dormant,
    Patrolling,
    AtDesk,
    Angry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolState {
    pub phase: PatrolPhase,
    pub activation: f32,
    /// Remaining roam time before the next desk visit
    pub patrol_left: f32,
    pub desk_left: f32,
    /// Accumulates while snacks are depleted; anger after the check delay
    pub snack_check: f32,
    pub roam_target: Option<Vec2>,
}

// ── Conditional ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionalPhase {
    Dormant,
    Idle,
    AtDesk,
    Chasing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalState {
    pub phase: ConditionalPhase,
    pub activation: f32,
    /// Time since the last desk visit
    pub patrol_timer: f32,
    pub desk_left: f32,
    /// Time until the next player-mode check
    pub check_timer: f32,
}

// ── Sprinter ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SprinterPhase {
    Dormant,
    Resting,
    Sprinting,
    ReturningHome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprinterState {
    pub phase: SprinterPhase,
    pub activation: f32,
    pub sprint_left: f32,
    pub cooldown: f32,
    pub target: Option<Vec2>,
}

// ── Thief ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThiefPhase {
    Dormant,
    Resident,
    Traveling,
    Returning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThiefState {
    pub phase: ThiefPhase,
    pub activation: f32,
    pub trip_timer: f32,
    /// Randomized interval until the next snack trip
    pub next_trip: f32,
}

// ── Tagged behavior ──────────────────────────────────────────────────────

/// Live state machine of one enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Behavior {
    Chaser(ChaserState),
    Patrol(PatrolState),
    Conditional(ConditionalState),
    Sprinter(SprinterState),
    Thief(ThiefState),
}

impl Behavior {
    pub fn chaser() -> Self {
        Behavior::Chaser(ChaserState {
            phase: ChaserPhase::Dormant,
            activation: chaser::ACTIVATION_DELAY,
            eating_left: 0.0,
        })
    }

    pub fn patrol() -> Self {
        Behavior::Patrol(PatrolState {
            phase: PatrolPhase::Dormant,
            activation: patrol::ACTIVATION_DELAY,
            patrol_left: patrol::PATROL_DURATION,
            desk_left: 0.0,
            snack_check: 0.0,
            roam_target: None,
        })
    }

    pub fn conditional() -> Self {
        Behavior::Conditional(ConditionalState {
            phase: ConditionalPhase::Dormant,
            activation: conditional::ACTIVATION_DELAY,
            patrol_timer: 0.0,
            desk_left: 0.0,
            check_timer: conditional::CHECK_INTERVAL,
        })
    }

    pub fn sprinter() -> Self {
        Behavior::Sprinter(SprinterState {
            phase: SprinterPhase::Dormant,
            activation: sprinter::ACTIVATION_DELAY,
            sprint_left: 0.0,
            cooldown: 0.0,
            target: None,
        })
    }

    pub fn thief(rng: &mut impl Rng) -> Self {
        Behavior::Thief(ThiefState {
            phase: ThiefPhase::Dormant,
            activation: thief::ACTIVATION_DELAY,
            trip_timer: 0.0,
            next_trip: rng.gen_range(thief::TRIP_INTERVAL_MIN..thief::TRIP_INTERVAL_MAX),
        })
    }

    pub fn kind(&self) -> EnemyKind {
        match self {
            Behavior::Chaser(_) => EnemyKind::Chaser,
            Behavior::Patrol(_) => EnemyKind::Patrol,
            Behavior::Conditional(_) => EnemyKind::Conditional,
            Behavior::Sprinter(_) => EnemyKind::Sprinter,
            Behavior::Thief(_) => EnemyKind::Thief,
        }
    }

    /// Pre-activation: no velocity, no catches.
    pub fn is_dormant(&self) -> bool {
        match self {
            Behavior::Chaser(s) => s.phase == ChaserPhase::Dormant,
            Behavior::Patrol(s) => s.phase == PatrolPhase::Dormant,
            Behavior::Conditional(s) => s.phase == ConditionalPhase::Dormant,
            Behavior::Sprinter(s) => s.phase == SprinterPhase::Dormant,
            Behavior::Thief(s) => s.phase == ThiefPhase::Dormant,
        }
    }

    /// Whether an overlap with the player is evaluated as a catch.
    pub fn is_hostile(&self) -> bool {
        match self {
            Behavior::Chaser(s) => s.phase == ChaserPhase::Chasing,
            Behavior::Patrol(s) => s.phase == PatrolPhase::Angry,
            Behavior::Conditional(s) => s.phase == ConditionalPhase::Chasing,
            Behavior::Sprinter(s) => s.phase == SprinterPhase::Sprinting,
            Behavior::Thief(_) => false,
        }
    }

    /// Reset for a new day: back to dormant with the initial activation
    /// delay, all state timers cleared.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = match self {
            Behavior::Chaser(_) => Behavior::chaser(),
            Behavior::Patrol(_) => Behavior::patrol(),
            Behavior::Conditional(_) => Behavior::conditional(),
            Behavior::Sprinter(_) => Behavior::sprinter(),
            Behavior::Thief(_) => Behavior::thief(rng),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fresh_behaviors_are_dormant_and_harmless() {
        let mut rng = StdRng::seed_from_u64(7);
        let all = [
            Behavior::chaser(),
            Behavior::patrol(),
            Behavior::conditional(),
            Behavior::sprinter(),
            Behavior::thief(&mut rng),
        ];
        for b in &all {
            assert!(b.is_dormant(), "{:?} should start dormant", b.kind());
            assert!(!b.is_hostile(), "{:?} should start harmless", b.kind());
        }
    }

    #[test]
    fn test_thief_is_never_hostile() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = Behavior::thief(&mut rng);
        if let Behavior::Thief(s) = &mut b {
            s.phase = ThiefPhase::Traveling;
        }
        assert!(!b.is_hostile());
    }

    #[test]
    fn test_hostile_phases() {
        let mut b = Behavior::chaser();
        if let Behavior::Chaser(s) = &mut b {
            s.phase = ChaserPhase::Chasing;
        }
        assert!(b.is_hostile());
        if let Behavior::Chaser(s) = &mut b {
            s.phase = ChaserPhase::Returning;
        }
        assert!(!b.is_hostile(), "carrying the egg home is not hostile");
        if let Behavior::Chaser(s) = &mut b {
            s.phase = ChaserPhase::Eating;
        }
        assert!(!b.is_hostile());
    }

    #[test]
    fn test_reset_restores_initial_activation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = Behavior::chaser();
        if let Behavior::Chaser(s) = &mut b {
            s.phase = ChaserPhase::Chasing;
            s.activation = 0.0;
        }
        b.reset(&mut rng);
        match &b {
            Behavior::Chaser(s) => {
                assert_eq!(s.phase, ChaserPhase::Dormant);
                assert_eq!(s.activation, chaser::ACTIVATION_DELAY);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_thief_trip_interval_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            if let Behavior::Thief(s) = Behavior::thief(&mut rng) {
                assert!(s.next_trip >= thief::TRIP_INTERVAL_MIN);
                assert!(s.next_trip < thief::TRIP_INTERVAL_MAX);
            }
        }
    }
}
