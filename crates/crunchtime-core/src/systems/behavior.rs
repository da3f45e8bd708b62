//! Enemy state machines and movement.
//!
//! One pass per tick over every enemy entity. Each variant is a small
//! timer-driven state machine; movement goes through [`seek`], which
//! combines room-to-room navigation (NavGraph doors) with the local
//! steering heuristic inside the current room.
//!
//! The system only reads the player through a [`PlayerSnapshot`] captured
//! before the pass, so the pass itself can iterate the world mutably.

use crate::components::{
    Behavior, Bounds, ChaserPhase, ConditionalPhase, Direction, Enemy, Facing, PatrolPhase,
    Position, SprinterPhase, ThiefPhase,
};
use crate::systems::player::{apply_door_transit, collides_with_walls};
use crunchtime_logic::constants::{chaser, conditional, enemy, patrol, sprinter, thief};
use crunchtime_logic::geometry::{Rect, Vec2};
use crunchtime_logic::layout::{OfficeLayout, RoomId, RoomSpec};
use crunchtime_logic::navgraph::NavGraph;
use crunchtime_logic::steering;
use crunchtime_logic::walls::WALL_THICKNESS;
use hecs::World;
use rand::Rng;

/// Player facts the enemies react to, captured once per tick.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSnapshot {
    pub pos: Vec2,
    pub room: RoomId,
    pub snacks_depleted: bool,
    /// True in the modes the conditional enemy punishes
    pub slacking_visible: bool,
}

/// Side effects the engine resolves after the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    SnackStolen { enemy: &'static str },
}

/// Shared read context for one behavior pass.
pub struct Surroundings<'a> {
    pub layout: &'a OfficeLayout,
    pub nav: &'a mut NavGraph,
    pub player: PlayerSnapshot,
    /// Where the thief goes to steal (the break room refrigerator)
    pub snack_stash: Vec2,
}

pub fn behavior_system(
    world: &mut World,
    surroundings: &mut Surroundings,
    dt: f32,
    rng: &mut impl Rng,
) -> Vec<Signal> {
    let mut signals = Vec::new();
    for (_entity, (enemy, behavior, position, bounds, facing)) in
        world.query_mut::<(&Enemy, &mut Behavior, &mut Position, &Bounds, &mut Facing)>()
    {
        let mut body = Body {
            enemy,
            position,
            bounds,
            facing,
        };
        match behavior {
            Behavior::Chaser(state) => update_chaser(state, &mut body, surroundings, dt),
            Behavior::Patrol(state) => update_patrol(state, &mut body, surroundings, dt, rng),
            Behavior::Conditional(state) => update_conditional(state, &mut body, surroundings, dt),
            Behavior::Sprinter(state) => update_sprinter(state, &mut body, surroundings, dt, rng),
            Behavior::Thief(state) => {
                update_thief(state, &mut body, surroundings, dt, rng, &mut signals)
            }
        }
    }
    signals
}

/// The movable parts of one enemy during the pass.
struct Body<'a> {
    enemy: &'a Enemy,
    position: &'a mut Position,
    bounds: &'a Bounds,
    facing: &'a mut Facing,
}

impl Body<'_> {
    fn at(&self, point: Vec2, radius: f32) -> bool {
        self.position.pos.distance(&point) <= radius
    }

    fn at_home(&self, radius: f32) -> bool {
        self.position.room == self.enemy.home_room && self.at(self.enemy.home, radius)
    }
}

/// Walk toward a target that may be in another room: head for the next
/// connecting door until the rooms match, then for the target itself.
/// Axis-separated collision keeps the walk sliding along walls.
fn seek(
    body: &mut Body,
    surroundings: &mut Surroundings,
    target: Vec2,
    target_room: RoomId,
    speed: f32,
    dt: f32,
) {
    let (waypoint, via_door) = if body.position.room == target_room {
        (target, false)
    } else {
        match surroundings.nav.next_door(body.position.room, target_room) {
            Some(door) => (door, true),
            None => return,
        }
    };

    let room = surroundings.layout.room(body.position.room);
    let mut dir = steering::navigate(body.position.pos, waypoint, &room.walls, &room.bounds);
    if dir == Vec2::ZERO && via_door {
        // A door center is a waypoint to pass through, not arrive at:
        // inside the arrive radius the steering stalls, so push straight
        // for the center until the transit check flips the room.
        dir = (waypoint - body.position.pos).normalize();
    }
    if dir != Vec2::ZERO {
        let step = dir * (speed * dt);

        let pos = &mut body.position.pos;
        let x_candidate = Vec2::new(pos.x + step.x, pos.y);
        if !collides_with_walls(
            &Rect::centered(x_candidate.x, x_candidate.y, body.bounds.w, body.bounds.h),
            &room.walls,
        ) {
            pos.x = x_candidate.x;
        }
        let y_candidate = Vec2::new(pos.x, pos.y + step.y);
        if !collides_with_walls(
            &Rect::centered(y_candidate.x, y_candidate.y, body.bounds.w, body.bounds.h),
            &room.walls,
        ) {
            pos.y = y_candidate.y;
        }

        if let Some(d) = Direction::from_vector(&dir) {
            body.facing.0 = d;
        }
    }

    // Runs even on a zero step: parked exactly on a door center the
    // room still flips, which hands the walk its next waypoint.
    let rect = body.bounds.rect(body.position);
    apply_door_transit(body.position, &rect, surroundings.layout);
}

fn seek_player(body: &mut Body, surroundings: &mut Surroundings, speed: f32, dt: f32) {
    let player = surroundings.player;
    seek(body, surroundings, player.pos, player.room, speed, dt);
}

fn seek_home(body: &mut Body, surroundings: &mut Surroundings, speed: f32, dt: f32) {
    let (home, home_room) = (body.enemy.home, body.enemy.home_room);
    seek(body, surroundings, home, home_room, speed, dt);
}

/// A roam destination clear of the walls, with margin for the enemy box.
fn random_point_in(room: &RoomSpec, rng: &mut impl Rng) -> Vec2 {
    let margin = WALL_THICKNESS + enemy::WIDTH;
    Vec2::new(
        rng.gen_range(room.bounds.x + margin..room.bounds.right() - margin),
        rng.gen_range(room.bounds.y + margin..room.bounds.bottom() - margin),
    )
}

// ── Chaser ───────────────────────────────────────────────────────────────
//
// Relentless pursuit. Only an egg hand-off (resolved by the engine on
// catch) interrupts it: the chaser carries the egg home, eats, and
// resumes the chase.

fn update_chaser(
    state: &mut crate::components::ChaserState,
    body: &mut Body,
    surroundings: &mut Surroundings,
    dt: f32,
) {
    match state.phase {
        ChaserPhase::Dormant => {
            state.activation -= dt;
            if state.activation <= 0.0 {
                state.phase = ChaserPhase::Chasing;
            }
        }
        ChaserPhase::Chasing => {
            seek_player(body, surroundings, chaser::SPEED, dt);
        }
        ChaserPhase::Returning => {
            seek_home(body, surroundings, chaser::SPEED * chaser::RETURN_FACTOR, dt);
            if body.at_home(chaser::HOME_RADIUS) {
                state.phase = ChaserPhase::Eating;
                state.eating_left = chaser::EATING_DURATION;
            }
        }
        ChaserPhase::Eating => {
            state.eating_left -= dt;
            if state.eating_left <= 0.0 {
                state.phase = ChaserPhase::Chasing;
            }
        }
    }
}

// ── Patrol ───────────────────────────────────────────────────────────────
//
// Roams its home room with desk breaks, and turns on the player when the
// snack supply has been empty for a full check delay. Restocking calms
// it back down.

fn update_patrol(
    state: &mut crate::components::PatrolState,
    body: &mut Body,
    surroundings: &mut Surroundings,
    dt: f32,
    rng: &mut impl Rng,
) {
    if state.phase != PatrolPhase::Dormant {
        if surroundings.player.snacks_depleted {
            state.snack_check += dt;
            if state.snack_check >= patrol::SNACK_CHECK_DELAY && state.phase != PatrolPhase::Angry {
                state.phase = PatrolPhase::Angry;
            }
        } else {
            state.snack_check = 0.0;
            if state.phase == PatrolPhase::Angry {
                state.phase = PatrolPhase::Patrolling;
                state.patrol_left = patrol::PATROL_DURATION;
                state.roam_target = None;
            }
        }
    }

    match state.phase {
        PatrolPhase::Dormant => {
            state.activation -= dt;
            if state.activation <= 0.0 {
                state.phase = PatrolPhase::Patrolling;
                state.patrol_left = patrol::PATROL_DURATION;
            }
        }
        PatrolPhase::Patrolling => {
            let home_room = body.enemy.home_room;
            let target = match state.roam_target {
                Some(t) if !body.at(t, steering::ARRIVE_RADIUS) => t,
                _ => {
                    let t = random_point_in(surroundings.layout.room(home_room), rng);
                    state.roam_target = Some(t);
                    t
                }
            };
            seek(body, surroundings, target, home_room, patrol::SPEED, dt);

            state.patrol_left -= dt;
            if state.patrol_left <= 0.0 {
                state.phase = PatrolPhase::AtDesk;
                state.desk_left = patrol::DESK_DURATION;
                state.roam_target = None;
            }
        }
        PatrolPhase::AtDesk => {
            let (desk, home_room) = (body.enemy.desk, body.enemy.home_room);
            if body.at(desk, patrol::DESK_RADIUS) && body.position.room == home_room {
                state.desk_left -= dt;
                if state.desk_left <= 0.0 {
                    state.phase = PatrolPhase::Patrolling;
                    state.patrol_left = patrol::PATROL_DURATION;
                }
            } else {
                seek(body, surroundings, desk, home_room, patrol::SPEED, dt);
            }
        }
        PatrolPhase::Angry => {
            seek_player(body, surroundings, patrol::ANGRY_SPEED, dt);
        }
    }
}

// ── Conditional ──────────────────────────────────────────────────────────
//
// Polls the player's mode on a fixed interval and chases only while the
// player is visibly slacking. Otherwise alternates between idling at its
// spot and a periodic desk visit.

fn update_conditional(
    state: &mut crate::components::ConditionalState,
    body: &mut Body,
    surroundings: &mut Surroundings,
    dt: f32,
) {
    if state.phase == ConditionalPhase::Dormant {
        state.activation -= dt;
        if state.activation <= 0.0 {
            state.phase = ConditionalPhase::Idle;
        }
        return;
    }

    state.check_timer -= dt;
    if state.check_timer <= 0.0 {
        state.check_timer = conditional::CHECK_INTERVAL;
        if surroundings.player.slacking_visible {
            state.phase = ConditionalPhase::Chasing;
        } else if state.phase == ConditionalPhase::Chasing {
            state.phase = ConditionalPhase::Idle;
        }
    }

    match state.phase {
        ConditionalPhase::Dormant => unreachable!("handled above"),
        ConditionalPhase::Idle => {
            seek_home(body, surroundings, conditional::SPEED, dt);
            state.patrol_timer += dt;
            if state.patrol_timer >= conditional::DESK_RETURN_INTERVAL {
                state.patrol_timer = 0.0;
                state.phase = ConditionalPhase::AtDesk;
                state.desk_left = conditional::DESK_DURATION;
            }
        }
        ConditionalPhase::AtDesk => {
            let (desk, home_room) = (body.enemy.desk, body.enemy.home_room);
            if body.at(desk, conditional::DESK_RADIUS) && body.position.room == home_room {
                state.desk_left -= dt;
                if state.desk_left <= 0.0 {
                    state.phase = ConditionalPhase::Idle;
                }
            } else {
                let speed = conditional::SPEED * conditional::DESK_RETURN_FACTOR;
                seek(body, surroundings, desk, home_room, speed, dt);
            }
        }
        ConditionalPhase::Chasing => {
            seek_player(body, surroundings, conditional::SPEED, dt);
        }
    }
}

// ── Sprinter ─────────────────────────────────────────────────────────────
//
// Rests on a cooldown, then picks a random spot anywhere in the office
// and sprints straight at it. Anything in the lane gets run over. The
// sprint ends on arrival or timeout; either way it walks home to rest
// again.

fn update_sprinter(
    state: &mut crate::components::SprinterState,
    body: &mut Body,
    surroundings: &mut Surroundings,
    dt: f32,
    rng: &mut impl Rng,
) {
    match state.phase {
        SprinterPhase::Dormant => {
            state.activation -= dt;
            if state.activation <= 0.0 {
                state.phase = SprinterPhase::Resting;
                state.cooldown = sprinter::COOLDOWN;
            }
        }
        SprinterPhase::Resting => {
            state.cooldown -= dt;
            if state.cooldown <= 0.0 {
                state.phase = SprinterPhase::Sprinting;
                state.sprint_left = sprinter::SPRINT_DURATION;
                let rooms = surroundings.layout.rooms();
                let room = &rooms[rng.gen_range(0..rooms.len())];
                state.target = Some(random_point_in(room, rng));
            }
        }
        SprinterPhase::Sprinting => {
            let target = match state.target {
                Some(t) => t,
                None => {
                    state.phase = SprinterPhase::ReturningHome;
                    return;
                }
            };
            let target_room = surroundings
                .layout
                .room_at(&target)
                .unwrap_or(body.position.room);
            seek(body, surroundings, target, target_room, sprinter::SPRINT_SPEED, dt);

            state.sprint_left -= dt;
            if state.sprint_left <= 0.0 || body.at(target, sprinter::TARGET_RADIUS) {
                state.phase = SprinterPhase::ReturningHome;
                state.target = None;
            }
        }
        SprinterPhase::ReturningHome => {
            seek_home(body, surroundings, sprinter::SPEED, dt);
            if body.at_home(sprinter::HOME_RADIUS) {
                state.phase = SprinterPhase::Resting;
                state.cooldown = sprinter::COOLDOWN;
            }
        }
    }
}

// ── Thief ────────────────────────────────────────────────────────────────
//
// Never hostile. Lives in its home room and makes a snack run to the
// break room stash on a randomized interval; reaching the stash emits a
// steal signal for the engine to apply.

fn update_thief(
    state: &mut crate::components::ThiefState,
    body: &mut Body,
    surroundings: &mut Surroundings,
    dt: f32,
    rng: &mut impl Rng,
    signals: &mut Vec<Signal>,
) {
    match state.phase {
        ThiefPhase::Dormant => {
            state.activation -= dt;
            if state.activation <= 0.0 {
                state.phase = ThiefPhase::Resident;
                state.trip_timer = 0.0;
            }
        }
        ThiefPhase::Resident => {
            seek_home(body, surroundings, thief::SPEED, dt);
            state.trip_timer += dt;
            if state.trip_timer >= state.next_trip {
                state.phase = ThiefPhase::Traveling;
            }
        }
        ThiefPhase::Traveling => {
            let stash = surroundings.snack_stash;
            seek(body, surroundings, stash, RoomId::BreakRoom, thief::SPEED, dt);
            if body.position.room == RoomId::BreakRoom && body.at(stash, thief::STEAL_RADIUS) {
                signals.push(Signal::SnackStolen {
                    enemy: body.enemy.name,
                });
                state.phase = ThiefPhase::Returning;
                state.trip_timer = 0.0;
                state.next_trip =
                    rng.gen_range(thief::TRIP_INTERVAL_MIN..thief::TRIP_INTERVAL_MAX);
            }
        }
        ThiefPhase::Returning => {
            seek_home(body, surroundings, thief::SPEED, dt);
            if body.at_home(thief::HOME_RADIUS) {
                state.phase = ThiefPhase::Resident;
            }
        }
    }
}
