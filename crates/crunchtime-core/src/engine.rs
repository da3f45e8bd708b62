//! The fixed-timestep game engine: mode controller, tick loop, catch
//! resolution, and the day/victory arc.
//!
//! [`GameEngine`] owns the world, the layout, the navigation graph, and a
//! seeded RNG; the same seed and the same intent stream replay the same
//! run. Each [`GameEngine::tick`] applies one [`Intent`] and advances the
//! simulation by `dt` seconds.

use crate::components::{
    Behavior, Bounds, ChaserPhase, Enemy, EnemyKind, Inventory, Position,
};
use crate::events::GameEvent;
use crate::generation::{self, Population};
use crate::systems::{
    behavior_system, interact_system, move_player_system, InteractOutcome, PlayerSnapshot, Signal,
    Surroundings,
};
use crunchtime_logic::constants::bandwidth;
use crunchtime_logic::geometry::{Rect, Vec2};
use crunchtime_logic::layout::{LayoutError, OfficeLayout, RoomId};
use crunchtime_logic::navgraph::NavGraph;
use crunchtime_logic::workday;
use hecs::World;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Top-level game mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Walking the office
    FreeRoam,
    /// At the laptop; the clock runs and bandwidth drains
    Working,
    /// At the laptop pretending to work; the clock runs and bandwidth refills
    Slacking,
    /// Watching the camera feed; overlays Working with extra drain
    Camera,
    Paused,
    GameOver,
    Victory,
}

impl Mode {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::GameOver | Mode::Victory)
    }

    /// The clock only runs while seated at the laptop.
    fn clock_runs(&self) -> bool {
        matches!(self, Mode::Working | Mode::Slacking)
    }
}

/// Mode-switch requests carried by an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    StartWorking,
    StartSlacking,
    /// Leave the laptop back to FreeRoam
    Cancel,
    ToggleCamera,
    TogglePause,
}

/// One tick of player input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intent {
    pub move_dir: Vec2,
    pub interact: bool,
    pub action: Option<ModeAction>,
}

/// A read-only view of one enemy for HUD and rendering layers.
#[derive(Debug, Clone, Copy)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub name: &'static str,
    pub pos: Vec2,
    pub room: RoomId,
    pub hostile: bool,
}

pub struct GameEngine {
    world: World,
    layout: OfficeLayout,
    nav: NavGraph,
    population: Population,
    snack_stash: Vec2,
    rng: StdRng,
    mode: Mode,
    day: u32,
    clock_progress: f32,
    bandwidth: f32,
    bandwidth_warned: bool,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(seed: u64) -> Result<Self, LayoutError> {
        let layout = OfficeLayout::standard()?;
        let nav = NavGraph::from_door_edges(&layout.door_edges());
        let snack_stash = generation::snack_stash(&layout);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = World::new();
        let population = generation::spawn_population(&mut world, &layout, &mut rng);
        Ok(Self {
            world,
            layout,
            nav,
            population,
            snack_stash,
            rng,
            mode: Mode::FreeRoam,
            day: 1,
            clock_progress: 0.0,
            bandwidth: bandwidth::MAX,
            bandwidth_warned: false,
            events: Vec::new(),
        })
    }

    /// Advance the simulation by `dt` seconds under one input intent.
    pub fn tick(&mut self, intent: &Intent, dt: f32) {
        if self.mode.is_terminal() {
            return;
        }

        if let Some(action) = intent.action {
            self.apply_action(action);
        }
        if self.mode == Mode::Paused {
            return;
        }

        if self.mode == Mode::FreeRoam {
            if intent.interact {
                self.apply_interact();
            }
            // interact may have seated the player at the laptop
            if self.mode == Mode::FreeRoam {
                move_player_system(
                    &mut self.world,
                    self.population.player,
                    &self.layout,
                    intent.move_dir,
                    dt,
                );
            }
        }

        if self.mode.clock_runs() {
            self.clock_progress = workday::advance(self.clock_progress, dt);
        }
        self.update_bandwidth(dt);
        if self.mode.is_terminal() {
            return;
        }

        let snapshot = self.player_snapshot();
        let mut surroundings = Surroundings {
            layout: &self.layout,
            nav: &mut self.nav,
            player: snapshot,
            snack_stash: self.snack_stash,
        };
        let signals = behavior_system(&mut self.world, &mut surroundings, dt, &mut self.rng);
        for signal in signals {
            match signal {
                Signal::SnackStolen { enemy } => {
                    let mut inventory = self
                        .world
                        .get::<&mut Inventory>(self.population.player)
                        .expect("player has an inventory");
                    if inventory.take_snack() {
                        drop(inventory);
                        self.events.push(GameEvent::SnackStolen { enemy });
                    }
                }
            }
        }

        self.evaluate_catches();
        if self.mode.is_terminal() {
            return;
        }

        if workday::is_day_complete(self.clock_progress) {
            self.finish_day();
        }
    }

    // ── Mode control ─────────────────────────────────────────────────────

    /// Invalid requests are dropped without effect; repeating a request
    /// for the current mode is a no-op.
    fn apply_action(&mut self, action: ModeAction) {
        match (self.mode, action) {
            (Mode::FreeRoam, ModeAction::StartWorking) if self.player_in_meeting_room() => {
                self.set_mode(Mode::Working);
            }
            (Mode::FreeRoam, ModeAction::StartSlacking) if self.player_in_meeting_room() => {
                self.set_mode(Mode::Slacking);
            }
            // Already seated: swap between the two surfaces directly
            (Mode::Working, ModeAction::StartSlacking) => {
                self.set_mode(Mode::Slacking);
            }
            (Mode::Slacking, ModeAction::StartWorking) => {
                self.set_mode(Mode::Working);
            }
            (Mode::Working | Mode::Slacking, ModeAction::Cancel) => {
                self.set_mode(Mode::FreeRoam);
            }
            (Mode::Camera, ModeAction::Cancel | ModeAction::ToggleCamera) => {
                self.set_mode(Mode::Working);
            }
            (Mode::Working, ModeAction::ToggleCamera) => {
                self.set_mode(Mode::Camera);
            }
            (Mode::FreeRoam, ModeAction::TogglePause) => {
                self.set_mode(Mode::Paused);
            }
            (Mode::Paused, ModeAction::TogglePause) => {
                self.set_mode(Mode::FreeRoam);
            }
            _ => {}
        }
    }

    fn set_mode(&mut self, to: Mode) {
        if self.mode == to {
            return;
        }
        let from = self.mode;
        self.mode = to;
        self.events.push(GameEvent::ModeChanged { from, to });
    }

    fn apply_interact(&mut self) {
        let outcome = interact_system(&mut self.world, self.population.player, &self.layout);
        match outcome {
            Some(InteractOutcome::GotEgg) => {
                self.events.push(GameEvent::EggPickedUp);
                self.events.push(GameEvent::message("Took the egg.", 2.0));
            }
            Some(InteractOutcome::AlreadyHaveEgg) => {
                self.events
                    .push(GameEvent::message("One egg is plenty.", 2.0));
            }
            Some(InteractOutcome::SnackRestocked { count }) => {
                self.events.push(GameEvent::SnackRestocked { count });
            }
            Some(InteractOutcome::OpenLaptop) => {
                self.set_mode(Mode::Working);
            }
            Some(InteractOutcome::Feedback(text)) => {
                self.events.push(GameEvent::message(text, 2.0));
            }
            None => {}
        }
    }

    // ── Bandwidth ────────────────────────────────────────────────────────

    fn update_bandwidth(&mut self, dt: f32) {
        let rate = match self.mode {
            Mode::Working => -bandwidth::WORKING_DRAIN,
            Mode::Camera => -(bandwidth::WORKING_DRAIN + bandwidth::CAMERA_DRAIN),
            Mode::Slacking => bandwidth::SLACKING_REFILL,
            Mode::FreeRoam => bandwidth::FREE_ROAM_REFILL,
            Mode::Paused | Mode::GameOver | Mode::Victory => 0.0,
        };
        self.bandwidth = (self.bandwidth + rate * dt).clamp(0.0, bandwidth::MAX);

        if self.bandwidth <= bandwidth::WARNING_LEVEL && rate < 0.0 {
            if !self.bandwidth_warned {
                self.bandwidth_warned = true;
                self.events.push(GameEvent::BandwidthWarning);
            }
        } else if self.bandwidth > bandwidth::WARNING_LEVEL {
            self.bandwidth_warned = false;
        }

        if self.bandwidth <= 0.0 && matches!(self.mode, Mode::Working | Mode::Camera) {
            self.events.push(GameEvent::BandwidthExhausted);
            self.set_mode(Mode::GameOver);
        }
    }

    // ── Catches ──────────────────────────────────────────────────────────

    /// Spawn order decides simultaneous catches: the first unblocked
    /// hostile overlap ends the day.
    fn evaluate_catches(&mut self) {
        let player_rect = self.player_rect();
        let seated_immunity = matches!(self.mode, Mode::Working | Mode::Slacking);

        for index in 0..self.population.enemies.len() {
            let entity = self.population.enemies[index];
            let (kind, name, hostile, rect) = {
                let mut query = self
                    .world
                    .query_one::<(&Enemy, &Behavior, &Position, &Bounds)>(entity)
                    .expect("enemy entity is live");
                let (enemy, behavior, position, bounds) =
                    query.get().expect("enemy has its components");
                (
                    enemy.kind,
                    enemy.name,
                    behavior.is_hostile(),
                    bounds.rect(position),
                )
            };
            if !hostile || !rect.intersects(&player_rect) {
                continue;
            }
            // The sprinter barges into the meeting room; nobody else does.
            if seated_immunity && kind != EnemyKind::Sprinter {
                continue;
            }

            if kind == EnemyKind::Chaser && self.player_take_egg() {
                if let Ok(behavior) = self.world.query_one_mut::<&mut Behavior>(entity) {
                    if let Behavior::Chaser(state) = behavior {
                        state.phase = ChaserPhase::Returning;
                        state.eating_left = 0.0;
                    }
                }
                self.events.push(GameEvent::EggConsumed { enemy: name });
                continue;
            }

            self.events.push(GameEvent::Caught { enemy: name });
            self.set_mode(Mode::GameOver);
            return;
        }
    }

    fn player_take_egg(&mut self) -> bool {
        self.world
            .get::<&mut Inventory>(self.population.player)
            .map(|mut inventory| inventory.take_egg())
            .unwrap_or(false)
    }

    // ── Day arc ──────────────────────────────────────────────────────────

    fn finish_day(&mut self) {
        if self.day >= workday::TOTAL_DAYS {
            self.events.push(GameEvent::Victory);
            self.set_mode(Mode::Victory);
            return;
        }
        self.events.push(GameEvent::DayCompleted { day: self.day });
        self.day += 1;
        self.clock_progress = 0.0;
        self.bandwidth = bandwidth::MAX;
        self.bandwidth_warned = false;
        generation::reset_for_new_day(
            &mut self.world,
            &self.population,
            &self.layout,
            &mut self.rng,
        );
        self.set_mode(Mode::FreeRoam);
    }

    // ── Queries ──────────────────────────────────────────────────────────

    fn player_snapshot(&self) -> PlayerSnapshot {
        let position = self
            .world
            .get::<&Position>(self.population.player)
            .expect("player has a position");
        let inventory = self
            .world
            .get::<&Inventory>(self.population.player)
            .expect("player has an inventory");
        PlayerSnapshot {
            pos: position.pos,
            room: position.room,
            snacks_depleted: inventory.snacks_depleted(),
            slacking_visible: matches!(self.mode, Mode::Slacking | Mode::Camera),
        }
    }

    fn player_in_meeting_room(&self) -> bool {
        self.player_room() == RoomId::MeetingRoom
    }

    fn player_rect(&self) -> Rect {
        let position = self
            .world
            .get::<&Position>(self.population.player)
            .expect("player has a position");
        let bounds = self
            .world
            .get::<&Bounds>(self.population.player)
            .expect("player has bounds");
        bounds.rect(&position)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    pub fn clock_progress(&self) -> f32 {
        self.clock_progress
    }

    pub fn clock_label(&self) -> String {
        workday::clock_label(self.clock_progress)
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<&Position>(self.population.player)
            .expect("player has a position")
            .pos
    }

    pub fn player_room(&self) -> RoomId {
        self.world
            .get::<&Position>(self.population.player)
            .expect("player has a position")
            .room
    }

    pub fn player_inventory(&self) -> Inventory {
        *self
            .world
            .get::<&Inventory>(self.population.player)
            .expect("player has an inventory")
    }

    /// Enemy states in spawn order.
    pub fn enemies(&self) -> Vec<EnemyView> {
        self.population
            .enemies
            .iter()
            .filter_map(|&entity| {
                let mut query = self
                    .world
                    .query_one::<(&Enemy, &Behavior, &Position)>(entity)
                    .ok()?;
                let (enemy, behavior, position) = query.get()?;
                Some(EnemyView {
                    kind: enemy.kind,
                    name: enemy.name,
                    pos: position.pos,
                    room: position.room,
                    hostile: behavior.is_hostile(),
                })
            })
            .collect()
    }

    /// Drain queued events for the presentation layer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn layout(&self) -> &OfficeLayout {
        &self.layout
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn population(&self) -> &Population {
        &self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Facing;

    const DT: f32 = 1.0 / 60.0;

    fn engine() -> GameEngine {
        GameEngine::new(7).unwrap()
    }

    fn run(engine: &mut GameEngine, intent: &Intent, seconds: f32) {
        let ticks = (seconds / DT).ceil() as usize;
        for _ in 0..ticks {
            engine.tick(intent, DT);
        }
    }

    fn teleport_player(engine: &mut GameEngine, x: f32, y: f32, room: RoomId) {
        let player = engine.population.player;
        let position = engine
            .world_mut()
            .query_one_mut::<&mut Position>(player)
            .unwrap();
        position.pos = Vec2::new(x, y);
        position.room = room;
    }

    fn action(action: ModeAction) -> Intent {
        Intent {
            action: Some(action),
            ..Intent::default()
        }
    }

    /// Park the chaser on top of the player, already hostile.
    fn force_chaser_overlap(engine: &mut GameEngine) {
        let chaser = engine.population.enemies[0];
        let player_pos = engine.player_position();
        let player_room = engine.player_room();
        let (behavior, position) = engine
            .world_mut()
            .query_one_mut::<(&mut Behavior, &mut Position)>(chaser)
            .unwrap();
        if let Behavior::Chaser(state) = behavior {
            state.phase = ChaserPhase::Chasing;
            state.activation = 0.0;
        }
        position.pos = player_pos;
        position.room = player_room;
    }

    #[test]
    fn test_fresh_engine_state() {
        let engine = engine();
        assert_eq!(engine.mode(), Mode::FreeRoam);
        assert_eq!(engine.day(), 1);
        assert_eq!(engine.bandwidth(), bandwidth::MAX);
        assert_eq!(engine.clock_label(), "9:00 AM");
        assert_eq!(engine.enemies().len(), 5);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameEngine::new(99).unwrap();
        let mut b = GameEngine::new(99).unwrap();
        let intent = Intent {
            move_dir: Vec2::new(1.0, 0.3),
            ..Intent::default()
        };
        run(&mut a, &intent, 20.0);
        run(&mut b, &intent, 20.0);
        assert_eq!(a.player_position(), b.player_position());
        for (ea, eb) in a.enemies().iter().zip(b.enemies().iter()) {
            assert_eq!(ea.pos, eb.pos, "{} diverged", ea.name);
        }
    }

    #[test]
    fn test_working_requires_meeting_room() {
        let mut engine = engine();
        engine.tick(&action(ModeAction::StartWorking), DT);
        assert_eq!(engine.mode(), Mode::FreeRoam, "not at the laptop yet");

        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartWorking), DT);
        assert_eq!(engine.mode(), Mode::Working);
    }

    #[test]
    fn test_repeated_mode_request_is_idempotent() {
        let mut engine = engine();
        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartSlacking), DT);
        assert_eq!(engine.mode(), Mode::Slacking);
        let events_before = engine.drain_events();
        assert!(events_before
            .iter()
            .any(|e| matches!(e, GameEvent::ModeChanged { to: Mode::Slacking, .. })));

        engine.tick(&action(ModeAction::StartSlacking), DT);
        assert_eq!(engine.mode(), Mode::Slacking);
        assert!(
            !engine
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::ModeChanged { .. })),
            "repeat request emits nothing"
        );
    }

    #[test]
    fn test_camera_only_from_working() {
        let mut engine = engine();
        engine.tick(&action(ModeAction::ToggleCamera), DT);
        assert_eq!(engine.mode(), Mode::FreeRoam);

        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartWorking), DT);
        engine.tick(&action(ModeAction::ToggleCamera), DT);
        assert_eq!(engine.mode(), Mode::Camera);
        engine.tick(&action(ModeAction::ToggleCamera), DT);
        assert_eq!(engine.mode(), Mode::Working);
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let mut engine = engine();
        engine.tick(&action(ModeAction::TogglePause), DT);
        assert_eq!(engine.mode(), Mode::Paused);

        let positions_before: Vec<_> = engine.enemies().iter().map(|e| e.pos).collect();
        let bandwidth_before = engine.bandwidth();
        let intent = Intent {
            move_dir: Vec2::new(1.0, 0.0),
            ..Intent::default()
        };
        run(&mut engine, &intent, 60.0);

        assert_eq!(engine.mode(), Mode::Paused);
        assert_eq!(engine.player_position(), Vec2::new(325.0, 300.0));
        assert_eq!(engine.bandwidth(), bandwidth_before);
        let positions_after: Vec<_> = engine.enemies().iter().map(|e| e.pos).collect();
        assert_eq!(positions_before, positions_after);

        engine.tick(&action(ModeAction::TogglePause), DT);
        assert_eq!(engine.mode(), Mode::FreeRoam);
    }

    #[test]
    fn test_clock_frozen_outside_the_laptop() {
        let mut engine = engine();
        run(&mut engine, &Intent::default(), 10.0);
        assert_eq!(engine.clock_progress(), 0.0);

        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartWorking), DT);
        run(&mut engine, &Intent::default(), 10.0);
        assert!(engine.clock_progress() > 0.0);
    }

    #[test]
    fn test_bandwidth_drains_working_and_refills_slacking() {
        let mut engine = engine();
        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartWorking), DT);
        run(&mut engine, &Intent::default(), 10.0);
        let after_work = engine.bandwidth();
        assert!(
            (after_work - (bandwidth::MAX - 10.0 * bandwidth::WORKING_DRAIN)).abs() < 1.0,
            "ten seconds of work costs ~50, got {}",
            after_work
        );

        engine.tick(&action(ModeAction::Cancel), DT);
        engine.tick(&action(ModeAction::StartSlacking), DT);
        run(&mut engine, &Intent::default(), 5.0);
        assert!(engine.bandwidth() > after_work);
    }

    #[test]
    fn test_bandwidth_exhaustion_while_working_ends_the_game() {
        let mut engine = engine();
        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartWorking), DT);

        // 100 bandwidth at 5/s is 20s; the day (480s) is nowhere near done
        run(&mut engine, &Intent::default(), 25.0);
        assert_eq!(engine.mode(), Mode::GameOver);
        let events = engine.drain_events();
        assert!(events.contains(&GameEvent::BandwidthWarning));
        assert!(events.contains(&GameEvent::BandwidthExhausted));
    }

    #[test]
    fn test_hostile_overlap_is_a_catch() {
        let mut engine = engine();
        force_chaser_overlap(&mut engine);
        engine.tick(&Intent::default(), DT);
        assert_eq!(engine.mode(), Mode::GameOver);
        assert!(engine
            .drain_events()
            .contains(&GameEvent::Caught { enemy: "Bumbis" }));
    }

    #[test]
    fn test_egg_buys_off_the_chaser() {
        let mut engine = engine();
        {
            let player = engine.population.player;
            let inventory = engine
                .world_mut()
                .query_one_mut::<&mut Inventory>(player)
                .unwrap();
            inventory.give_egg();
        }
        force_chaser_overlap(&mut engine);
        engine.tick(&Intent::default(), DT);

        assert_eq!(engine.mode(), Mode::FreeRoam, "the egg absorbed the catch");
        assert!(!engine.player_inventory().has_egg());
        assert!(engine
            .drain_events()
            .contains(&GameEvent::EggConsumed { enemy: "Bumbis" }));

        let chaser = engine.population.enemies[0];
        match &*engine.world().get::<&Behavior>(chaser).unwrap() {
            Behavior::Chaser(state) => assert_eq!(state.phase, ChaserPhase::Returning),
            _ => unreachable!(),
        };
    }

    #[test]
    fn test_seated_player_is_immune_to_the_chaser() {
        let mut engine = engine();
        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartWorking), DT);
        force_chaser_overlap(&mut engine);
        engine.tick(&Intent::default(), DT);
        assert_eq!(engine.mode(), Mode::Working, "seated modes block the chaser");
    }

    #[test]
    fn test_sprinter_ignores_seated_immunity() {
        let mut engine = engine();
        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartWorking), DT);

        // Mid-sprint from across the room: the overlap happens while the
        // sprint is still live, before the arrive radius ends it.
        let sprinter = engine.population.enemies[3];
        let player_pos = engine.player_position();
        {
            let (behavior, position) = engine
                .world_mut()
                .query_one_mut::<(&mut Behavior, &mut Position)>(sprinter)
                .unwrap();
            if let Behavior::Sprinter(state) = behavior {
                state.phase = crate::components::SprinterPhase::Sprinting;
                state.activation = 0.0;
                state.sprint_left = 3.0;
                state.target = Some(player_pos);
            }
            position.pos = player_pos + Vec2::new(100.0, 0.0);
            position.room = RoomId::MeetingRoom;
        }
        run(&mut engine, &Intent::default(), 1.0);
        assert_eq!(engine.mode(), Mode::GameOver);
        assert!(engine
            .drain_events()
            .contains(&GameEvent::Caught { enemy: "Runnit" }));
    }

    #[test]
    fn test_day_completes_and_resets() {
        let mut engine = engine();
        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartSlacking), DT);
        engine.clock_progress = 1.0;
        engine.tick(&Intent::default(), DT);

        assert_eq!(engine.day(), 2);
        assert_eq!(engine.mode(), Mode::FreeRoam);
        assert_eq!(engine.clock_progress(), 0.0);
        assert_eq!(engine.bandwidth(), bandwidth::MAX);
        assert_eq!(engine.player_room(), RoomId::Office);
        for view in engine.enemies() {
            assert!(!view.hostile, "{} resets to dormant", view.name);
        }
        assert!(engine
            .drain_events()
            .contains(&GameEvent::DayCompleted { day: 1 }));
    }

    #[test]
    fn test_final_day_completion_is_victory() {
        let mut engine = engine();
        engine.day = workday::TOTAL_DAYS;
        teleport_player(&mut engine, 825.0, 620.0, RoomId::MeetingRoom);
        engine.tick(&action(ModeAction::StartSlacking), DT);
        engine.clock_progress = 1.0;
        engine.tick(&Intent::default(), DT);

        assert_eq!(engine.mode(), Mode::Victory);
        assert!(engine.drain_events().contains(&GameEvent::Victory));

        // Terminal: further ticks change nothing
        let pos = engine.player_position();
        run(&mut engine, &Intent {
            move_dir: Vec2::new(1.0, 0.0),
            ..Intent::default()
        }, 5.0);
        assert_eq!(engine.mode(), Mode::Victory);
        assert_eq!(engine.player_position(), pos);
    }

    #[test]
    fn test_laptop_interact_starts_working() {
        let mut engine = engine();
        // Standing on the laptop rect in the Meeting Room
        teleport_player(&mut engine, 810.0, 580.0, RoomId::MeetingRoom);
        let intent = Intent {
            interact: true,
            ..Intent::default()
        };
        engine.tick(&intent, DT);
        assert_eq!(engine.mode(), Mode::Working);
    }

    #[test]
    fn test_facing_follows_movement() {
        let mut engine = engine();
        let intent = Intent {
            move_dir: Vec2::new(-1.0, 0.0),
            ..Intent::default()
        };
        engine.tick(&intent, DT);
        let player = engine.population.player;
        let facing = engine.world().get::<&Facing>(player).unwrap();
        assert_eq!(facing.0, crate::components::Direction::Left);
    }
}
