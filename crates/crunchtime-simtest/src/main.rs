//! Crunchtime Headless Simulation Harness
//!
//! Validates the game simulation without rendering or input handling.
//! Runs entirely in-process: no window, no audio, no frame pacing.
//!
//! Usage:
//!   cargo run -p crunchtime-simtest
//!   cargo run -p crunchtime-simtest -- --verbose

use crunchtime_core::components::{Behavior, ChaserPhase, Inventory, Position};
use crunchtime_core::engine::{GameEngine, Intent, Mode, ModeAction};
use crunchtime_core::events::GameEvent;
use crunchtime_logic::geometry::Vec2;
use crunchtime_logic::layout::{OfficeLayout, RoomId};
use crunchtime_logic::navgraph::NavGraph;
use crunchtime_logic::steering;
use crunchtime_logic::workday;

const DT: f32 = 1.0 / 60.0;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Crunchtime Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Layout validation
    results.extend(validate_layout(verbose));

    // 2. Navigation graph sweep
    results.extend(validate_navgraph(verbose));

    // 3. Steering heuristic sweep
    results.extend(validate_steering(verbose));

    // 4. Workday clock math
    results.extend(validate_workday(verbose));

    // 5. Engine scenarios
    results.extend(validate_engine_scenarios(verbose));

    // 6. Serialization round trip
    results.extend(validate_serialization(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn result(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

// ── 1. Layout ───────────────────────────────────────────────────────────

fn validate_layout(_verbose: bool) -> Vec<TestResult> {
    println!("--- Office Layout ---");
    let mut results = Vec::new();

    let layout = match OfficeLayout::standard() {
        Ok(l) => l,
        Err(e) => {
            results.push(result("layout_builds", false, format!("{}", e)));
            return results;
        }
    };
    results.push(result(
        "layout_builds",
        true,
        format!("{} rooms", layout.rooms().len()),
    ));

    // Five rooms, four door edges
    let edges = layout.door_edges();
    results.push(result(
        "door_edge_count",
        edges.len() == 4,
        format!("{} unique door edges", edges.len()),
    ));

    // No doorway overlaps a wall segment of its own room
    let mut overlaps = 0;
    for room in layout.rooms() {
        for doorway in &room.doorways {
            overlaps += room.walls.iter().filter(|w| doorway.intersects(w)).count();
        }
    }
    results.push(result(
        "doorways_clear_of_walls",
        overlaps == 0,
        format!("{} doorway/wall overlaps", overlaps),
    ));

    // Door transit rects are passable from both sides
    let mut blocked = 0;
    for (a, b, rect) in &edges {
        for id in [*a, *b] {
            blocked += layout
                .room(id)
                .walls
                .iter()
                .filter(|w| rect.intersects(w))
                .count();
        }
    }
    results.push(result(
        "doors_passable",
        blocked == 0,
        format!("{} door rects blocked by walls", blocked),
    ));

    // Spawns and interactables land inside their rooms
    let mut outside = 0;
    for room in layout.rooms() {
        for item in &room.interactables {
            if !room.bounds.contains_point(&item.rect.center()) {
                outside += 1;
            }
        }
        for desk in &room.desks {
            if !room.bounds.contains_point(desk) {
                outside += 1;
            }
        }
    }
    results.push(result(
        "furniture_inside_rooms",
        outside == 0,
        format!("{} placements outside their room", outside),
    ));

    results
}

// ── 2. Navigation graph ─────────────────────────────────────────────────

fn validate_navgraph(verbose: bool) -> Vec<TestResult> {
    println!("--- Navigation Graph ---");
    let mut results = Vec::new();

    let layout = OfficeLayout::standard().expect("layout validated above");
    let mut nav = NavGraph::from_door_edges(&layout.door_edges());

    // Every ordered room pair has a path
    let mut missing = Vec::new();
    let mut longest = 0;
    for &from in &RoomId::ALL {
        for &to in &RoomId::ALL {
            match nav.find_path(from, to) {
                Some(path) => longest = longest.max(path.len()),
                None => missing.push((from, to)),
            }
        }
    }
    results.push(result(
        "all_pairs_reachable",
        missing.is_empty(),
        if missing.is_empty() {
            format!("25 pairs, longest path {} hops", longest)
        } else {
            format!("{} unreachable pairs", missing.len())
        },
    ));

    // The hallway is the hub: widest fan-out, and the span of the floor
    // (break room to classroom) crosses it
    let hub = nav.neighbors(RoomId::Hallway).len();
    results.push(result(
        "hallway_is_hub",
        hub == 3,
        format!("hallway has {} neighbors", hub),
    ));

    let span = nav
        .find_path(RoomId::BreakRoom, RoomId::Classroom)
        .map(|p| p.len())
        .unwrap_or(0);
    results.push(result(
        "floor_span_three_hops",
        span == 3,
        format!("break room → classroom in {} hops", span),
    ));

    if verbose {
        if let Some(path) = nav.find_path(RoomId::MeetingRoom, RoomId::BreakRoom) {
            let rooms: Vec<_> = path.iter().map(|h| h.room.name()).collect();
            println!("    meeting room → break room via {}", rooms.join(" → "));
        }
    }

    results
}

// ── 3. Steering ─────────────────────────────────────────────────────────

fn validate_steering(_verbose: bool) -> Vec<TestResult> {
    println!("--- Steering Heuristic ---");
    let mut results = Vec::new();

    let layout = OfficeLayout::standard().expect("layout validated above");
    let office = layout.room(RoomId::Office);

    // Open floor: direct unit vector
    let dir = steering::navigate(
        Vec2::new(200.0, 300.0),
        Vec2::new(500.0, 300.0),
        &office.walls,
        &office.bounds,
    );
    results.push(result(
        "open_floor_direct",
        (dir.length() - 1.0).abs() < 1e-3 && dir.x > 0.99,
        format!("dir = ({:.3}, {:.3})", dir.x, dir.y),
    ));

    // Arrived: zero vector
    let dir = steering::navigate(
        Vec2::new(300.0, 300.0),
        Vec2::new(302.0, 300.0),
        &office.walls,
        &office.bounds,
    );
    results.push(result(
        "arrive_radius_stalls",
        dir == Vec2::ZERO,
        format!("dir = ({:.3}, {:.3})", dir.x, dir.y),
    ));

    // A walk across every room never produces a NaN or oversized vector
    let mut bad = 0;
    for room in layout.rooms() {
        let target = room.bounds.center();
        let mut probe = Vec2::new(room.bounds.x + 60.0, room.bounds.y + 60.0);
        for _ in 0..600 {
            let dir = steering::navigate(probe, target, &room.walls, &room.bounds);
            if !dir.x.is_finite() || !dir.y.is_finite() || dir.length() > 1.001 {
                bad += 1;
                break;
            }
            probe = probe + dir * (60.0 * DT);
        }
        if probe.distance(&target) > steering::ARRIVE_RADIUS + 1.0 {
            bad += 1;
        }
    }
    results.push(result(
        "room_walks_converge",
        bad == 0,
        format!("{} rooms failed to converge cleanly", bad),
    ));

    results
}

// ── 4. Workday ──────────────────────────────────────────────────────────

fn validate_workday(_verbose: bool) -> Vec<TestResult> {
    println!("--- Workday Clock ---");
    let mut results = Vec::new();

    results.push(result(
        "clock_endpoints",
        workday::clock_label(0.0) == "9:00 AM" && workday::clock_label(1.0) == "5:00 PM",
        format!(
            "{} → {}",
            workday::clock_label(0.0),
            workday::clock_label(1.0)
        ),
    ));

    let mut progress = 0.0;
    let mut ticks = 0u32;
    while !workday::is_day_complete(progress) {
        progress = workday::advance(progress, DT);
        ticks += 1;
    }
    let seconds = ticks as f32 * DT;
    results.push(result(
        "day_length",
        (seconds - workday::DAY_LENGTH_SECONDS).abs() < 1.0,
        format!("day completed in {:.1}s of work", seconds),
    ));

    results
}

// ── 5. Engine scenarios ─────────────────────────────────────────────────

fn run(engine: &mut GameEngine, intent: &Intent, seconds: f32) {
    let ticks = (seconds / DT).ceil() as usize;
    for _ in 0..ticks {
        engine.tick(intent, DT);
    }
}

fn action(a: ModeAction) -> Intent {
    Intent {
        action: Some(a),
        ..Intent::default()
    }
}

fn seat_player(engine: &mut GameEngine) {
    let player = engine.population().player;
    let position = engine
        .world_mut()
        .query_one_mut::<&mut Position>(player)
        .expect("player is live");
    position.pos = Vec2::new(825.0, 620.0);
    position.room = RoomId::MeetingRoom;
}

fn validate_engine_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Engine Scenarios ---");
    let mut results = Vec::new();

    // Catch: a hostile chaser on a player with no egg ends the day
    {
        let mut engine = GameEngine::new(1).expect("layout builds");
        let chaser = engine.population().enemies[0];
        let player_pos = engine.player_position();
        {
            let (behavior, position) = engine
                .world_mut()
                .query_one_mut::<(&mut Behavior, &mut Position)>(chaser)
                .expect("chaser is live");
            if let Behavior::Chaser(state) = behavior {
                state.phase = ChaserPhase::Chasing;
            }
            position.pos = player_pos;
            position.room = RoomId::Office;
        }
        engine.tick(&Intent::default(), DT);
        let events = engine.drain_events();
        let caught = events
            .iter()
            .any(|e| matches!(e, GameEvent::Caught { .. }));
        results.push(result(
            "catch_ends_day",
            engine.mode() == Mode::GameOver && caught,
            format!("mode = {:?}", engine.mode()),
        ));
    }

    // Egg: the same overlap with an egg in hand is absorbed
    {
        let mut engine = GameEngine::new(1).expect("layout builds");
        let player = engine.population().player;
        engine
            .world_mut()
            .query_one_mut::<&mut Inventory>(player)
            .expect("player is live")
            .give_egg();
        let chaser = engine.population().enemies[0];
        let player_pos = engine.player_position();
        {
            let (behavior, position) = engine
                .world_mut()
                .query_one_mut::<(&mut Behavior, &mut Position)>(chaser)
                .expect("chaser is live");
            if let Behavior::Chaser(state) = behavior {
                state.phase = ChaserPhase::Chasing;
            }
            position.pos = player_pos;
            position.room = RoomId::Office;
        }
        engine.tick(&Intent::default(), DT);
        let events = engine.drain_events();
        let consumed = events
            .iter()
            .any(|e| matches!(e, GameEvent::EggConsumed { .. }));
        results.push(result(
            "egg_absorbs_catch",
            engine.mode() == Mode::FreeRoam && consumed && !engine.player_inventory().has_egg(),
            format!("mode = {:?}, egg = {}", engine.mode(), engine.player_inventory().has_egg()),
        ));
    }

    // Working drains bandwidth to exhaustion without clock completion
    {
        let mut engine = GameEngine::new(2).expect("layout builds");
        seat_player(&mut engine);
        engine.tick(&action(ModeAction::StartWorking), DT);
        run(&mut engine, &Intent::default(), 25.0);
        results.push(result(
            "bandwidth_exhaustion",
            engine.mode() == Mode::GameOver && engine.bandwidth() <= 0.0,
            format!(
                "mode = {:?}, bandwidth = {:.1}, clock = {}",
                engine.mode(),
                engine.bandwidth(),
                engine.clock_label()
            ),
        ));
    }

    // A full day of alternating work and slack survives to day 2. The
    // sprinter is deferred: it punishes an undodged sprint even while
    // seated, and this scenario never stands up to dodge.
    {
        let mut engine = GameEngine::new(3).expect("layout builds");
        let sprinter = engine.population().enemies[3];
        if let Ok(Behavior::Sprinter(state)) = engine
            .world_mut()
            .query_one_mut::<&mut Behavior>(sprinter)
        {
            state.activation = 1e9;
        }
        seat_player(&mut engine);
        engine.tick(&action(ModeAction::StartWorking), DT);
        let mut guard = 0;
        while engine.day() == 1 && !engine.mode().is_terminal() && guard < 100_000 {
            // Swap to slacking below 25 bandwidth, back to work above 95
            let intent = match engine.mode() {
                Mode::Working if engine.bandwidth() < 25.0 => action(ModeAction::StartSlacking),
                Mode::Slacking if engine.bandwidth() > 95.0 => action(ModeAction::StartWorking),
                Mode::FreeRoam => action(ModeAction::StartWorking),
                _ => Intent::default(),
            };
            engine.tick(&intent, DT);
            guard += 1;
        }
        let survived = engine.day() == 2 && engine.mode() == Mode::FreeRoam;
        results.push(result(
            "full_day_survival",
            survived,
            format!(
                "day = {}, mode = {:?}, after {} ticks",
                engine.day(),
                engine.mode(),
                guard
            ),
        ));
        if verbose {
            for event in engine.drain_events() {
                println!("    event: {:?}", event);
            }
        }
    }

    // Determinism: two engines with one seed agree tick for tick
    {
        let mut a = GameEngine::new(4).expect("layout builds");
        let mut b = GameEngine::new(4).expect("layout builds");
        let intent = Intent {
            move_dir: Vec2::new(0.6, -1.0),
            ..Intent::default()
        };
        run(&mut a, &intent, 30.0);
        run(&mut b, &intent, 30.0);
        let same_player = a.player_position() == b.player_position();
        let same_enemies = a
            .enemies()
            .iter()
            .zip(b.enemies().iter())
            .all(|(x, y)| x.pos == y.pos && x.room == y.room);
        results.push(result(
            "seeded_determinism",
            same_player && same_enemies,
            format!("player match = {}, enemies match = {}", same_player, same_enemies),
        ));
    }

    results
}

// ── 6. Serialization ────────────────────────────────────────────────────

fn validate_serialization(verbose: bool) -> Vec<TestResult> {
    println!("--- Serialization ---");
    let mut results = Vec::new();

    let layout = OfficeLayout::standard().expect("layout validated above");
    match serde_json::to_string(&layout) {
        Ok(json) => {
            let restored: Result<OfficeLayout, _> = serde_json::from_str(&json);
            let ok = restored
                .as_ref()
                .map(|l| l.rooms().len() == layout.rooms().len())
                .unwrap_or(false);
            results.push(result(
                "layout_json_round_trip",
                ok,
                format!("{} bytes of layout JSON", json.len()),
            ));
            if verbose {
                println!("    layout JSON starts: {}...", &json[..80.min(json.len())]);
            }
        }
        Err(e) => results.push(result("layout_json_round_trip", false, format!("{}", e))),
    }

    // Events serialize for replay logs
    let events = vec![
        GameEvent::ModeChanged {
            from: Mode::FreeRoam,
            to: Mode::Working,
        },
        GameEvent::Caught { enemy: "Bumbis" },
        GameEvent::DayCompleted { day: 3 },
    ];
    match serde_json::to_string(&events) {
        Ok(json) => results.push(result(
            "events_serialize",
            true,
            format!("{} bytes of event JSON", json.len()),
        )),
        Err(e) => results.push(result("events_serialize", false, format!("{}", e))),
    }

    results
}
