//! Entity spawning and per-day resets.
//!
//! Spawn points are derived from the room rectangles so the population
//! stays consistent with the layout if a room ever moves.

use crate::components::{Behavior, Bounds, Enemy, EnemyKind, Facing, Inventory, Player, Position};
use crunchtime_logic::constants::{enemy, player};
use crunchtime_logic::geometry::Vec2;
use crunchtime_logic::layout::{InteractableKind, OfficeLayout, RoomId};
use hecs::{Entity, World};
use rand::Rng;

/// Handles to the spawned cast. Enemy order is the spawn order, which
/// fixes the catch tie-break when several enemies land on the same tick.
pub struct Population {
    pub player: Entity,
    pub enemies: Vec<Entity>,
}

fn offset_from(layout: &OfficeLayout, room: RoomId, dx: f32, dy: f32) -> Vec2 {
    let bounds = layout.room(room).bounds;
    Vec2::new(bounds.x + dx, bounds.y + dy)
}

fn spawn_enemy(world: &mut World, enemy_record: Enemy, behavior: Behavior) -> Entity {
    let position = Position {
        pos: enemy_record.home,
        room: enemy_record.home_room,
    };
    world.spawn((
        enemy_record,
        behavior,
        position,
        Bounds::new(enemy::WIDTH, enemy::HEIGHT),
        Facing::default(),
    ))
}

/// Spawn the player and the five enemies at their fixed stations.
pub fn spawn_population(world: &mut World, layout: &OfficeLayout, rng: &mut impl Rng) -> Population {
    let player_spawn = layout.room(RoomId::Office).bounds.center();
    let player = world.spawn((
        Player,
        Position {
            pos: player_spawn,
            room: RoomId::Office,
        },
        Bounds::new(player::WIDTH, player::HEIGHT),
        Facing::default(),
        Inventory::starting(),
    ));

    let chaser_home = offset_from(layout, RoomId::Classroom, 200.0, 200.0);
    let patrol_home = offset_from(layout, RoomId::Office, 150.0, 150.0);
    let conditional_home = offset_from(layout, RoomId::Hallway, 300.0, 150.0);
    let sprinter_home = offset_from(layout, RoomId::MeetingRoom, 250.0, 100.0);
    let thief_home = offset_from(layout, RoomId::Classroom, 100.0, 300.0);

    let enemies = vec![
        spawn_enemy(
            world,
            Enemy {
                kind: EnemyKind::Chaser,
                name: "Bumbis",
                home: chaser_home,
                home_room: RoomId::Classroom,
                desk: chaser_home,
            },
            Behavior::chaser(),
        ),
        spawn_enemy(
            world,
            Enemy {
                kind: EnemyKind::Patrol,
                name: "Jeromathy",
                home: patrol_home,
                home_room: RoomId::Office,
                desk: layout.room(RoomId::Office).desks[0],
            },
            Behavior::patrol(),
        ),
        spawn_enemy(
            world,
            Enemy {
                kind: EnemyKind::Conditional,
                name: "Angellica",
                home: conditional_home,
                home_room: RoomId::Hallway,
                desk: layout.room(RoomId::Hallway).desks[0],
            },
            Behavior::conditional(),
        ),
        spawn_enemy(
            world,
            Enemy {
                kind: EnemyKind::Sprinter,
                name: "Runnit",
                home: sprinter_home,
                home_room: RoomId::MeetingRoom,
                desk: sprinter_home,
            },
            Behavior::sprinter(),
        ),
        spawn_enemy(
            world,
            Enemy {
                kind: EnemyKind::Thief,
                name: "Greg",
                home: thief_home,
                home_room: RoomId::Classroom,
                desk: thief_home,
            },
            Behavior::thief(rng),
        ),
    ];

    Population { player, enemies }
}

/// Where the thief goes to steal: the break room refrigerator.
pub fn snack_stash(layout: &OfficeLayout) -> Vec2 {
    layout
        .room(RoomId::BreakRoom)
        .interactables
        .iter()
        .find(|i| i.kind == InteractableKind::Refrigerator)
        .map(|i| i.rect.center())
        .unwrap_or_else(|| layout.room(RoomId::BreakRoom).bounds.center())
}

/// Put everyone back at their stations for the next day: positions,
/// behaviors (fresh activation delays), and the player's inventory.
pub fn reset_for_new_day(
    world: &mut World,
    population: &Population,
    layout: &OfficeLayout,
    rng: &mut impl Rng,
) {
    if let Ok((position, facing, inventory)) =
        world.query_one_mut::<(&mut Position, &mut Facing, &mut Inventory)>(population.player)
    {
        position.pos = layout.room(RoomId::Office).bounds.center();
        position.room = RoomId::Office;
        *facing = Facing::default();
        *inventory = Inventory::starting();
    }

    for &entity in &population.enemies {
        if let Ok((enemy, behavior, position, facing)) =
            world.query_one_mut::<(&Enemy, &mut Behavior, &mut Position, &mut Facing)>(entity)
        {
            position.pos = enemy.home;
            position.room = enemy.home_room;
            *facing = Facing::default();
            behavior.reset(rng);
        }
    }
}
