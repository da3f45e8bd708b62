//! Player movement, door transit, and interactions.

use crate::components::{Bounds, Direction, Facing, Inventory, Position};
use crunchtime_logic::constants::player::SPEED;
use crunchtime_logic::geometry::{Rect, Vec2};
use crunchtime_logic::layout::{InteractableKind, OfficeLayout};
use hecs::{Entity, World};

/// Result of an interact action, interpreted by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractOutcome {
    Feedback(String),
    GotEgg,
    AlreadyHaveEgg,
    SnackRestocked { count: u8 },
    /// The Meeting Room laptop: sit down and work
    OpenLaptop,
}

pub(crate) fn collides_with_walls(rect: &Rect, walls: &[Rect]) -> bool {
    walls.iter().any(|w| rect.intersects(w))
}

/// Crossing a door transit rect moves the entity into the adjoining room.
/// The flag flips only once the entity's center is over the line; grazing
/// the transit rect and backing out leaves the room unchanged.
pub(crate) fn apply_door_transit(position: &mut Position, rect: &Rect, layout: &OfficeLayout) {
    let room = layout.room(position.room);
    for &(to, door) in &room.doors {
        if rect.intersects(&door) {
            if layout.room(to).bounds.contains_point(&position.pos) {
                position.room = to;
            }
            break;
        }
    }
}

/// Move the player by `move_dir` (unnormalized input vector) with
/// axis-separated wall collision: a blocked axis is reverted on its own,
/// so the player slides along walls instead of sticking to them.
pub fn move_player_system(
    world: &mut World,
    player: Entity,
    layout: &OfficeLayout,
    move_dir: Vec2,
    dt: f32,
) {
    let dir = move_dir.normalize();
    if dir == Vec2::ZERO {
        return;
    }

    let Ok((position, bounds, facing)) =
        world.query_one_mut::<(&mut Position, &Bounds, &mut Facing)>(player)
    else {
        return;
    };

    let walls = &layout.room(position.room).walls;
    let step = dir * (SPEED * dt);

    let x_candidate = Vec2::new(position.pos.x + step.x, position.pos.y);
    if !collides_with_walls(&Rect::centered(x_candidate.x, x_candidate.y, bounds.w, bounds.h), walls)
    {
        position.pos.x = x_candidate.x;
    }
    let y_candidate = Vec2::new(position.pos.x, position.pos.y + step.y);
    if !collides_with_walls(&Rect::centered(y_candidate.x, y_candidate.y, bounds.w, bounds.h), walls)
    {
        position.pos.y = y_candidate.y;
    }

    if let Some(d) = Direction::from_vector(&dir) {
        facing.0 = d;
    }

    let rect = bounds.rect(position);
    apply_door_transit(position, &rect, layout);
}

/// Apply the interactable the player overlaps, if any. Effects are pure
/// over the inventory; mode effects are returned for the engine.
pub fn interact_system(
    world: &mut World,
    player: Entity,
    layout: &OfficeLayout,
) -> Option<InteractOutcome> {
    let Ok((position, bounds, inventory)) =
        world.query_one_mut::<(&Position, &Bounds, &mut Inventory)>(player)
    else {
        return None;
    };

    let rect = bounds.rect(position);
    let room = layout.room(position.room);
    let item = room.interactables.iter().find(|i| rect.intersects(&i.rect))?;

    match item.kind {
        InteractableKind::Refrigerator => {
            if inventory.give_egg() {
                Some(InteractOutcome::GotEgg)
            } else {
                Some(InteractOutcome::AlreadyHaveEgg)
            }
        }
        InteractableKind::Cabinet => {
            let count = inventory.add_snack();
            Some(InteractOutcome::SnackRestocked { count })
        }
        InteractableKind::Laptop => Some(InteractOutcome::OpenLaptop),
        InteractableKind::CameraPanel => Some(InteractOutcome::Feedback(
            "The camera feed is on your laptop.".to_string(),
        )),
        InteractableKind::Desk => {
            let label = item.label.as_deref().unwrap_or("Someone");
            Some(InteractOutcome::Feedback(format!("{}'s desk", label)))
        }
    }
}
