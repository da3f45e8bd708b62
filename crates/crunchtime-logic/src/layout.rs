//! The office floor plan: five rooms, their walls, doorways, door transit
//! rects, desk anchors, and static interactables.
//!
//! [`OfficeLayout::standard`] builds the fixed map and validates it:
//! every doorway must fit its side and every room must be reachable from
//! every other room. Either failure is fatal at construction time.

use crate::geometry::{Rect, Vec2};
use crate::walls::{solid_wall, wall_with_doorway, Side};
pub use crate::walls::LayoutError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The five rooms of the office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomId {
    BreakRoom,
    Office,
    Hallway,
    Classroom,
    MeetingRoom,
}

impl RoomId {
    pub const ALL: [RoomId; 5] = [
        RoomId::BreakRoom,
        RoomId::Office,
        RoomId::Hallway,
        RoomId::Classroom,
        RoomId::MeetingRoom,
    ];

    pub fn index(&self) -> usize {
        match self {
            RoomId::BreakRoom => 0,
            RoomId::Office => 1,
            RoomId::Hallway => 2,
            RoomId::Classroom => 3,
            RoomId::MeetingRoom => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoomId::BreakRoom => "Break Room",
            RoomId::Office => "Office",
            RoomId::Hallway => "Hallway",
            RoomId::Classroom => "Classroom",
            RoomId::MeetingRoom => "Meeting Room",
        }
    }
}

/// Static objects the player can interact with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractableKind {
    /// Holds the egg (the Chaser's counter-resource)
    Refrigerator,
    /// Restocks one snack per use
    Cabinet,
    /// Work surface in the Meeting Room
    Laptop,
    /// Security camera feed, usable while Working
    CameraPanel,
    /// Labelled desk, feedback only
    Desk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interactable {
    pub kind: InteractableKind,
    pub rect: Rect,
    pub label: Option<String>,
}

/// One room: bounds, wall segments, doorway gaps, door transit rects,
/// desk anchor points, interactables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSpec {
    pub id: RoomId,
    pub bounds: Rect,
    pub walls: Vec<Rect>,
    pub doorways: Vec<Rect>,
    /// Overlapping one of these rects moves an entity into the named room
    pub doors: Vec<(RoomId, Rect)>,
    pub desks: Vec<Vec2>,
    pub interactables: Vec<Interactable>,
}

impl RoomSpec {
    fn new(id: RoomId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            walls: Vec::new(),
            doorways: Vec::new(),
            doors: Vec::new(),
            desks: Vec::new(),
            interactables: Vec::new(),
        }
    }

    fn add_solid(&mut self, side: Side) {
        self.walls.push(solid_wall(&self.bounds, side));
    }

    fn add_doorway(&mut self, side: Side, gap_start: f32, gap_end: f32) -> Result<(), LayoutError> {
        let wall_side = wall_with_doorway(&self.bounds, side, gap_start, gap_end)?;
        self.walls.extend(wall_side.segments);
        if let Some(doorway) = wall_side.doorway {
            self.doorways.push(doorway);
        }
        Ok(())
    }
}

/// The validated office map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeLayout {
    rooms: Vec<RoomSpec>,
}

impl OfficeLayout {
    /// Build the standard five-room office and validate it.
    pub fn standard() -> Result<Self, LayoutError> {
        let mut break_room = RoomSpec::new(RoomId::BreakRoom, Rect::new(-100.0, 100.0, 200.0, 400.0));
        let mut office = RoomSpec::new(RoomId::Office, Rect::new(100.0, 100.0, 450.0, 400.0));
        let mut hallway = RoomSpec::new(RoomId::Hallway, Rect::new(550.0, 100.0, 550.0, 400.0));
        let mut classroom = RoomSpec::new(RoomId::Classroom, Rect::new(1100.0, 100.0, 450.0, 400.0));
        let mut meeting = RoomSpec::new(RoomId::MeetingRoom, Rect::new(550.0, 500.0, 550.0, 250.0));

        // Break Room: doorway on the right to the Office
        break_room.add_solid(Side::Top);
        break_room.add_solid(Side::Left);
        break_room.add_solid(Side::Bottom);
        break_room.add_doorway(Side::Right, 150.0, 250.0)?;

        // Office: doorways left to Break Room, right to Hallway
        office.add_solid(Side::Top);
        office.add_solid(Side::Bottom);
        office.add_doorway(Side::Left, 150.0, 250.0)?;
        office.add_doorway(Side::Right, 150.0, 250.0)?;

        // Hallway: doorways left to Office, right to Classroom, bottom to Meeting Room
        hallway.add_solid(Side::Top);
        hallway.add_doorway(Side::Left, 150.0, 250.0)?;
        hallway.add_doorway(Side::Right, 150.0, 250.0)?;
        hallway.add_doorway(Side::Bottom, 200.0, 350.0)?;

        // Classroom: doorway on the left to the Hallway
        classroom.add_solid(Side::Top);
        classroom.add_solid(Side::Right);
        classroom.add_solid(Side::Bottom);
        classroom.add_doorway(Side::Left, 150.0, 250.0)?;

        // Meeting Room: doorway on top to the Hallway
        meeting.add_solid(Side::Left);
        meeting.add_solid(Side::Right);
        meeting.add_solid(Side::Bottom);
        meeting.add_doorway(Side::Top, 200.0, 350.0)?;

        // Door transit rects (shared between both rooms of each pair)
        let door_break_office = Rect::new(95.0, 250.0, 10.0, 100.0);
        let door_office_hall = Rect::new(545.0, 250.0, 10.0, 100.0);
        let door_hall_classroom = Rect::new(1095.0, 250.0, 10.0, 100.0);
        let door_hall_meeting = Rect::new(750.0, 495.0, 150.0, 10.0);

        break_room.doors.push((RoomId::Office, door_break_office));
        office.doors.push((RoomId::BreakRoom, door_break_office));
        office.doors.push((RoomId::Hallway, door_office_hall));
        hallway.doors.push((RoomId::Office, door_office_hall));
        hallway.doors.push((RoomId::Classroom, door_hall_classroom));
        hallway.doors.push((RoomId::MeetingRoom, door_hall_meeting));
        classroom.doors.push((RoomId::Hallway, door_hall_classroom));
        meeting.doors.push((RoomId::Hallway, door_hall_meeting));

        // Break Room: refrigerator and snack cabinet along the left wall,
        // clear of the doorway at y 250-350
        break_room.interactables.push(Interactable {
            kind: InteractableKind::Refrigerator,
            rect: Rect::new(-60.0, 160.0, 40.0, 60.0),
            label: None,
        });
        break_room.interactables.push(Interactable {
            kind: InteractableKind::Cabinet,
            rect: Rect::new(-60.0, 380.0, 40.0, 40.0),
            label: None,
        });

        // Labelled desks
        office.desks.push(Vec2::new(220.0, 210.0));
        office.interactables.push(Interactable {
            kind: InteractableKind::Desk,
            rect: Rect::centered(220.0, 210.0, 50.0, 30.0),
            label: Some("Jeromathy".to_string()),
        });
        hallway.desks.push(Vec2::new(840.0, 230.0));
        hallway.interactables.push(Interactable {
            kind: InteractableKind::Desk,
            rect: Rect::centered(840.0, 230.0, 50.0, 30.0),
            label: Some("Angellica".to_string()),
        });

        // Meeting Room: the player's laptop and the camera panel
        meeting.interactables.push(Interactable {
            kind: InteractableKind::Laptop,
            rect: Rect::new(780.0, 560.0, 60.0, 40.0),
            label: None,
        });
        meeting.interactables.push(Interactable {
            kind: InteractableKind::CameraPanel,
            rect: Rect::new(870.0, 560.0, 40.0, 40.0),
            label: None,
        });

        let layout = Self {
            rooms: vec![break_room, office, hallway, classroom, meeting],
        };
        layout.validate_connectivity()?;
        Ok(layout)
    }

    pub fn room(&self, id: RoomId) -> &RoomSpec {
        &self.rooms[id.index()]
    }

    pub fn rooms(&self) -> &[RoomSpec] {
        &self.rooms
    }

    /// Unique door edges (each pair listed once) for graph construction.
    pub fn door_edges(&self) -> Vec<(RoomId, RoomId, Rect)> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut edges = Vec::new();
        for room in &self.rooms {
            for &(other, rect) in &room.doors {
                let key = if room.id.index() < other.index() {
                    (room.id.index(), other.index())
                } else {
                    (other.index(), room.id.index())
                };
                if seen.insert(key) {
                    edges.push((room.id, other, rect));
                }
            }
        }
        edges
    }

    /// Which room contains this point, if any.
    pub fn room_at(&self, p: &Vec2) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|r| r.bounds.contains_point(p))
            .map(|r| r.id)
    }

    /// BFS over door adjacency; every room must be reachable from the first.
    fn validate_connectivity(&self) -> Result<(), LayoutError> {
        let mut visited = HashSet::new();
        let mut queue = vec![self.rooms[0].id];
        visited.insert(self.rooms[0].id);
        while let Some(current) = queue.pop() {
            for &(next, _) in &self.room(current).doors {
                if visited.insert(next) {
                    queue.push(next);
                }
            }
        }
        for room in &self.rooms {
            if !visited.contains(&room.id) {
                return Err(LayoutError::UnreachableRoom {
                    room: room.id.name(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walls::WALL_THICKNESS;

    #[test]
    fn test_standard_layout_builds() {
        let layout = OfficeLayout::standard().unwrap();
        assert_eq!(layout.rooms().len(), 5);
    }

    #[test]
    fn test_every_room_reachable() {
        // standard() already validates; rebuild and walk manually too
        let layout = OfficeLayout::standard().unwrap();
        for &from in &RoomId::ALL {
            let mut visited = std::collections::HashSet::new();
            let mut queue = vec![from];
            visited.insert(from);
            while let Some(current) = queue.pop() {
                for &(next, _) in &layout.room(current).doors {
                    if visited.insert(next) {
                        queue.push(next);
                    }
                }
            }
            assert_eq!(visited.len(), 5, "all rooms reachable from {:?}", from);
        }
    }

    #[test]
    fn test_doorway_counts_per_room() {
        let layout = OfficeLayout::standard().unwrap();
        assert_eq!(layout.room(RoomId::BreakRoom).doorways.len(), 1);
        assert_eq!(layout.room(RoomId::Office).doorways.len(), 2);
        assert_eq!(layout.room(RoomId::Hallway).doorways.len(), 3);
        assert_eq!(layout.room(RoomId::Classroom).doorways.len(), 1);
        assert_eq!(layout.room(RoomId::MeetingRoom).doorways.len(), 1);
    }

    #[test]
    fn test_doorways_do_not_overlap_walls() {
        let layout = OfficeLayout::standard().unwrap();
        for room in layout.rooms() {
            for doorway in &room.doorways {
                for wall in &room.walls {
                    assert!(
                        !doorway.intersects(wall),
                        "{:?}: doorway {:?} overlaps wall {:?}",
                        room.id,
                        doorway,
                        wall
                    );
                }
            }
        }
    }

    #[test]
    fn test_adjacent_rooms_share_door_rect() {
        let layout = OfficeLayout::standard().unwrap();
        for (a, b, rect) in layout.door_edges() {
            let a_has = layout.room(a).doors.iter().any(|&(to, r)| to == b && r == rect);
            let b_has = layout.room(b).doors.iter().any(|&(to, r)| to == a && r == rect);
            assert!(a_has && b_has, "door {:?}<->{:?} not symmetric", a, b);
        }
        assert_eq!(layout.door_edges().len(), 4);
    }

    #[test]
    fn test_door_rects_sit_inside_doorway_gaps() {
        // Each transit rect must not collide with any wall of either room
        let layout = OfficeLayout::standard().unwrap();
        for (a, b, rect) in layout.door_edges() {
            for id in [a, b] {
                for wall in &layout.room(id).walls {
                    assert!(
                        !rect.intersects(wall),
                        "door {:?} between {:?},{:?} blocked by wall {:?}",
                        rect,
                        a,
                        b,
                        wall
                    );
                }
            }
        }
    }

    #[test]
    fn test_wall_thickness_uniform() {
        let layout = OfficeLayout::standard().unwrap();
        for room in layout.rooms() {
            for wall in &room.walls {
                let thin = wall.w.min(wall.h);
                assert_eq!(thin, WALL_THICKNESS);
            }
        }
    }

    #[test]
    fn test_interactables_inside_their_rooms() {
        let layout = OfficeLayout::standard().unwrap();
        for room in layout.rooms() {
            for item in &room.interactables {
                assert!(
                    room.bounds.contains_point(&item.rect.center()),
                    "{:?} {:?} outside {:?}",
                    item.kind,
                    item.rect,
                    room.id
                );
            }
        }
    }

    #[test]
    fn test_room_at() {
        let layout = OfficeLayout::standard().unwrap();
        assert_eq!(layout.room_at(&Vec2::new(325.0, 300.0)), Some(RoomId::Office));
        assert_eq!(layout.room_at(&Vec2::new(800.0, 600.0)), Some(RoomId::MeetingRoom));
        assert_eq!(layout.room_at(&Vec2::new(-500.0, -500.0)), None);
    }
}
