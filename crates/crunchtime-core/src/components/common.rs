//! Components shared by the player and enemies.

use crunchtime_logic::geometry::{Rect, Vec2};
use crunchtime_logic::layout::RoomId;
use serde::{Deserialize, Serialize};

/// 4-way facing, derived from the dominant movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Facing for a movement vector; `None` when not moving.
    pub fn from_vector(v: &Vec2) -> Option<Self> {
        if v.x == 0.0 && v.y == 0.0 {
            return None;
        }
        if v.x.abs() > v.y.abs() {
            Some(if v.x > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if v.y > 0.0 { Direction::Down } else { Direction::Up })
        }
    }
}

/// Where an entity is: world-space center point plus the room it occupies
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub pos: Vec2,
    pub room: RoomId,
}

impl Position {
    pub fn new(x: f32, y: f32, room: RoomId) -> Self {
        Self {
            pos: Vec2::new(x, y),
            room,
        }
    }
}

/// Entity bounding box size, centered on the position
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    pub fn rect(&self, position: &Position) -> Rect {
        Rect::centered(position.pos.x, position.pos.y, self.w, self.h)
    }
}

/// Current facing component
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Facing(pub Direction);

impl Default for Facing {
    fn default() -> Self {
        Facing(Direction::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_dominant_axis() {
        assert_eq!(Direction::from_vector(&Vec2::new(1.0, 0.2)), Some(Direction::Right));
        assert_eq!(Direction::from_vector(&Vec2::new(-1.0, 0.2)), Some(Direction::Left));
        assert_eq!(Direction::from_vector(&Vec2::new(0.2, 1.0)), Some(Direction::Down));
        assert_eq!(Direction::from_vector(&Vec2::new(0.2, -1.0)), Some(Direction::Up));
        assert_eq!(Direction::from_vector(&Vec2::ZERO), None);
    }

    #[test]
    fn test_bounds_rect_is_centered() {
        let pos = Position::new(100.0, 100.0, RoomId::Office);
        let bounds = Bounds::new(40.0, 40.0);
        let rect = bounds.rect(&pos);
        assert_eq!(rect, Rect::new(80.0, 80.0, 40.0, 40.0));
        assert_eq!(rect.center(), pos.pos);
    }
}
