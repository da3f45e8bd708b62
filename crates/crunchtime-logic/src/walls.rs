//! Wall segment construction with doorway gaps.
//!
//! A room side is either a single solid segment or 0–2 segments leaving a
//! gap for a doorway. Gap offsets are measured along the side from the
//! room origin; a gap that does not fit its side is a configuration error
//! caught at construction time.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Wall thickness in world units (pixels)
pub const WALL_THICKNESS: f32 = 20.0;

/// Which side of a room a wall runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Length of this side for the given room bounds.
    pub fn length(&self, room: &Rect) -> f32 {
        match self {
            Side::Top | Side::Bottom => room.w,
            Side::Left | Side::Right => room.h,
        }
    }
}

/// Fatal layout configuration error. The world never starts with one of
/// these present.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Doorway gap is empty, inverted, or extends past the side length.
    BadDoorway {
        side: Side,
        gap_start: f32,
        gap_end: f32,
        side_length: f32,
    },
    /// A room cannot be reached from the others via doorway adjacency.
    UnreachableRoom { room: &'static str },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::BadDoorway {
                side,
                gap_start,
                gap_end,
                side_length,
            } => write!(
                f,
                "doorway gap {}..{} does not fit {:?} side of length {}",
                gap_start, gap_end, side, side_length
            ),
            LayoutError::UnreachableRoom { room } => {
                write!(f, "room {} is not reachable from the rest of the map", room)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// One side's wall decomposition: the solid segments plus the doorway rect
/// (if any) left between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSide {
    pub segments: Vec<Rect>,
    pub doorway: Option<Rect>,
}

/// A full-length solid wall along one side of the room.
pub fn solid_wall(room: &Rect, side: Side) -> Rect {
    match side {
        Side::Top => Rect::new(room.x, room.y, room.w, WALL_THICKNESS),
        Side::Bottom => Rect::new(
            room.x,
            room.bottom() - WALL_THICKNESS,
            room.w,
            WALL_THICKNESS,
        ),
        Side::Left => Rect::new(room.x, room.y, WALL_THICKNESS, room.h),
        Side::Right => Rect::new(
            room.right() - WALL_THICKNESS,
            room.y,
            WALL_THICKNESS,
            room.h,
        ),
    }
}

/// Decompose one side into wall segments leaving a doorway gap spanning
/// `gap_start..gap_end` along the side. Produces 0, 1, or 2 segments
/// depending on whether the gap touches either corner.
pub fn wall_with_doorway(
    room: &Rect,
    side: Side,
    gap_start: f32,
    gap_end: f32,
) -> Result<WallSide, LayoutError> {
    let side_length = side.length(room);
    if gap_start < 0.0 || gap_end <= gap_start || gap_end > side_length {
        return Err(LayoutError::BadDoorway {
            side,
            gap_start,
            gap_end,
            side_length,
        });
    }

    let gap_len = gap_end - gap_start;
    let mut segments = Vec::with_capacity(2);

    let doorway = match side {
        Side::Top => {
            if gap_start > 0.0 {
                segments.push(Rect::new(room.x, room.y, gap_start, WALL_THICKNESS));
            }
            if gap_end < room.w {
                segments.push(Rect::new(
                    room.x + gap_end,
                    room.y,
                    room.w - gap_end,
                    WALL_THICKNESS,
                ));
            }
            Rect::new(room.x + gap_start, room.y, gap_len, WALL_THICKNESS)
        }
        Side::Bottom => {
            let y = room.bottom() - WALL_THICKNESS;
            if gap_start > 0.0 {
                segments.push(Rect::new(room.x, y, gap_start, WALL_THICKNESS));
            }
            if gap_end < room.w {
                segments.push(Rect::new(room.x + gap_end, y, room.w - gap_end, WALL_THICKNESS));
            }
            Rect::new(room.x + gap_start, y, gap_len, WALL_THICKNESS)
        }
        Side::Left => {
            if gap_start > 0.0 {
                segments.push(Rect::new(room.x, room.y, WALL_THICKNESS, gap_start));
            }
            if gap_end < room.h {
                segments.push(Rect::new(
                    room.x,
                    room.y + gap_end,
                    WALL_THICKNESS,
                    room.h - gap_end,
                ));
            }
            Rect::new(room.x, room.y + gap_start, WALL_THICKNESS, gap_len)
        }
        Side::Right => {
            let x = room.right() - WALL_THICKNESS;
            if gap_start > 0.0 {
                segments.push(Rect::new(x, room.y, WALL_THICKNESS, gap_start));
            }
            if gap_end < room.h {
                segments.push(Rect::new(x, room.y + gap_end, WALL_THICKNESS, room.h - gap_end));
            }
            Rect::new(x, room.y + gap_start, WALL_THICKNESS, gap_len)
        }
    };

    Ok(WallSide {
        segments,
        doorway: Some(doorway),
    })
}
