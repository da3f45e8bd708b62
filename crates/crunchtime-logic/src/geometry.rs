//! 2D vectors and axis-aligned rectangles.
//!
//! Rectangle overlap is strict-interior: two rects that merely share an
//! edge do not intersect, so entities flush against a wall are not
//! considered colliding with it.

use serde::{Deserialize, Serialize};

/// 2D position/direction vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Self) -> f32 {
        (*other - *self).length()
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the zero vector when the length is zero.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            Self::ZERO
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Axis-aligned rectangle, origin at top-left
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on (cx, cy).
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn contains_point(&self, p: &Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Strict-interior overlap test. Rects touching only along an edge
    /// or at a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vec2::new(5.0, 8.0));

        let diff = b - a;
        assert_eq!(diff, Vec2::new(3.0, 4.0));
        assert_eq!(diff.length(), 5.0);

        let scaled = a * 2.0;
        assert_eq!(scaled, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_dot() {
        let right = Vec2::new(1.0, 0.0);
        let up = Vec2::new(0.0, -1.0);
        assert_eq!(right.dot(&right), 1.0);
        assert_eq!(right.dot(&up), 0.0);
        assert_eq!(right.dot(&(right * -1.0)), -1.0);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flush_right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!a.intersects(&flush_right));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_rect_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(&Vec2::new(5.0, 5.0)));
        assert!(r.contains_point(&Vec2::new(0.0, 0.0)));
        assert!(!r.contains_point(&Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_rect_centered() {
        let r = Rect::centered(50.0, 50.0, 30.0, 30.0);
        assert_eq!(r.x, 35.0);
        assert_eq!(r.y, 35.0);
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
    }
}
