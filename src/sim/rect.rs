//! Integer axis-aligned rectangles
//!
//! Screen space: x grows right, y grows down. Edges follow sprite conventions,
//! so `right()` and `bottom()` are one past the last covered pixel.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Rectangle of the given size centered on `center` (halves round down)
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - size / 2,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.x <= 0 || self.size.y <= 0 || other.size.x <= 0 || other.size.y <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether a point lies inside (left/top inclusive, right/bottom exclusive)
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(83, 318, 34, 24);
        assert_eq!(r.right(), 117);
        assert_eq!(r.bottom(), 342);
        assert_eq!(r.center_x(), 100);
        assert_eq!(r.center_y(), 330);
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(IVec2::new(100, 330), IVec2::new(34, 24));
        assert_eq!(r, Rect::new(83, 318, 34, 24));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(2, 2, 0, 5)));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains_point(IVec2::new(10, 10)));
        assert!(r.contains_point(IVec2::new(14, 14)));
        assert!(!r.contains_point(IVec2::new(15, 12)));
        assert!(!r.contains_point(IVec2::new(9, 12)));
    }
}
