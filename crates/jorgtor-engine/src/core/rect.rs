use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in integer screen units (Y down).
/// `width` and `height` are never negative; level loading rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rect from a top-left corner and a size.
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Move the rect so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// A copy of this rect shifted by `delta`.
    pub fn translated(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Zero-area rects never overlap anything.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True iff the two rects overlap with positive area.
    /// Rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Free-function form of [`Rect::intersects`].
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn intersection_is_symmetric() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 10, 10),
            Rect::new(10, 0, 10, 10),
            Rect::new(-5, -5, 3, 30),
            Rect::new(2, 2, 0, 5),
            Rect::new(100, 100, 1, 1),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(intersects(a, b), intersects(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn degenerate_rects_never_intersect() {
        let big = Rect::new(-100, -100, 200, 200);
        assert!(!big.intersects(&Rect::new(0, 0, 0, 10)));
        assert!(!big.intersects(&Rect::new(0, 0, 10, 0)));
        assert!(!Rect::new(0, 0, 0, 0).intersects(&Rect::new(0, 0, 0, 0)));
    }

    #[test]
    fn set_bottom_keeps_height() {
        let mut r = Rect::new(3, 0, 20, 20);
        r.set_bottom(650);
        assert_eq!(r.y, 630);
        assert_eq!(r.bottom(), 650);
        assert_eq!(r.height, 20);
    }

    #[test]
    fn translated_leaves_original_untouched() {
        let r = Rect::new(1, 2, 3, 4);
        let moved = r.translated(IVec2::new(5, -2));
        assert_eq!(moved, Rect::new(6, 0, 3, 4));
        assert_eq!(r, Rect::new(1, 2, 3, 4));
    }
}
