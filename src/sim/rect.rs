//! Axis-aligned integer boxes
//!
//! A box is its top-left corner plus a size. `right` and `bottom` are
//! exclusive, so a 10-wide box at x=0 covers columns 0..10.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Square box with the given side length
    pub fn square(pos: IVec2, side: i32) -> Self {
        Self::new(pos, IVec2::splat(side))
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Shift the box by `delta`
    #[inline]
    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// Open-edge overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True if the box lies fully inside `[0, width] x [0, height]`
    pub fn within(&self, width: i32, height: i32) -> bool {
        self.left() >= 0 && self.right() <= width && self.top() >= 0 && self.bottom() <= height
    }

    /// Push the box back inside `[0, width] x [0, height]`.
    ///
    /// Checks run left, right, top, bottom, so right wins over left and bottom
    /// over top when the box is larger than the area.
    pub fn clamp_within(&mut self, width: i32, height: i32) {
        if self.left() < 0 {
            self.pos.x = 0;
        }
        if self.right() > width {
            self.pos.x = width - self.size.x;
        }
        if self.top() < 0 {
            self.pos.y = 0;
        }
        if self.bottom() > height {
            self.pos.y = height - self.size.y;
        }
    }
}
