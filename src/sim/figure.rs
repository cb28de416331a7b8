//! Figures: the square boxes that move around the arena
//!
//! Bots and humans share one struct; the kind decides the movement policy
//! that runs after the box has been shifted by its velocity.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::keys::{KeyBindings, PressedKeys};
use super::rect::Rect;
use crate::consts::FIGURE_SIZE;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for canvas backends
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Per-human state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Human {
    pub bindings: KeyBindings,
    /// Bots captured this round
    pub score: u32,
    /// Order of creation among humans, starting at 0
    pub player_index: u32,
}

/// What drives a figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FigureKind {
    /// Bounces off the walls
    Bot,
    /// Steered by the keyboard, clamped to the arena
    Human(Human),
}

/// A figure in the arena
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub id: u32,
    pub color: Color,
    /// Added to the box position every tick
    pub velocity: IVec2,
    pub rect: Rect,
    pub kind: FigureKind,
}

impl Figure {
    pub fn bot(id: u32, color: Color, velocity: IVec2, pos: IVec2) -> Self {
        Self {
            id,
            color,
            velocity,
            rect: Rect::square(pos, FIGURE_SIZE),
            kind: FigureKind::Bot,
        }
    }

    /// Humans start at rest; only their keys move them
    pub fn human(
        id: u32,
        color: Color,
        pos: IVec2,
        bindings: KeyBindings,
        player_index: u32,
    ) -> Self {
        Self {
            id,
            color,
            velocity: IVec2::ZERO,
            rect: Rect::square(pos, FIGURE_SIZE),
            kind: FigureKind::Human(Human {
                bindings,
                score: 0,
                player_index,
            }),
        }
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.rect.pos
    }

    #[inline]
    pub fn is_bot(&self) -> bool {
        matches!(self.kind, FigureKind::Bot)
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        matches!(self.kind, FigureKind::Human(_))
    }

    pub fn as_human(&self) -> Option<&Human> {
        match &self.kind {
            FigureKind::Human(human) => Some(human),
            FigureKind::Bot => None,
        }
    }

    pub fn as_human_mut(&mut self) -> Option<&mut Human> {
        match &mut self.kind {
            FigureKind::Human(human) => Some(human),
            FigureKind::Bot => None,
        }
    }

    /// Score for humans, `None` for bots
    pub fn score(&self) -> Option<u32> {
        self.as_human().map(|h| h.score)
    }

    /// Bounding-box overlap (edges open)
    pub fn collided(&self, other: &Figure) -> bool {
        self.rect.overlaps(&other.rect)
    }

    /// Shift by velocity, then run the movement policy for this kind.
    ///
    /// `arena` is the arena's width and height.
    pub fn advance(&mut self, arena: IVec2, pressed: &PressedKeys) {
        self.rect.translate(self.velocity);
        match &self.kind {
            FigureKind::Bot => self.reflect_off_walls(arena),
            FigureKind::Human(human) => {
                let delta = human.bindings.displacement(pressed);
                self.rect.translate(delta);
                self.rect.clamp_within(arena.x, arena.y);
            }
        }
    }

    /// Flip each velocity component whose axis the box has crossed.
    /// No clamping: the box may sit one step outside until the next tick.
    fn reflect_off_walls(&mut self, arena: IVec2) {
        if self.rect.left() < 0 || self.rect.right() > arena.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.rect.top() < 0 || self.rect.bottom() > arena.y {
            self.velocity.y = -self.velocity.y;
        }
    }
}
