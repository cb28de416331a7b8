//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Integer positions and velocities only
//! - Seeded RNG only
//! - Stable iteration order (draw order of the figure list)
//! - No rendering or platform dependencies

pub mod collision;
pub mod figure;
pub mod keys;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Capture, apply_captures, check_collisions, find_captures};
pub use figure::{Color, Figure, FigureKind, Human};
pub use keys::{Key, KeyBindings, PressedKeys};
pub use rect::Rect;
pub use state::{Arena, BOT_COLORS, BOT_SPEEDS};
pub use tick::{GameEvent, TickInput, advance_figures, replenish_bots, resolve, tick};
