//! Platform abstraction layer
//!
//! The game only ever talks to these traits:
//! - `Canvas`: clear, filled rects, text, present
//! - `Input`: window/key events and the held-key snapshot
//! - `Platform`: both of the above plus the end-of-tick frame limiter
//!
//! Backends: `headless` (tests and the native demo) and `web` (wasm32 canvas).

pub mod headless;
#[cfg(not(target_arch = "wasm32"))]
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::IVec2;

use crate::sim::{Color, Key, PressedKeys, Rect};

pub use headless::{DrawCommand, HeadlessPlatform};
#[cfg(not(target_arch = "wasm32"))]
pub use time::FrameClock;
#[cfg(target_arch = "wasm32")]
pub use web::WebPlatform;

/// Window/keyboard event delivered by `Input::poll_events`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Window closed
    Quit,
    /// A key went down this frame
    KeyDown(Key),
}

/// Drawing surface
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Line height of the score font, in pixels
    fn text_height(&self) -> i32;
    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: IVec2, color: Color);
    /// Show everything drawn since the last present
    fn present(&mut self);
}

/// Keyboard and window events
pub trait Input {
    /// Drain pending events
    fn poll_events(&mut self) -> Vec<PlatformEvent>;
    /// Keys held right now
    fn pressed_keys(&self) -> PressedKeys;
}

/// Everything the frame loop needs from the outside world
pub trait Platform: Canvas + Input {
    /// Block until the current tick's time budget has elapsed
    fn limit_frame(&mut self);
}
