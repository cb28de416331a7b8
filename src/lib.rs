//! Box Arena - bouncing bots and keyboard-driven humans in a walled box
//!
//! Core modules:
//! - `sim`: Simulation (figures, movement policies, collisions, arena state)
//! - `renderer`: Turns arena state into canvas calls
//! - `platform`: Canvas/input/frame-clock collaborator and its backends
//! - `game`: The frame loop tying the three together
//! - `settings`: Runtime settings and round variants

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, Error, PlatformError};
pub use game::{Game, LoopState};
pub use settings::{Settings, Variant};

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions (pixels)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;
    /// Largest accepted width or height; keeps spawn arithmetic in range
    pub const MAX_ARENA_SIZE: i32 = 1 << 16;

    /// Side length of every figure's bounding box
    pub const FIGURE_SIZE: i32 = 10;

    /// Target ticks per second for the frame limiter
    pub const TARGET_TICK_RATE: u32 = 160;
    /// Maximum substeps per animation frame (browser build)
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Respawned bots keep this far from the walls
    pub const SPAWN_MARGIN: i32 = 10;

    /// Score label font
    pub const FONT_FAMILY: &str = "Comic Sans MS";
    pub const FONT_SIZE: u32 = 30;
    /// Vertical spacing between score labels, in text heights
    pub const LABEL_LINE_SPACING: f32 = 1.2;
}
