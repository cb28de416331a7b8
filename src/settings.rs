//! Game settings and round variants
//!
//! Nothing here is read from disk or the environment; settings are built in
//! code and validated once before the arena is created.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Round variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// One human, two bots, no respawn
    Classic,
    /// Two humans, bots respawn when cleared, score labels shown
    #[default]
    Versus,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Versus => "Versus",
        }
    }

    /// Whether a bot is spawned once none remain
    pub fn respawns_bots(&self) -> bool {
        match self {
            Variant::Classic => false,
            Variant::Versus => true,
        }
    }

    /// Whether humans render a score label
    pub fn shows_scores(&self) -> bool {
        match self {
            Variant::Classic => false,
            Variant::Versus => true,
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "versus" | "vs" => Ok(Variant::Versus),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub variant: Variant,

    // === Arena ===
    pub width: i32,
    pub height: i32,

    // === Timing ===
    /// Ticks per second the frame limiter aims for
    pub tick_rate: u32,

    // === HUD ===
    pub font_family: String,
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            tick_rate: TARGET_TICK_RATE,
            font_family: FONT_FAMILY.to_string(),
            font_size: FONT_SIZE,
        }
    }
}

impl Settings {
    /// Default settings for a given variant
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// CSS-style font string, e.g. `30px "Comic Sans MS"`
    pub fn css_font(&self) -> String {
        format!("{}px \"{}\"", self.font_size, self.font_family)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < FIGURE_SIZE || self.height < FIGURE_SIZE {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                size: FIGURE_SIZE,
            });
        }
        if self.width > MAX_ARENA_SIZE || self.height > MAX_ARENA_SIZE {
            return Err(ConfigError::ArenaTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_ARENA_SIZE,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}
