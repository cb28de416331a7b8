//! Error types
//!
//! Every error here is fatal at construction time. The frame loop itself
//! has no failure path.

use crate::sim::Key;

/// Invalid settings or key bindings
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Arena cannot hold a single figure
    #[error("arena {width}x{height} is smaller than a figure ({size}x{size})")]
    ArenaTooSmall { width: i32, height: i32, size: i32 },

    /// Arena too large for integer positions
    #[error("arena {width}x{height} exceeds the {max}x{max} limit")]
    ArenaTooLarge { width: i32, height: i32, max: i32 },

    /// Frame limiter needs a positive rate
    #[error("tick rate must be positive")]
    ZeroTickRate,

    /// Variant name not recognized
    #[error("unknown variant {0:?}")]
    UnknownVariant(String),

    /// Same key used twice inside one binding
    #[error("key {0:?} is bound more than once in a single binding")]
    DuplicateKey(Key),

    /// Key claimed by the frame loop, e.g. Escape for quit
    #[error("key {0:?} is reserved and cannot be bound")]
    ReservedKey(Key),

    /// Two humans share a key
    #[error("key {key:?} is bound by players {first} and {second}")]
    SharedKey { key: Key, first: u32, second: u32 },
}

/// Rendering/input collaborator failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Could not create a window or canvas of the requested size
    #[error("failed to initialize a {width}x{height} window: {reason}")]
    WindowInit {
        width: i32,
        height: i32,
        reason: String,
    },
}

/// Crate-level error
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),
}
