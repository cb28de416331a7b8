//! Rendering
//!
//! Draws arena state through the platform `Canvas`. Nothing here owns GPU or
//! window resources; the backend decides what a filled rect means.

pub mod scene;

pub use scene::{BACKGROUND, LABEL_COLOR, draw, label_position, render_figure, score_label};
