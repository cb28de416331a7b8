//! Headless backend
//!
//! Records draw calls instead of showing them and replays a scripted timeline
//! of events and held keys. Frames are counted by `present`.

use std::collections::BTreeMap;

use glam::IVec2;

use super::{Canvas, Input, Platform, PlatformEvent};
use crate::error::PlatformError;
use crate::sim::{Color, Key, PressedKeys, Rect};

#[cfg(not(target_arch = "wasm32"))]
use super::time::FrameClock;

/// A recorded canvas call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    Text {
        text: String,
        pos: IVec2,
        color: Color,
    },
}

/// Off-screen platform driven by a script
#[derive(Debug)]
pub struct HeadlessPlatform {
    text_height: i32,
    /// Frames presented so far
    frame: u64,
    /// Draw calls since the last present
    pending: Vec<DrawCommand>,
    /// Draw calls of the most recently presented frame
    last_frame: Vec<DrawCommand>,
    /// Events keyed by the frame they fire on
    script: BTreeMap<u64, Vec<PlatformEvent>>,
    /// Key presses (true) and releases (false) keyed by frame
    key_script: BTreeMap<u64, Vec<(Key, bool)>>,
    held: PressedKeys,
    #[cfg(not(target_arch = "wasm32"))]
    clock: Option<FrameClock>,
}

impl HeadlessPlatform {
    /// Create an off-screen "window" of the given size.
    ///
    /// `text_height` stands in for the score font's line height.
    pub fn new(width: i32, height: i32, text_height: i32) -> Result<Self, PlatformError> {
        if width <= 0 || height <= 0 {
            return Err(PlatformError::WindowInit {
                width,
                height,
                reason: "dimensions must be positive".to_string(),
            });
        }
        log::info!("Headless window {}x{}", width, height);
        Ok(Self {
            text_height,
            frame: 0,
            pending: Vec::new(),
            last_frame: Vec::new(),
            script: BTreeMap::new(),
            key_script: BTreeMap::new(),
            held: PressedKeys::new(),
            #[cfg(not(target_arch = "wasm32"))]
            clock: None,
        })
    }

    /// Pace `limit_frame` in real time at `tick_rate` ticks per second
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_frame_clock(mut self, tick_rate: u32) -> Self {
        self.clock = Some(FrameClock::new(tick_rate));
        self
    }

    /// Frames presented so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Fire `event` when polled during frame `frame` (0-based)
    pub fn schedule_event(&mut self, frame: u64, event: PlatformEvent) {
        self.script.entry(frame).or_default().push(event);
    }

    /// Hold `key` from frame `from` until frame `until` (exclusive)
    pub fn hold_key(&mut self, key: Key, from: u64, until: u64) {
        self.key_script.entry(from).or_default().push((key, true));
        self.key_script.entry(until).or_default().push((key, false));
    }

    /// Schedule a quit event on frame `frame`
    pub fn quit_at(&mut self, frame: u64) {
        self.schedule_event(frame, PlatformEvent::Quit);
    }

    /// Draw calls of the last presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Draw calls not yet presented
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Apply key presses/releases scheduled up to the current frame
    fn update_held_keys(&mut self) {
        let due: Vec<u64> = self
            .key_script
            .range(..=self.frame)
            .map(|(frame, _)| *frame)
            .collect();
        for frame in due {
            if let Some(changes) = self.key_script.remove(&frame) {
                for (key, down) in changes {
                    if down {
                        self.held.press(key);
                    } else {
                        self.held.release(key);
                    }
                }
            }
        }
    }
}

impl Canvas for HeadlessPlatform {
    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::FillRect(rect, color));
    }

    fn text_height(&self) -> i32 {
        self.text_height
    }

    fn draw_text(&mut self, text: &str, pos: IVec2, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frame += 1;
    }
}

impl Input for HeadlessPlatform {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        self.update_held_keys();

        let due: Vec<u64> = self
            .script
            .range(..=self.frame)
            .map(|(frame, _)| *frame)
            .collect();
        let mut events = Vec::new();
        for frame in due {
            if let Some(mut batch) = self.script.remove(&frame) {
                events.append(&mut batch);
            }
        }
        events
    }

    fn pressed_keys(&self) -> PressedKeys {
        self.held.clone()
    }
}

impl Platform for HeadlessPlatform {
    #[cfg(not(target_arch = "wasm32"))]
    fn limit_frame(&mut self) {
        if let Some(clock) = self.clock.as_mut() {
            clock.tick();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn limit_frame(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_window() {
        let err = HeadlessPlatform::new(0, 600, 20).unwrap_err();
        assert!(matches!(err, PlatformError::WindowInit { width: 0, .. }));
    }

    #[test]
    fn test_records_until_present() {
        let mut p = HeadlessPlatform::new(800, 600, 20).unwrap();
        p.clear(Color::BLACK);
        p.fill_rect(Rect::square(IVec2::new(1, 2), 10), Color::RED);
        assert_eq!(p.pending().len(), 2);
        assert!(p.last_frame().is_empty());

        p.present();
        assert_eq!(p.frame(), 1);
        assert!(p.pending().is_empty());
        assert_eq!(p.last_frame()[0], DrawCommand::Clear(Color::BLACK));
    }

    #[test]
    fn test_scripted_events_fire_once() {
        let mut p = HeadlessPlatform::new(800, 600, 20).unwrap();
        p.schedule_event(1, PlatformEvent::KeyDown(Key::Space));
        p.quit_at(2);

        assert!(p.poll_events().is_empty());
        p.present();
        assert_eq!(p.poll_events(), vec![PlatformEvent::KeyDown(Key::Space)]);
        assert!(p.poll_events().is_empty());
        p.present();
        assert_eq!(p.poll_events(), vec![PlatformEvent::Quit]);
    }

    #[test]
    fn test_held_key_window() {
        let mut p = HeadlessPlatform::new(800, 600, 20).unwrap();
        p.hold_key(Key::W, 1, 3);

        p.poll_events();
        assert!(!p.pressed_keys().is_pressed(Key::W));
        for _ in 0..2 {
            p.present();
            p.poll_events();
            assert!(p.pressed_keys().is_pressed(Key::W));
        }
        p.present();
        p.poll_events();
        assert!(!p.pressed_keys().is_pressed(Key::W));
    }
}
