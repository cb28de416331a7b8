//! Frame loop
//!
//! Each frame: poll events, clear, draw and move every figure, run the
//! collision pass, top up bots, present, then wait out the tick budget.
//! A quit event or Escape ends the loop before anything is drawn.

use crate::error::Error;
use crate::platform::{Platform, PlatformEvent};
use crate::renderer::{self, BACKGROUND};
use crate::settings::Settings;
use crate::sim::{self, Arena, GameEvent, Key};

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Quit or Escape seen; no further frames run
    Terminated,
}

/// A running round bound to its settings
#[derive(Debug, Clone)]
pub struct Game {
    pub arena: Arena,
    settings: Settings,
    state: LoopState,
    /// Frames completed
    ticks: u64,
    /// What happened during the last completed frame
    last_events: Vec<GameEvent>,
}

impl Game {
    /// Validate settings and set up the starting lineup
    pub fn new(settings: Settings, seed: u64) -> Result<Self, Error> {
        let arena = Arena::new_round(&settings, seed)?;
        Ok(Self {
            arena,
            settings,
            state: LoopState::Running,
            ticks: 0,
            last_events: Vec::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Apply window/key events; returns the resulting state
    pub fn handle_events(&mut self, events: &[PlatformEvent]) -> LoopState {
        for event in events {
            match event {
                PlatformEvent::Quit | PlatformEvent::KeyDown(Key::Escape) => {
                    log::info!("Terminating after {} ticks ({:?})", self.ticks, event);
                    self.state = LoopState::Terminated;
                }
                PlatformEvent::KeyDown(_) => {}
            }
        }
        self.state
    }

    /// Run one frame against `platform`
    pub fn frame<P: Platform + ?Sized>(&mut self, platform: &mut P) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        let events = platform.poll_events();
        if self.handle_events(&events) == LoopState::Terminated {
            return self.state;
        }

        platform.clear(BACKGROUND);

        let pressed = platform.pressed_keys();
        let size = self.arena.size();
        let show_scores = self.arena.variant.shows_scores();
        for figure in &mut self.arena.figures {
            renderer::draw(&mut *platform, figure, size, &pressed, show_scores);
        }

        self.last_events = sim::resolve(&mut self.arena);

        platform.present();
        platform.limit_frame();

        self.ticks += 1;
        log::trace!(
            "tick {}: {} figures, {} events",
            self.ticks,
            self.arena.figures.len(),
            self.last_events.len()
        );
        self.state
    }

    /// Run frames until terminated; returns the number of frames completed
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> u64 {
        log::info!(
            "{} round started at {} ticks/s",
            self.settings.variant.as_str(),
            self.settings.tick_rate
        );
        while self.frame(platform) == LoopState::Running {}

        for human in self.arena.humans() {
            log::info!("Player {} final score: {}", human.player_index, human.score);
        }
        self.ticks
    }
}
