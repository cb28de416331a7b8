//! Arena state
//!
//! Owns every active figure plus the counters and RNG used to create new ones.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::figure::{Color, Figure};
use super::keys::KeyBindings;
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::{Settings, Variant};

/// Palette for respawned bots
pub const BOT_COLORS: [Color; 2] = [Color::GREEN, Color::RED];
/// Per-axis speeds for respawned bots
pub const BOT_SPEEDS: [i32; 2] = [-1, 1];

/// The play area and everything in it
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub variant: Variant,
    /// Active figures in draw order
    pub figures: Vec<Figure>,
    rng: Pcg32,
    next_id: u32,
    /// Index the next human will get
    next_player_index: u32,
}

impl Arena {
    /// Empty arena; use [`Arena::new_round`] for the standard lineup
    pub fn new(width: i32, height: i32, variant: Variant, seed: u64) -> Self {
        Self {
            width,
            height,
            variant,
            figures: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            next_player_index: 0,
        }
    }

    /// Arena populated with the starting figures for the settings' variant
    pub fn new_round(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut arena = Self::new(settings.width, settings.height, settings.variant, seed);
        let (w, h) = (settings.width, settings.height);

        arena.spawn_bot(Color::GREEN, IVec2::new(1, 1), IVec2::new(w / 3, h / 3));
        arena.spawn_bot(Color::RED, IVec2::new(-1, -1), IVec2::new(w * 2 / 3, h * 2 / 3));

        match settings.variant {
            Variant::Classic => {
                arena.spawn_human(Color::GRAY, IVec2::new(w / 2, h / 2), KeyBindings::WASD)?;
            }
            Variant::Versus => {
                arena.spawn_human(Color::GRAY, IVec2::new(w / 3, h / 2), KeyBindings::WASD)?;
                arena.spawn_human(
                    Color::YELLOW,
                    IVec2::new(w * 2 / 3, h / 2),
                    KeyBindings::ARROWS,
                )?;
            }
        }

        log::info!(
            "{} round: {}x{}, {} bots, {} humans",
            settings.variant.as_str(),
            w,
            h,
            arena.bot_count(),
            arena.humans().count()
        );
        Ok(arena)
    }

    /// Arena size as a vector
    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Allocate a new figure ID
    pub fn next_figure_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a bot; returns its ID
    pub fn spawn_bot(&mut self, color: Color, velocity: IVec2, pos: IVec2) -> u32 {
        let id = self.next_figure_id();
        self.figures.push(Figure::bot(id, color, velocity, pos));
        id
    }

    /// Add a human with the next player index; returns its ID.
    ///
    /// Fails if the bindings repeat a key, bind Escape, or share any key with
    /// an existing human.
    pub fn spawn_human(
        &mut self,
        color: Color,
        pos: IVec2,
        bindings: KeyBindings,
    ) -> Result<u32, ConfigError> {
        bindings.validate()?;
        for other in self.humans() {
            for key in bindings.keys() {
                if other.bindings.keys().contains(&key) {
                    return Err(ConfigError::SharedKey {
                        key,
                        first: other.player_index,
                        second: self.next_player_index,
                    });
                }
            }
        }

        let id = self.next_figure_id();
        let player_index = self.next_player_index;
        self.next_player_index += 1;
        self.figures
            .push(Figure::human(id, color, pos, bindings, player_index));
        Ok(id)
    }

    /// Add a bot with a random palette color, random ±1 velocity and a random
    /// position at least `SPAWN_MARGIN` from every wall.
    pub fn spawn_random_bot(&mut self) -> u32 {
        let color = BOT_COLORS[self.rng.random_range(0..BOT_COLORS.len())];
        let vx = BOT_SPEEDS[self.rng.random_range(0..BOT_SPEEDS.len())];
        let vy = BOT_SPEEDS[self.rng.random_range(0..BOT_SPEEDS.len())];
        let pos = IVec2::new(
            self.random_coord(self.width),
            self.random_coord(self.height),
        );
        let id = self.spawn_bot(color, IVec2::new(vx, vy), pos);
        log::debug!("Spawned bot {} at ({}, {}) v=({}, {})", id, pos.x, pos.y, vx, vy);
        id
    }

    /// Coordinate in `[SPAWN_MARGIN, extent - SPAWN_MARGIN]`, or the middle if
    /// the arena is too narrow for the margin
    fn random_coord(&mut self, extent: i32) -> i32 {
        let lo = SPAWN_MARGIN;
        let hi = extent - SPAWN_MARGIN;
        if lo > hi {
            return (extent - FIGURE_SIZE).max(0) / 2;
        }
        self.rng.random_range(lo..=hi)
    }

    pub fn bot_count(&self) -> usize {
        self.figures.iter().filter(|f| f.is_bot()).count()
    }

    /// Human state of every human figure, in draw order
    pub fn humans(&self) -> impl Iterator<Item = &super::figure::Human> {
        self.figures.iter().filter_map(|f| f.as_human())
    }

    pub fn figure(&self, id: u32) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id == id)
    }

    pub fn figure_mut(&mut self, id: u32) -> Option<&mut Figure> {
        self.figures.iter_mut().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Key;

    #[test]
    fn test_classic_round() {
        let arena = Arena::new_round(&Settings::from_variant(Variant::Classic), 1).unwrap();
        assert_eq!(arena.figures.len(), 3);
        assert_eq!(arena.bot_count(), 2);

        assert_eq!(arena.figures[0].position(), IVec2::new(266, 200));
        assert_eq!(arena.figures[0].velocity, IVec2::new(1, 1));
        assert_eq!(arena.figures[1].position(), IVec2::new(533, 400));
        assert_eq!(arena.figures[1].velocity, IVec2::new(-1, -1));
        assert_eq!(arena.figures[2].position(), IVec2::new(400, 300));
        assert_eq!(arena.figures[2].color, Color::GRAY);
    }

    #[test]
    fn test_versus_round_assigns_player_indices() {
        let arena = Arena::new_round(&Settings::default(), 1).unwrap();
        assert_eq!(arena.figures.len(), 4);

        let humans: Vec<_> = arena.humans().collect();
        assert_eq!(humans.len(), 2);
        assert_eq!(humans[0].player_index, 0);
        assert_eq!(humans[0].bindings, KeyBindings::WASD);
        assert_eq!(humans[1].player_index, 1);
        assert_eq!(humans[1].bindings, KeyBindings::ARROWS);
        assert_eq!(arena.figures[3].position(), IVec2::new(533, 300));
        assert!(humans.iter().all(|h| h.score == 0));
    }

    #[test]
    fn test_figure_ids_are_unique() {
        let mut arena = Arena::new_round(&Settings::default(), 1).unwrap();
        arena.spawn_random_bot();
        let mut ids: Vec<u32> = arena.figures.iter().map(|f| f.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rejects_shared_keys() {
        let mut arena = Arena::new(800, 600, Variant::Versus, 0);
        arena
            .spawn_human(Color::GRAY, IVec2::ZERO, KeyBindings::WASD)
            .unwrap();
        let clash = KeyBindings {
            up: Key::W,
            ..KeyBindings::ARROWS
        };
        assert_eq!(
            arena.spawn_human(Color::YELLOW, IVec2::ZERO, clash),
            Err(ConfigError::SharedKey {
                key: Key::W,
                first: 0,
                second: 1
            })
        );
        // Failed spawn does not consume a player index
        assert_eq!(
            arena.spawn_human(Color::YELLOW, IVec2::ZERO, KeyBindings::ARROWS),
            Ok(2)
        );
        let indices: Vec<u32> = arena.humans().map(|h| h.player_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_rejects_quit_key_binding() {
        let mut arena = Arena::new(800, 600, Variant::Versus, 0);
        let bindings = KeyBindings {
            left: Key::Escape,
            ..KeyBindings::ARROWS
        };
        assert_eq!(
            arena.spawn_human(Color::GRAY, IVec2::ZERO, bindings),
            Err(ConfigError::ReservedKey(Key::Escape))
        );
        assert!(arena.figures.is_empty());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            height: 4,
            ..Settings::default()
        };
        assert!(Arena::new_round(&settings, 1).is_err());
    }

    #[test]
    fn test_largest_arena_lineup() {
        let settings = Settings {
            width: MAX_ARENA_SIZE,
            height: MAX_ARENA_SIZE,
            ..Settings::default()
        };
        let arena = Arena::new_round(&settings, 1).unwrap();
        assert_eq!(arena.figures[1].position(), IVec2::splat(43690));
        assert_eq!(arena.figures[3].position(), IVec2::new(43690, 32768));
    }

    #[test]
    fn test_random_bot_in_bounds() {
        let mut arena = Arena::new(800, 600, Variant::Versus, 42);
        for _ in 0..200 {
            let id = arena.spawn_random_bot();
            let bot = arena.figure(id).unwrap();
            let p = bot.position();
            assert!((10..=790).contains(&p.x));
            assert!((10..=590).contains(&p.y));
            assert!(bot.velocity.x.abs() == 1 && bot.velocity.y.abs() == 1);
            assert!(BOT_COLORS.contains(&bot.color));
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = Arena::new(800, 600, Variant::Versus, 7);
        let mut b = Arena::new(800, 600, Variant::Versus, 7);
        a.spawn_random_bot();
        b.spawn_random_bot();
        assert_eq!(a.figures, b.figures);
    }
}
