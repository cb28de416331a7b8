//! One simulation tick
//!
//! Moves every figure, then resolves: runs the collision pass and tops up
//! bots in variants that respawn them. The frame loop moves figures while
//! drawing them and calls [`resolve`] for the rest.

use super::collision::{Capture, check_collisions};
use super::keys::PressedKeys;
use super::state::Arena;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held while this tick runs
    pub pressed: PressedKeys,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A human overlapped a bot and removed it
    Captured(Capture),
    /// A replacement bot appeared
    BotSpawned { id: u32 },
}

/// Move every figure in draw order
pub fn advance_figures(arena: &mut Arena, input: &TickInput) {
    let size = arena.size();
    for figure in &mut arena.figures {
        figure.advance(size, &input.pressed);
    }
}

/// Spawn one bot if the variant respawns and none are left
pub fn replenish_bots(arena: &mut Arena) -> Option<u32> {
    if arena.variant.respawns_bots() && arena.bot_count() == 0 {
        Some(arena.spawn_random_bot())
    } else {
        None
    }
}

/// Post-move phase: captures first, then at most one replacement bot
pub fn resolve(arena: &mut Arena) -> Vec<GameEvent> {
    let mut events: Vec<GameEvent> = check_collisions(arena)
        .into_iter()
        .map(GameEvent::Captured)
        .collect();

    if let Some(id) = replenish_bots(arena) {
        events.push(GameEvent::BotSpawned { id });
    }

    events
}

/// Advance the arena by one tick
pub fn tick(arena: &mut Arena, input: &TickInput) -> Vec<GameEvent> {
    advance_figures(arena, input);
    resolve(arena)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Settings, Variant};
    use crate::sim::{Color, Key, KeyBindings};
    use glam::IVec2;

    #[test]
    fn test_stationary_capture_scenario() {
        let mut arena = Arena::new(800, 600, Variant::Classic, 0);
        let human = arena
            .spawn_human(Color::GRAY, IVec2::new(400, 300), KeyBindings::WASD)
            .unwrap();
        arena.spawn_bot(Color::RED, IVec2::ZERO, IVec2::new(400, 300));
        assert_eq!(arena.figures.len(), 2);

        let events = tick(&mut arena, &TickInput::default());

        assert_eq!(arena.figures.len(), 1);
        assert_eq!(arena.figure(human).unwrap().score(), Some(1));
        assert!(matches!(events.as_slice(), [GameEvent::Captured(c)] if c.human_id == human));
    }

    #[test]
    fn test_classic_does_not_respawn() {
        let mut arena = Arena::new(800, 600, Variant::Classic, 0);
        arena
            .spawn_human(Color::GRAY, IVec2::new(400, 300), KeyBindings::WASD)
            .unwrap();
        arena.spawn_bot(Color::RED, IVec2::ZERO, IVec2::new(400, 300));

        tick(&mut arena, &TickInput::default());
        assert_eq!(arena.bot_count(), 0);
        tick(&mut arena, &TickInput::default());
        assert_eq!(arena.bot_count(), 0);
    }

    #[test]
    fn test_versus_respawns_single_bot() {
        let mut arena = Arena::new(800, 600, Variant::Versus, 3);
        let human = arena
            .spawn_human(Color::GRAY, IVec2::new(100, 100), KeyBindings::WASD)
            .unwrap();
        arena.spawn_bot(Color::RED, IVec2::ZERO, IVec2::new(100, 100));
        arena.spawn_bot(Color::GREEN, IVec2::ZERO, IVec2::new(104, 96));

        let events = tick(&mut arena, &TickInput::default());

        assert_eq!(arena.figure(human).unwrap().score(), Some(2));
        assert_eq!(arena.bot_count(), 1);
        let spawned: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::BotSpawned { id } => Some(*id),
                GameEvent::Captured(_) => None,
            })
            .collect();
        assert_eq!(spawned.len(), 1);

        let bot = arena.figure(spawned[0]).unwrap();
        assert!(bot.rect.within(800, 600));
        assert_eq!(bot.velocity.abs(), IVec2::ONE);
    }

    #[test]
    fn test_human_steers_into_bot() {
        let mut arena = Arena::new(800, 600, Variant::Classic, 0);
        let human = arena
            .spawn_human(Color::GRAY, IVec2::new(100, 100), KeyBindings::WASD)
            .unwrap();
        arena.spawn_bot(Color::RED, IVec2::ZERO, IVec2::new(115, 100));

        let right = TickInput {
            pressed: [Key::D].into_iter().collect(),
        };
        // Gap of 5 pixels closes after 5 ticks, overlap on the 6th
        for _ in 0..5 {
            tick(&mut arena, &right);
            assert_eq!(arena.bot_count(), 1);
        }
        tick(&mut arena, &right);
        assert_eq!(arena.bot_count(), 0);
        assert_eq!(arena.figure(human).unwrap().position(), IVec2::new(106, 100));
    }

    #[test]
    fn test_resolve_without_moving() {
        let mut arena = Arena::new(800, 600, Variant::Versus, 5);
        arena
            .spawn_human(Color::GRAY, IVec2::new(200, 200), KeyBindings::WASD)
            .unwrap();
        let bot = arena.spawn_bot(Color::GREEN, IVec2::ONE, IVec2::new(205, 205));

        let events = resolve(&mut arena);

        // Nothing moved; the captured bot was replaced by a fresh one
        assert_eq!(arena.figures[0].position(), IVec2::new(200, 200));
        assert!(arena.figure(bot).is_none());
        assert_eq!(arena.bot_count(), 1);
        assert!(matches!(
            events.as_slice(),
            [GameEvent::Captured(c), GameEvent::BotSpawned { .. }] if c.bot_id == bot
        ));
    }

    #[test]
    fn test_versus_round_runs_deterministically() {
        let settings = Settings::default();
        let mut a = Arena::new_round(&settings, 99).unwrap();
        let mut b = Arena::new_round(&settings, 99).unwrap();

        let inputs = [
            TickInput::default(),
            TickInput {
                pressed: [Key::D, Key::Up].into_iter().collect(),
            },
            TickInput {
                pressed: [Key::S, Key::Left].into_iter().collect(),
            },
        ];
        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input);
            tick(&mut b, input);
        }
        assert_eq!(a.figures, b.figures);
        assert!(a.bot_count() >= 1);
        for figure in a.figures.iter().filter(|f| f.is_human()) {
            assert!(figure.rect.within(800, 600));
        }
    }
}
