//! Collision pass: humans capture the bots they overlap
//!
//! Runs after every figure has moved. Captures are collected first and
//! applied afterwards so the figure list is never mutated mid-scan.

use std::collections::HashSet;

use super::state::Arena;

/// One human overlapping one bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    /// Figure ID of the capturing human
    pub human_id: u32,
    pub player_index: u32,
    /// Figure ID of the captured bot
    pub bot_id: u32,
}

/// Find every (capturer, captured) pair without changing the arena.
///
/// The capturer may be anything that is not a bot and the captured anything
/// that is not a human, which with two kinds means human-vs-bot only.
/// Humans never capture each other.
pub fn find_captures(arena: &Arena) -> Vec<Capture> {
    let mut captures = Vec::new();
    for figure1 in &arena.figures {
        let Some(human) = figure1.as_human() else {
            continue;
        };
        for figure2 in &arena.figures {
            if figure2.is_human() || figure1.id == figure2.id {
                continue;
            }
            if figure1.collided(figure2) {
                captures.push(Capture {
                    human_id: figure1.id,
                    player_index: human.player_index,
                    bot_id: figure2.id,
                });
            }
        }
    }
    captures
}

/// Score each capture and remove the captured bots.
///
/// A bot caught by two humans in the same tick scores for both and is
/// removed once.
pub fn apply_captures(arena: &mut Arena, captures: &[Capture]) {
    for capture in captures {
        if let Some(human) = arena
            .figure_mut(capture.human_id)
            .and_then(|f| f.as_human_mut())
        {
            human.score += 1;
        }
    }

    let removed: HashSet<u32> = captures.iter().map(|c| c.bot_id).collect();
    if !removed.is_empty() {
        arena.figures.retain(|f| !removed.contains(&f.id));
    }
}

/// Full collision pass; returns what was captured
pub fn check_collisions(arena: &mut Arena) -> Vec<Capture> {
    let captures = find_captures(arena);
    apply_captures(arena, &captures);
    for capture in &captures {
        log::debug!(
            "Player {} captured bot {}",
            capture.player_index,
            capture.bot_id
        );
    }
    captures
}
