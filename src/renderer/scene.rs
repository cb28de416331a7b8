//! Scene drawing: figure boxes and score labels

use glam::IVec2;

use crate::consts::LABEL_LINE_SPACING;
use crate::platform::Canvas;
use crate::sim::{Color, Figure, Human, PressedKeys};

/// Screen fill before each frame
pub const BACKGROUND: Color = Color::BLACK;
/// Score label text color
pub const LABEL_COLOR: Color = Color::WHITE;

/// "Player N: S"
pub fn score_label(human: &Human) -> String {
    format!("Player {}: {}", human.player_index, human.score)
}

/// Top-left of a player's score label: one text height in from the left,
/// stacked downward 1.2 text heights per player
pub fn label_position(text_height: i32, player_index: u32) -> IVec2 {
    let y = text_height as f32 * player_index as f32 * LABEL_LINE_SPACING;
    IVec2::new(text_height, y as i32)
}

/// Draw a figure's box, plus its score label for humans when `show_scores`
pub fn render_figure<C: Canvas + ?Sized>(canvas: &mut C, figure: &Figure, show_scores: bool) {
    canvas.fill_rect(figure.rect, figure.color);

    if !show_scores {
        return;
    }
    if let Some(human) = figure.as_human() {
        let pos = label_position(canvas.text_height(), human.player_index);
        canvas.draw_text(&score_label(human), pos, LABEL_COLOR);
    }
}

/// Render a figure where it stands, then move it for the next frame
pub fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    figure: &mut Figure,
    arena: IVec2,
    pressed: &PressedKeys,
    show_scores: bool,
) {
    render_figure(canvas, figure, show_scores);
    figure.advance(arena, pressed);
}
