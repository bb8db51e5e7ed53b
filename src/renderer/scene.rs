//! Per-frame scene drawing
//!
//! Layout follows the classic single-canvas screen: score counters near the
//! top, a dashed net down the middle, overlay text rows at fixed heights.

use glam::Vec2;

use super::Surface;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Ball, GamePhase, GameState, Paddle, Score, Side};

/// Overlay lines, with their x offset back from the surface center
const TITLE: (&str, f32) = ("Pong", 18.0);
const START_PROMPT: (&str, f32) = ("Click to start", 35.0);
const PAUSED: (&str, f32) = ("Paused", 16.0);
const CONTINUE_PROMPT: (&str, f32) = ("Click to continue", 35.0);
const WIN_MESSAGE: (&str, f32) = ("You Win!", 20.0);
const LOSE_MESSAGE: (&str, f32) = ("You Lose", 20.0);

impl Ball {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: &str) {
        surface.fill_circle(self.pos.x, self.pos.y, self.radius, color);
    }
}

impl Paddle {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: &str) {
        surface.fill_rect(self.pos.x, self.pos.y, self.width(), self.height(), color);
    }
}

impl Score {
    /// Player 1 near the left edge, player 2 mirrored near the right
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, surface_width: f32, color: &str) {
        surface.fill_text(&self.player1.to_string(), SCORE_MARGIN_X, SCORE_Y, color);
        surface.fill_text(
            &self.player2.to_string(),
            surface_width - SCORE_MARGIN_X,
            SCORE_Y,
            color,
        );
    }
}

/// Number of whole dash+gap periods that fit in `height`
pub fn net_dash_count(height: f32) -> u32 {
    (height / (NET_DASH_LENGTH + NET_DASH_GAP)).floor().max(0.0) as u32
}

/// Dashed vertical center line
pub fn draw_net<S: Surface + ?Sized>(surface: &mut S, size: Vec2, color: &str) {
    let period = NET_DASH_LENGTH + NET_DASH_GAP;
    let x = size.x / 2.0 - NET_WIDTH / 2.0;
    for i in 0..net_dash_count(size.y) {
        let y = i as f32 * period + NET_DASH_GAP / 2.0;
        surface.fill_rect(x, y, NET_WIDTH, NET_DASH_LENGTH, color);
    }
}

fn draw_overlay<S: Surface + ?Sized>(
    surface: &mut S,
    size: Vec2,
    headline: (&str, f32),
    prompt: (&str, f32),
    color: &str,
) {
    let center = size.x / 2.0;
    surface.fill_text(headline.0, center - headline.1, HEADLINE_Y, color);
    surface.fill_text(prompt.0, center - prompt.1, PROMPT_Y, color);
}

/// Draw one frame for the current phase
pub fn draw_scene<S: Surface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let palette = &settings.palette;
    let size = state.surface;

    surface.fill_rect(0.0, 0.0, size.x, size.y, &palette.background);

    if state.phase == GamePhase::StartScreen {
        draw_overlay(surface, size, TITLE, START_PROMPT, &palette.text);
        return;
    }

    state.score.draw(surface, size.x, &palette.score);

    if state.phase == GamePhase::GameOver {
        let message = match state.score.winner() {
            Some(Side::Left) => WIN_MESSAGE,
            _ => LOSE_MESSAGE,
        };
        draw_overlay(surface, size, message, CONTINUE_PROMPT, &palette.text);
        return;
    }

    draw_net(surface, size, &palette.net);
    state.player.draw(surface, &palette.paddle);
    state.computer.draw(surface, &palette.paddle);
    state.ball.draw(surface, &palette.ball);

    if state.phase == GamePhase::Paused {
        draw_overlay(surface, size, PAUSED, CONTINUE_PROMPT, &palette.text);
    }
}
