//! Fixed-rate simulation tick
//!
//! The host scheduler calls [`tick`] once per frame, then draws.

use super::collision::{ball_paddle_contact, edge_buffer, in_left_band, in_right_band, past_wall};
use super::state::{GameEvent, GameState, Side};

/// Input gathered from pointer callbacks since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer y in surface coordinates
    pub pointer_y: Option<f32>,
    /// A pointer press happened
    pub click: bool,
}

/// Apply pending input, then advance the game by one tick.
///
/// Returns what happened, in order.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // The paddle follows the pointer on every screen, including pause
    if let Some(y) = input.pointer_y {
        state.pointer_moved(y);
    }

    if input.click {
        events.push(state.click());
    }

    update(state, &mut events);
    events
}

/// Advance the ball and the computer paddle. No-op outside `Playing`.
pub fn update(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.phase.is_simulating() {
        return;
    }

    state.time_ticks += 1;
    advance_ball(state, events);
    state.computer.track(&state.ball);
}

/// Move the ball one step, resolving side contacts and wall bounces first
fn advance_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    // Both bands use the player paddle width; the paddles are the same size
    let buffer = edge_buffer(state.ball.radius, state.player.width());

    if in_left_band(&state.ball, buffer) {
        resolve_side(state, Side::Left, events);
    }
    if in_right_band(&state.ball, buffer, state.surface.x) {
        resolve_side(state, Side::Right, events);
    }

    if past_wall(state.ball.pos.y, state.surface.y) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    state.ball.pos += state.ball.vel;
}

/// Bounce off the `side` edge and score if that side's paddle was not there
fn resolve_side(state: &mut GameState, side: Side, events: &mut Vec<GameEvent>) {
    let contact = ball_paddle_contact(state.ball.pos.y, state.paddle(side));
    state.ball.vel.x = -state.ball.vel.x;
    state.ball.vel.y = contact.deflection;

    if contact.hit {
        log::debug!(
            "{:?} paddle returns at y={:.1}, speed_y={:.1}",
            side,
            state.ball.pos.y,
            contact.deflection
        );
        events.push(GameEvent::Returned { side });
    } else {
        state.award_point(side.opponent(), events);
        state.reset_ball();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{GamePhase, Score};
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345, SURFACE_WIDTH, SURFACE_HEIGHT);
        state.click();
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_start_screen_ignores_ticks_until_click() {
        let mut state = GameState::new(12345, SURFACE_WIDTH, SURFACE_HEIGHT);
        let ball = state.ball.clone();

        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.ball, ball);
        assert_eq!(state.time_ticks, 0);

        let input = TickInput {
            click: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, ball.pos + ball.vel);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_return_reflects_without_scoring() {
        let mut state = playing_state();
        state.player.pos.y = 200.0;
        state.ball.pos = Vec2::new(4.0, 250.0);
        state.ball.vel = Vec2::new(-10.0, 3.0);

        let mut events = Vec::new();
        update(&mut state, &mut events);

        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.vel, Vec2::new(10.0, 0.0));
        assert_eq!(state.ball.pos, Vec2::new(14.0, 250.0));
        assert_eq!(events, vec![GameEvent::Returned { side: Side::Left }]);
    }

    #[test]
    fn test_small_ball_inside_seven_pixel_band_is_returned() {
        let mut state = playing_state();
        state.ball.radius = 4.0;
        state.player.pos.y = 200.0;
        state.ball.pos = Vec2::new(4.0, 250.0);
        state.ball.vel = Vec2::new(-10.0, 0.0);

        let mut events = Vec::new();
        update(&mut state, &mut events);
        assert_eq!(state.ball.vel.x, 10.0);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_player_miss_scores_for_computer() {
        let mut state = playing_state();
        state.player.pos.y = 200.0;
        state.ball.pos = Vec2::new(4.0, 150.0);
        state.ball.vel = Vec2::new(-10.0, 0.0);

        let mut events = Vec::new();
        update(&mut state, &mut events);

        assert_eq!(state.score, Score { player1: 0, player2: 1 });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            events,
            vec![GameEvent::Scored {
                scorer: Side::Right,
                score: Score { player1: 0, player2: 1 },
            }]
        );

        // Served from the center toward the computer, then moved once
        assert_eq!(state.ball.vel.x, 10.0);
        let center = state.surface / 2.0;
        assert_eq!(state.ball.pos, center + state.ball.vel);
    }

    #[test]
    fn test_computer_miss_scores_for_player() {
        let mut state = playing_state();
        state.computer.pos.y = 0.0;
        state.ball.pos = Vec2::new(SURFACE_WIDTH - 2.0, 500.0);
        state.ball.vel = Vec2::new(10.0, 0.0);

        let mut events = Vec::new();
        update(&mut state, &mut events);

        assert_eq!(state.score, Score { player1: 1, player2: 0 });
        assert_eq!(state.ball.vel.x, -10.0);
    }

    #[test]
    fn test_wall_bounce_flips_on_next_tick() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(400.0, SURFACE_HEIGHT - 4.0);
        state.ball.vel = Vec2::new(10.0, 6.0);

        let mut events = Vec::new();
        // Still inside: keeps going and ends up past the wall
        update(&mut state, &mut events);
        assert_eq!(state.ball.vel.y, 6.0);
        assert!(state.ball.pos.y > SURFACE_HEIGHT);

        // Outside: turns around
        update(&mut state, &mut events);
        assert_eq!(state.ball.vel.y, -6.0);
        assert_eq!(state.ball.pos.y, SURFACE_HEIGHT - 4.0);

        // Top wall
        state.ball.pos = Vec2::new(400.0, -1.0);
        state.ball.vel = Vec2::new(10.0, -3.0);
        update(&mut state, &mut events);
        assert_eq!(state.ball.vel.y, 3.0);
    }

    #[test]
    fn test_third_point_ends_game() {
        let mut state = playing_state();
        state.score.player2 = WIN_SCORE - 1;
        state.player.pos.y = 200.0;
        state.ball.pos = Vec2::new(4.0, 500.0);
        state.ball.vel = Vec2::new(-10.0, 0.0);

        let mut events = Vec::new();
        update(&mut state, &mut events);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score.player2, WIN_SCORE);
        assert!(events.contains(&GameEvent::GameOver { winner: Side::Right }));

        // Frozen until clicked
        let ball = state.ball.clone();
        let computer = state.computer.clone();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball, ball);
        assert_eq!(state.computer, computer);

        let input = TickInput {
            click: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, Score::default());
        assert_eq!(
            events[0],
            GameEvent::PhaseChanged {
                from: GamePhase::GameOver,
                to: GamePhase::Playing
            }
        );
    }

    #[test]
    fn test_pause_freezes_ball_but_not_player() {
        let mut state = playing_state();
        tick(&mut state, &TickInput::default());

        let pause = TickInput {
            click: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        let ball = state.ball.clone();
        let computer = state.computer.clone();
        let moved = TickInput {
            pointer_y: Some(123.0),
            click: false,
        };
        for _ in 0..10 {
            tick(&mut state, &moved);
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.computer, computer);
        assert_eq!(state.player.center_y(), 123.0);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.ball, ball);
    }

    #[test]
    fn test_computer_paddle_moves_after_ball() {
        let mut state = playing_state();
        state.computer.pos.y = 0.0;
        state.ball.pos = Vec2::new(400.0, 500.0);
        state.ball.vel = Vec2::new(1.0, 0.0);

        let mut events = Vec::new();
        update(&mut state, &mut events);
        assert_eq!(state.computer.top(), PADDLE_SPEED);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state();
        let mut b = playing_state();
        let inputs = [
            TickInput {
                pointer_y: Some(100.0),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                pointer_y: Some(420.0),
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            let ea = tick(&mut a, input);
            let eb = tick(&mut b, input);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
    }

    proptest! {
        #[test]
        fn prop_frozen_phases_do_not_simulate(
            phase_idx in 0usize..3,
            x in 0.0f32..800.0,
            y in -50.0f32..650.0,
            vx in -15.0f32..15.0,
            vy in -15.0f32..15.0,
            pointer in proptest::option::of(0.0f32..600.0),
        ) {
            let phase = [GamePhase::StartScreen, GamePhase::Paused, GamePhase::GameOver][phase_idx];
            let mut state = GameState::new(5, SURFACE_WIDTH, SURFACE_HEIGHT);
            state.phase = phase;
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);
            let ball = state.ball.clone();
            let computer = state.computer.clone();

            let events = tick(&mut state, &TickInput { pointer_y: pointer, click: false });
            prop_assert!(events.is_empty());
            prop_assert_eq!(&state.ball, &ball);
            prop_assert_eq!(&state.computer, &computer);
            prop_assert_eq!(state.phase, phase);
        }

        #[test]
        fn prop_score_grows_by_at_most_one_per_tick(
            pointer in 0.0f32..600.0,
            ticks in 1usize..400,
        ) {
            let mut state = playing_state();
            let input = TickInput { pointer_y: Some(pointer), click: false };
            for _ in 0..ticks {
                let before = state.score.player1 + state.score.player2;
                let events = tick(&mut state, &input);
                let after = state.score.player1 + state.score.player2;
                let scored = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::Scored { .. }))
                    .count() as u32;
                prop_assert_eq!(after - before, scored);
                prop_assert!(scored <= 1);
                if state.phase == GamePhase::GameOver {
                    prop_assert!(state.score.winner().is_some());
                    break;
                }
            }
        }
    }
}
