//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; the host owns it
//! and hands it to `tick` and `draw_scene`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first click
    StartScreen,
    /// Active gameplay
    Playing,
    /// Simulation frozen, field still drawn under an overlay
    Paused,
    /// A player reached the win score
    GameOver,
}

impl GamePhase {
    /// Phase reached by a pointer click.
    ///
    /// Leaving `GameOver` also needs a full reset, which `GameState::click` performs.
    pub fn after_click(self) -> Self {
        match self {
            GamePhase::StartScreen => GamePhase::Playing,
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::Playing,
        }
    }

    /// Only `Playing` advances the ball and the computer paddle
    pub fn is_simulating(self) -> bool {
        self == GamePhase::Playing
    }
}

/// Side of the court. Left is the human player, right is the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Movement policy of a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKind {
    /// Centered on the pointer, pinned to the left edge
    Player,
    /// Chases the ball on its own, pinned to the right edge
    Computer,
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_SPEED_X, BALL_START_SPEED_Y),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Serve from the middle of the surface.
    ///
    /// speed_x is kept, so the ball leaves toward whoever just scored.
    pub fn reset(&mut self, surface: Vec2, rng: &mut Pcg32) {
        self.pos = surface / 2.0;
        self.vel.y = rng.random_range(SERVE_SPEED_Y_MIN..SERVE_SPEED_Y_MAX) as f32;
    }
}

/// A paddle: an axis-aligned rectangle that only ever moves vertically
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub kind: PaddleKind,
    /// Top-left corner
    pub pos: Vec2,
    size: Vec2,
    /// Pixels per tick (computer paddle only)
    pub speed: f32,
}

impl Paddle {
    pub fn new(kind: PaddleKind, surface: Vec2) -> Self {
        let x = match kind {
            PaddleKind::Player => 0.0,
            PaddleKind::Computer => surface.x - PADDLE_THICKNESS,
        };
        Self {
            kind,
            pos: Vec2::new(x, surface.y / 2.0),
            size: Vec2::new(PADDLE_THICKNESS, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// True iff `y` lies strictly between the top and bottom edges
    pub fn is_collision(&self, y: f32) -> bool {
        y > self.top() && y < self.bottom()
    }

    /// Center the paddle on the pointer. Not clamped to the surface.
    pub fn follow_pointer(&mut self, pointer_y: f32) {
        self.pos.y = pointer_y - self.size.y / 2.0;
    }

    /// Step toward the ball, holding still while it is within one ball radius
    /// of the paddle center
    pub fn track(&mut self, ball: &Ball) {
        let center = self.center_y();
        if center + ball.radius < ball.pos.y {
            self.pos.y += self.speed;
        }
        if center - ball.radius > ball.pos.y {
            self.pos.y -= self.speed;
        }
    }
}

/// Points for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Human player (left)
    pub player1: u32,
    /// Computer (right)
    pub player2: u32,
}

impl Score {
    pub fn award(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.player1 += 1,
            Side::Right => self.player2 += 1,
        }
    }

    /// Side that has reached the win score, the human player first
    pub fn winner(&self) -> Option<Side> {
        if self.player1 >= WIN_SCORE {
            Some(Side::Left)
        } else if self.player2 >= WIN_SCORE {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Something worth reporting that happened during a tick or a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A paddle missed and the other side got a point
    Scored { scorer: Side, score: Score },
    /// The ball came off a paddle
    Returned { side: Side },
    /// A score reached the win threshold
    GameOver { winner: Side },
    /// A click switched screens
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was built from
    pub seed: u64,
    rng: Pcg32,
    /// Drawing surface dimensions
    pub surface: Vec2,
    pub phase: GamePhase,
    pub ball: Ball,
    pub player: Paddle,
    pub computer: Paddle,
    pub score: Score,
    /// Ticks spent in `Playing`
    pub time_ticks: u64,
}

impl GameState {
    /// Create a session on the start screen, with a freshly served ball
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let surface = Vec2::new(width, height);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            surface,
            phase: GamePhase::StartScreen,
            ball: Ball::default(),
            player: Paddle::new(PaddleKind::Player, surface),
            computer: Paddle::new(PaddleKind::Computer, surface),
            score: Score::default(),
            time_ticks: 0,
        };
        state.reset_game();
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.computer,
        }
    }

    /// Clear both scores and serve a new ball. The phase is left alone.
    pub fn reset_game(&mut self) {
        self.score.clear();
        self.reset_ball();
    }

    pub fn reset_ball(&mut self) {
        self.ball.reset(self.surface, &mut self.rng);
    }

    /// Pointer moved to `pointer_y` in surface coordinates
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        self.player.follow_pointer(pointer_y);
    }

    /// Apply a pointer click to the state machine
    pub fn click(&mut self) -> GameEvent {
        let from = self.phase;
        if from == GamePhase::GameOver {
            self.reset_game();
        }
        self.phase = from.after_click();
        log::info!("Phase {:?} -> {:?}", from, self.phase);
        GameEvent::PhaseChanged {
            from,
            to: self.phase,
        }
    }

    /// Award a point and end the game if it was the winning one
    pub(crate) fn award_point(&mut self, scorer: Side, events: &mut Vec<GameEvent>) {
        self.score.award(scorer);
        log::info!(
            "{:?} scores ({} - {})",
            scorer,
            self.score.player1,
            self.score.player2
        );
        events.push(GameEvent::Scored {
            scorer,
            score: self.score,
        });

        if let Some(winner) = self.score.winner() {
            self.phase = GamePhase::GameOver;
            log::info!("Game over, {:?} wins", winner);
            events.push(GameEvent::GameOver { winner });
        }
    }
}
