//! Canvas Pong - the classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, score, game phases)
//! - `renderer`: Scene drawing against an abstract 2D surface
//! - `platform`: Browser canvas and pointer plumbing
//! - `settings`: Color palette and font preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{DrawCommand, DrawList, Surface, draw_scene};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed tick rate of the host scheduler
    pub const FPS: u32 = 30;
    /// Milliseconds between ticks
    pub const TICK_INTERVAL_MS: i32 = 1000 / FPS as i32;

    /// Default surface dimensions (the canvas decides at runtime)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// First player to reach this score wins
    pub const WIN_SCORE: u32 = 3;

    /// Paddle defaults (shared by both sides)
    pub const PADDLE_THICKNESS: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Computer paddle vertical speed, pixels per tick
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 50.0;
    pub const BALL_START_Y: f32 = 50.0;
    pub const BALL_START_SPEED_X: f32 = -10.0;
    pub const BALL_START_SPEED_Y: f32 = 10.0;
    /// Vertical speed gained per pixel of offset from the paddle center
    pub const DEFLECTION_FACTOR: f32 = 0.2;
    /// Serve speed_y is drawn from this half-open integer range
    pub const SERVE_SPEED_Y_MIN: i32 = -10;
    pub const SERVE_SPEED_Y_MAX: i32 = 10;

    /// Net layout
    pub const NET_DASH_LENGTH: f32 = 20.0;
    pub const NET_DASH_GAP: f32 = 20.0;
    pub const NET_WIDTH: f32 = 2.0;

    /// Score counters
    pub const SCORE_MARGIN_X: f32 = 100.0;
    pub const SCORE_Y: f32 = 100.0;

    /// Overlay text rows
    pub const HEADLINE_Y: f32 = 250.0;
    pub const PROMPT_Y: f32 = 300.0;
}
