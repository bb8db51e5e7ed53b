//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-size step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, ball_paddle_contact, edge_buffer, past_wall};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, PaddleKind, Score, Side};
pub use tick::{TickInput, tick, update};
