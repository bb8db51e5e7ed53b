//! Platform abstraction layer
//!
//! Handles browser specifics for:
//! - Pointer coordinates (client space to surface space)
//! - The canvas 2D context as a [`crate::Surface`]

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

/// Map a pointer position from client coordinates to surface coordinates.
///
/// `surface_origin` is the canvas bounding rect's top-left corner and
/// `scroll` the document's scroll offset.
pub fn pointer_to_surface(client: Vec2, surface_origin: Vec2, scroll: Vec2) -> Vec2 {
    client - surface_origin - scroll
}
