//! 2D rendering module
//!
//! The game draws through the [`Surface`] trait, which mirrors the three
//! canvas primitives it needs. The browser host backs it with a
//! `CanvasRenderingContext2d`; tests and the native build record into a [`DrawList`].

pub mod draw_list;
pub mod scene;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::{draw_net, draw_scene, net_dash_count};

/// A 2D drawing target
pub trait Surface {
    /// Filled axis-aligned rectangle with its top-left corner at (x, y)
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);

    /// Filled circle centered at (cx, cy)
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);

    /// Text with its baseline starting at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);
}
