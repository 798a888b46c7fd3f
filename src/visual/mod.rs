//! Decorative WebGL scenes and the machinery that keeps each one tied to
//! the lifetime of the section that shows it.

pub mod frame;
pub mod gl;
pub mod globe;
pub mod handle;
pub mod math;
pub mod orbs;
pub mod path;
pub mod ring;

pub use handle::{use_animation, Activation, AnimationOptions, PointerSource};

/// One self-contained scene. Owns its surface and GPU resources.
pub trait Scene {
    /// The container changed to this CSS size.
    fn resize(&mut self, width: f64, height: f64);

    /// Pointer moved over the tracked target, in normalized device coordinates.
    fn point_at(&mut self, _x: f32, _y: f32) {}

    /// Draws one frame. `elapsed` counts seconds since the first frame and
    /// `dt` seconds since the previous drawn frame.
    fn render(&mut self, elapsed: f32, dt: f32);
}
