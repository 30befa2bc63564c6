//! Canvas drawing seam
//!
//! The simulation only ever talks to [`Canvas`]. In the browser this is backed
//! by a 2D rendering context; tests and the native binary use a recorder.

pub mod recorder;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use recorder::{DrawCall, RecordingCanvas};
#[cfg(target_arch = "wasm32")]
pub use web::WebCanvas;

use glam::Vec2;

/// Minimal 2D drawing surface
///
/// Colours are CSS colour strings. Any error is fatal to the frame loop.
pub trait Canvas {
    type Error;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) -> Result<(), Self::Error>;

    /// Fill a full circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), Self::Error>;

    /// Stroke a full circle outline
    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: &str,
        line_width: f32,
    ) -> Result<(), Self::Error>;
}
