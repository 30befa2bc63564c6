//! Headless canvas that records draw calls

use std::convert::Infallible;

use glam::Vec2;

use super::Canvas;

/// A single recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: String,
        line_width: f32,
    },
}

/// Canvas backend that never fails and keeps every call in order
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget calls from previous frames
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Centers of all filled circles, in draw order
    pub fn filled_centers(&self) -> Vec<Vec2> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Error = Infallible;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::FillRect {
            origin,
            size,
            color: color.to_owned(),
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color: color.to_owned(),
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: &str,
        line_width: f32,
    ) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::StrokeCircle {
            center,
            radius,
            color: color.to_owned(),
            line_width,
        });
        Ok(())
    }
}
