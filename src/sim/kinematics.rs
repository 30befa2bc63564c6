//! Shared motion state for everything that moves on the canvas

use glam::Vec2;

/// Position and velocity, in canvas pixels and pixels/frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematic {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Kinematic {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Move by one frame of velocity
    #[inline]
    pub fn translate(&mut self) {
        self.pos += self.vel;
    }

    /// Point every velocity component back inside `bounds` for a circle of
    /// `radius` whose edge touches or crosses a wall.
    ///
    /// The sign is forced rather than toggled, so a circle resting on a wall
    /// does not flip direction every frame.
    pub fn reflect_within(&mut self, bounds: Bounds, radius: f32) {
        if self.pos.x + radius >= bounds.width {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.x - radius <= 0.0 {
            self.vel.x = self.vel.x.abs();
        }
        if self.pos.y + radius >= bounds.height {
            self.vel.y = -self.vel.y.abs();
        }
        if self.pos.y - radius <= 0.0 {
            self.vel.y = self.vel.y.abs();
        }
    }
}

/// Canvas dimensions, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamp `pos` so a circle of `radius` stays inside on both axes
    pub fn clamp_circle(&self, pos: Vec2, radius: f32) -> Vec2 {
        let mut out = pos;
        if out.x + radius >= self.width {
            out.x = self.width - radius;
        }
        if out.x - radius <= 0.0 {
            out.x = radius;
        }
        if out.y + radius >= self.height {
            out.y = self.height - radius;
        }
        if out.y - radius <= 0.0 {
            out.y = radius;
        }
        out
    }
}
