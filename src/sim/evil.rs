//! The evil circle: a player-steered outline that eats balls on contact

use glam::Vec2;

use super::ball::Ball;
use super::entity::{Collidable, Drawable};
use super::input::{ControlCommand, ControlMode};
use super::kinematics::{Bounds, Kinematic};
use super::state::LiveCount;
use crate::renderer::Canvas;

#[derive(Debug, Clone, PartialEq)]
pub struct EvilCircle {
    /// Velocity doubles as the per-keystroke step; unused in pointer mode
    pub kin: Kinematic,
    pub radius: f32,
    pub color: String,
    pub line_width: f32,
    mode: ControlMode,
}

impl EvilCircle {
    pub fn new(pos: Vec2, step: f32, radius: f32, color: impl Into<String>, mode: ControlMode) -> Self {
        Self {
            kin: Kinematic::new(pos, Vec2::splat(step)),
            radius,
            color: color.into(),
            line_width: crate::consts::EVIL_LINE_WIDTH,
            mode,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn pos(&self) -> Vec2 {
        self.kin.pos
    }

    /// Apply one control command, then clamp.
    ///
    /// Returns false if the command does not belong to this circle's mode.
    pub fn apply(&mut self, command: ControlCommand, bounds: Bounds) -> bool {
        if !command.applies_to(self.mode) {
            return false;
        }
        match command {
            ControlCommand::MoveTo(p) => self.kin.pos = p,
            ControlCommand::Nudge(dir) => self.kin.pos += dir.unit() * self.kin.vel,
        }
        self.clamp_to_bounds(bounds);
        true
    }

    /// Keep the whole circle on the canvas, each axis independently
    pub fn clamp_to_bounds(&mut self, bounds: Bounds) {
        self.kin.pos = bounds.clamp_circle(self.kin.pos, self.radius);
    }

    /// Eat every existing ball overlapping the circle.
    ///
    /// Each eaten ball is flagged and counted off `live` exactly once.
    /// Returns how many were eaten.
    pub fn detect_collisions(&self, balls: &mut [Ball], live: &mut LiveCount) -> u32 {
        let mut eaten = 0;
        for (i, ball) in balls.iter_mut().enumerate() {
            if ball.exists && self.overlaps(&*ball) {
                ball.exists = false;
                live.decrement();
                eaten += 1;
                log::debug!("Ball {} eaten, {} left", i, live.remaining());
            }
        }
        eaten
    }
}

impl Drawable for EvilCircle {
    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.stroke_circle(self.kin.pos, self.radius, &self.color, self.line_width)
    }
}

impl Collidable for EvilCircle {
    fn center(&self) -> Vec2 {
        self.kin.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
