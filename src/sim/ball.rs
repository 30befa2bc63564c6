//! Bouncing balls
//!
//! A ball that has been eaten keeps its slot in the collection with
//! `exists == false`; it is never drawn, moved, or collided again.

use glam::Vec2;
use rand::Rng;

use super::entity::{Collidable, Drawable};
use super::kinematics::{Bounds, Kinematic};
use crate::renderer::Canvas;
use crate::rng::{Rgb, random_color, random_int};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub kin: Kinematic,
    pub color: Rgb,
    /// Fixed at creation
    pub radius: f32,
    /// Cleared for good once the evil circle touches the ball
    pub exists: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb, radius: f32) -> Self {
        Self {
            kin: Kinematic::new(pos, vel),
            color,
            radius,
            exists: true,
        }
    }

    /// Random ball fully inside `bounds`
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, settings: &Settings) -> Self {
        let size = random_int(rng, settings.ball_radius_min, settings.ball_radius_max);
        let x = random_int(rng, size, bounds.width as i32 - size);
        let y = random_int(rng, size, bounds.height as i32 - size);
        let vx = random_int(rng, -settings.ball_speed_max, settings.ball_speed_max);
        let vy = random_int(rng, -settings.ball_speed_max, settings.ball_speed_max);
        Self::new(
            Vec2::new(x as f32, y as f32),
            Vec2::new(vx as f32, vy as f32),
            random_color(rng),
            size as f32,
        )
    }

    /// Bounce off walls, then move one frame
    pub fn advance(&mut self, bounds: Bounds) {
        if !self.exists {
            return;
        }
        self.kin.reflect_within(bounds, self.radius);
        self.kin.translate();
    }
}

impl Drawable for Ball {
    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        if !self.exists {
            return Ok(());
        }
        canvas.fill_circle(self.kin.pos, self.radius, &self.color.to_string())
    }
}

impl Collidable for Ball {
    fn center(&self) -> Vec2 {
        self.kin.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Recolour ball `index` and every existing ball it overlaps.
///
/// Each overlapping pair shares one fresh random colour. Positions and
/// velocities are untouched. Returns the number of overlaps found.
pub fn detect_ball_collisions<R: Rng + ?Sized>(balls: &mut [Ball], index: usize, rng: &mut R) -> u32 {
    let Some(this) = balls.get(index) else {
        return 0;
    };
    if !this.exists {
        return 0;
    }

    let mut hits = 0;
    for other in 0..balls.len() {
        if other == index || !balls[other].exists {
            continue;
        }
        if balls[index].overlaps(&balls[other]) {
            let color = random_color(rng);
            balls[index].color = color;
            balls[other].color = color;
            hits += 1;
        }
    }
    hits
}
