//! Capabilities shared by balls and the evil circle

use glam::Vec2;

use super::ball::Ball;
use super::evil::EvilCircle;
use crate::renderer::Canvas;

/// Something that can paint itself onto a [`Canvas`]
pub trait Drawable {
    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error>;
}

/// A circle that can overlap other circles
pub trait Collidable {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;

    /// Strict overlap: center distance below the sum of radii
    fn overlaps<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        self.center().distance(other.center()) < self.radius() + other.radius()
    }
}

/// Either kind of entity, for callers that treat them uniformly
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Ball(&'a Ball),
    Evil(&'a EvilCircle),
}

impl Drawable for Entity<'_> {
    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        match self {
            Entity::Ball(b) => b.draw(canvas),
            Entity::Evil(e) => e.draw(canvas),
        }
    }
}

impl Collidable for Entity<'_> {
    fn center(&self) -> Vec2 {
        match self {
            Entity::Ball(b) => b.center(),
            Entity::Evil(e) => e.center(),
        }
    }

    fn radius(&self) -> f32 {
        match self {
            Entity::Ball(b) => b.radius(),
            Entity::Evil(e) => e.radius(),
        }
    }
}
