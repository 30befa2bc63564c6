//! Control commands for the evil circle
//!
//! DOM callbacks only enqueue commands; the tick drains the queue before the
//! evil circle moves, so the latest pointer position always wins.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How the evil circle is steered. Chosen once, never switched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    /// Follows mouse and single-touch movement
    #[default]
    Pointer,
    /// Nudged by direction keys
    Keyboard,
}

impl ControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Pointer => "pointer",
            ControlMode::Keyboard => "keyboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value (WASD or arrows)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            "w" | "W" | "ArrowUp" => Some(Direction::Up),
            "s" | "S" | "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Unit step in canvas coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }
}

/// A single repositioning request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    /// Pointer or touch moved to this surface-local point
    MoveTo(Vec2),
    /// Direction key pressed
    Nudge(Direction),
}

impl ControlCommand {
    /// Whether this command can steer a circle in `mode`
    pub fn applies_to(&self, mode: ControlMode) -> bool {
        matches!(
            (self, mode),
            (ControlCommand::MoveTo(_), ControlMode::Pointer)
                | (ControlCommand::Nudge(_), ControlMode::Keyboard)
        )
    }
}

/// Translate client coordinates into surface-local ones using the
/// surface's bounding rectangle origin
#[inline]
pub fn surface_point(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

/// FIFO of pending commands
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<ControlCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: ControlCommand) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending command, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = ControlCommand> + '_ {
        self.pending.drain(..)
    }
}
