//! Simulation module
//!
//! All ball and evil-circle logic lives here. No DOM or platform access:
//! - Seeded RNG only
//! - Drawing goes through the `Canvas` trait
//! - Input arrives as queued commands

pub mod ball;
pub mod entity;
pub mod evil;
pub mod input;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use ball::{Ball, detect_ball_collisions};
pub use entity::{Collidable, Drawable, Entity};
pub use evil::EvilCircle;
pub use input::{CommandQueue, ControlCommand, ControlMode, Direction, surface_point};
pub use kinematics::{Bounds, Kinematic};
pub use state::{LiveCount, SimState};
pub use tick::{TickReport, tick};
