//! Evil Circle - bouncing balls on a canvas
//!
//! Core modules:
//! - `sim`: Platform-free simulation (balls, evil circle, input commands, tick)
//! - `renderer`: Canvas drawing seam (2D context on web, recorder for tests)
//! - `rng`: Bounded random integers and colours
//! - `settings`: Read-only configuration

pub mod renderer;
pub mod rng;
pub mod settings;
pub mod sim;

pub use rng::{Rgb, random_color, random_int};
pub use settings::{Settings, SettingsError};

/// Reference configuration constants
pub mod consts {
    /// Balls spawned at startup
    pub const BALL_COUNT: usize = 25;

    /// Ball radius range (inclusive, pixels)
    pub const BALL_RADIUS_MIN: i32 = 10;
    pub const BALL_RADIUS_MAX: i32 = 20;
    /// Ball velocity components are drawn from [-BALL_SPEED_MAX, BALL_SPEED_MAX] px/frame
    pub const BALL_SPEED_MAX: i32 = 7;

    /// Evil circle defaults
    pub const EVIL_RADIUS: f32 = 10.0;
    /// Per-keystroke step in keyboard mode (pixels)
    pub const EVIL_STEP: f32 = 20.0;
    pub const EVIL_LINE_WIDTH: f32 = 3.0;
    pub const EVIL_COLOR: &str = "white";

    /// Translucent overlay painted each frame; leaves motion trails
    pub const TRAIL_COLOR: &str = "rgba(0, 0, 0, 0.25)";

    /// Prefix of the live count label
    pub const COUNT_LABEL_PREFIX: &str = "BALL COUNT: ";
}
