//! Simulation state and the live ball count
//!
//! Everything a tick mutates lives in [`SimState`]; the frame loop owns it and
//! lends it to whichever step needs it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::entity::Entity;
use super::evil::EvilCircle;
use super::input::CommandQueue;
use super::kinematics::Bounds;
use crate::consts::COUNT_LABEL_PREFIX;
use crate::rng::random_int;
use crate::settings::Settings;

/// Balls still alive. Starts at the spawned count and only goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveCount {
    initial: u32,
    remaining: u32,
}

impl LiveCount {
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            remaining: initial,
        }
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Count one ball off; saturates at zero
    pub fn decrement(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Text shown in the page's count label
    pub fn label(&self) -> String {
        format!("{COUNT_LABEL_PREFIX}{}", self.remaining)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the RNG was built from
    pub seed: u64,
    pub rng: Pcg32,
    pub bounds: Bounds,
    /// Fixed-length; eaten balls stay with `exists == false`
    pub balls: Vec<Ball>,
    pub evil: EvilCircle,
    pub live: LiveCount,
    /// Commands queued by input callbacks since the last tick
    pub commands: CommandQueue,
    /// Overlay painted at the start of each tick
    pub trail_color: String,
    /// Ticks run so far
    pub ticks: u64,
}

impl SimState {
    /// Spawn the ball batch and the evil circle at random positions
    pub fn new(settings: &Settings, bounds: Bounds, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let balls: Vec<Ball> = (0..settings.ball_count)
            .map(|_| Ball::spawn(&mut rng, bounds, settings))
            .collect();

        let pos = Vec2::new(
            random_int(&mut rng, 0, bounds.width as i32) as f32,
            random_int(&mut rng, 0, bounds.height as i32) as f32,
        );
        let mut evil = EvilCircle::new(
            pos,
            settings.evil_step,
            settings.evil_radius,
            settings.evil_color.clone(),
            settings.control_mode,
        );
        evil.line_width = settings.evil_line_width;

        let live = LiveCount::new(balls.len() as u32);

        Self {
            seed,
            rng,
            bounds,
            balls,
            evil,
            live,
            commands: CommandQueue::new(),
            trail_color: settings.trail_color.clone(),
            ticks: 0,
        }
    }

    /// Balls not yet eaten
    pub fn existing_balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(|b| b.exists)
    }

    /// Every live entity: existing balls first, then the evil circle
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.existing_balls()
            .map(Entity::Ball)
            .chain(std::iter::once(Entity::Evil(&self.evil)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Collidable;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_new_state_reference_configuration() {
        let state = SimState::new(&Settings::default(), BOUNDS, 12345);
        assert_eq!(state.balls.len(), 25);
        assert_eq!(state.live.remaining(), 25);
        assert_eq!(state.live.label(), "BALL COUNT: 25");
        assert!(state.balls.iter().all(|b| b.exists));
        assert_eq!(state.evil.radius(), 10.0);
        assert_eq!(state.evil.kin.vel, Vec2::new(20.0, 20.0));
        assert!(state.commands.is_empty());
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = SimState::new(&Settings::default(), BOUNDS, 99);
        let b = SimState::new(&Settings::default(), BOUNDS, 99);
        assert_eq!(a.balls, b.balls);
        assert_eq!(a.evil.pos(), b.evil.pos());
    }

    #[test]
    fn test_live_count_saturates() {
        let mut live = LiveCount::new(1);
        live.decrement();
        live.decrement();
        assert_eq!(live.remaining(), 0);
        assert_eq!(live.initial(), 1);
        assert_eq!(live.label(), "BALL COUNT: 0");
    }

    #[test]
    fn test_entities_skip_eaten_balls() {
        let mut state = SimState::new(&Settings::default(), BOUNDS, 1);
        state.balls[0].exists = false;
        state.balls[3].exists = false;
        // 23 balls plus the evil circle
        assert_eq!(state.entities().count(), 24);
        assert!(matches!(state.entities().last(), Some(Entity::Evil(_))));
    }
}
