//! One animation frame
//!
//! Order matters: queued input first, then the trail overlay, then every
//! live ball (draw, move, recolour), then the evil circle (draw, clamp, eat).

use super::ball::detect_ball_collisions;
use super::entity::Drawable;
use super::state::SimState;
use crate::renderer::Canvas;

/// What changed during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Balls eaten this tick
    pub eliminated: u32,
    /// Balls left afterwards
    pub remaining: u32,
}

/// Advance the simulation by one frame, drawing as it goes.
///
/// A canvas error aborts the tick immediately and is handed back to the
/// caller; the frame loop treats it as fatal.
pub fn tick<C: Canvas>(state: &mut SimState, canvas: &mut C) -> Result<TickReport, C::Error> {
    let bounds = state.bounds;

    for command in state.commands.drain() {
        state.evil.apply(command, bounds);
    }

    canvas.fill_rect(glam::Vec2::ZERO, bounds.size(), &state.trail_color)?;

    for i in 0..state.balls.len() {
        if !state.balls[i].exists {
            continue;
        }
        state.balls[i].draw(canvas)?;
        state.balls[i].advance(bounds);
        detect_ball_collisions(&mut state.balls, i, &mut state.rng);
    }

    state.evil.draw(canvas)?;
    state.evil.clamp_to_bounds(bounds);
    let eliminated = state.evil.detect_collisions(&mut state.balls, &mut state.live);

    state.ticks += 1;

    Ok(TickReport {
        eliminated,
        remaining: state.live.remaining(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RecordingCanvas};
    use crate::settings::Settings;
    use crate::sim::input::{ControlCommand, ControlMode, Direction};
    use crate::sim::kinematics::Bounds;
    use glam::Vec2;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn state(seed: u64) -> SimState {
        SimState::new(&Settings::default(), BOUNDS, seed)
    }

    /// Park the evil circle in a corner no ball occupies
    fn park_evil(state: &mut SimState) {
        state.evil.kin.pos = Vec2::new(10.0, 10.0);
        for b in &mut state.balls {
            if b.kin.pos.distance(Vec2::new(10.0, 10.0)) < 60.0 {
                b.kin.pos = Vec2::new(400.0, 300.0);
            }
        }
    }

    #[test]
    fn test_draw_order() {
        let mut s = state(1);
        park_evil(&mut s);
        let mut canvas = RecordingCanvas::new();
        tick(&mut s, &mut canvas).unwrap();

        assert!(matches!(
            canvas.calls.first(),
            Some(DrawCall::FillRect { color, .. }) if color == "rgba(0, 0, 0, 0.25)"
        ));
        assert!(matches!(canvas.calls.last(), Some(DrawCall::StrokeCircle { .. })));
        assert_eq!(canvas.filled_centers().len(), 25);
        assert_eq!(s.ticks, 1);
    }

    #[test]
    fn test_removed_ball_untouched_by_tick() {
        let mut s = state(2);
        park_evil(&mut s);
        // Overlap a removed ball with a live one so a scan would recolour it
        s.balls[0].exists = false;
        s.balls[1].kin.pos = s.balls[0].kin.pos;
        let before = s.balls[0].clone();

        let mut canvas = RecordingCanvas::new();
        tick(&mut s, &mut canvas).unwrap();

        assert_eq!(s.balls[0], before);
        assert_eq!(canvas.filled_centers().len(), 24);
    }

    #[test]
    fn test_pointer_command_applied_before_collision() {
        let mut s = state(3);
        s.balls[7].kin.vel = Vec2::ZERO;
        let target = s.balls[7].kin.pos;
        s.commands.push(ControlCommand::MoveTo(Vec2::new(5.0, 5.0)));
        s.commands.push(ControlCommand::MoveTo(target));

        let report = tick(&mut s, &mut RecordingCanvas::new()).unwrap();

        assert!(!s.balls[7].exists);
        assert!(report.eliminated >= 1);
        assert_eq!(report.remaining, 25 - report.eliminated);
        assert!(s.commands.is_empty());
    }

    #[test]
    fn test_keyboard_mode_ignores_pointer() {
        let settings = Settings {
            control_mode: ControlMode::Keyboard,
            ..Settings::default()
        };
        let mut s = SimState::new(&settings, BOUNDS, 4);
        s.evil.kin.pos = Vec2::new(400.0, 300.0);
        s.balls.clear();
        s.commands.push(ControlCommand::MoveTo(Vec2::new(50.0, 50.0)));
        s.commands.push(ControlCommand::Nudge(Direction::Right));

        tick(&mut s, &mut RecordingCanvas::new()).unwrap();
        assert_eq!(s.evil.pos(), Vec2::new(420.0, 300.0));
    }

    #[test]
    fn test_live_count_bounded_over_run() {
        let mut s = state(5);
        let mut canvas = RecordingCanvas::new();
        for i in 0..600 {
            let x = (i * 13 % 800) as f32;
            let y = (i * 7 % 600) as f32;
            s.commands.push(ControlCommand::MoveTo(Vec2::new(x, y)));
            let report = tick(&mut s, &mut canvas).unwrap();
            assert!(report.remaining <= 25);
            canvas.clear();
        }
        let gone = s.balls.iter().filter(|b| !b.exists).count() as u32;
        assert_eq!(s.live.remaining(), 25 - gone);
    }

    #[test]
    fn test_eat_k_balls_updates_label() {
        let mut s = state(6);
        park_evil(&mut s);
        assert_eq!(s.live.label(), "BALL COUNT: 25");

        // Freeze three balls in a spot and steer onto them
        let spot = Vec2::new(700.0, 500.0);
        for i in [2, 9, 17] {
            s.balls[i].kin.pos = spot;
            s.balls[i].kin.vel = Vec2::ZERO;
        }
        // Keep every other ball well clear of that spot
        for (i, b) in s.balls.iter_mut().enumerate() {
            if ![2, 9, 17].contains(&i) {
                b.kin.pos = Vec2::new(200.0, 200.0);
                b.kin.vel = Vec2::ZERO;
            }
        }

        let mut canvas = RecordingCanvas::new();
        tick(&mut s, &mut canvas).unwrap();
        assert_eq!(s.live.remaining(), 25);

        s.commands.push(ControlCommand::MoveTo(spot));
        let report = tick(&mut s, &mut canvas).unwrap();

        assert_eq!(report.eliminated, 3);
        assert_eq!(s.live.label(), "BALL COUNT: 22");
        assert_eq!(s.balls.iter().filter(|b| !b.exists).count(), 3);
    }

    #[test]
    fn test_determinism() {
        let mut a = state(77);
        let mut b = state(77);
        for _ in 0..50 {
            tick(&mut a, &mut RecordingCanvas::new()).unwrap();
            tick(&mut b, &mut RecordingCanvas::new()).unwrap();
        }
        assert_eq!(a.balls, b.balls);
        assert_eq!(a.live, b.live);
    }
}
