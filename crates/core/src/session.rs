//! Session - owns the game state and decides how frame time becomes ticks.

use arrayvec::ArrayVec;

use crate::clock::FrameClock;
use crate::game_state::{GameEvent, GameState, TickOutcome, EVENT_CAPACITY};
use crate::types::{InputSnapshot, MAX_SUBSTEPS};

/// How frame time is turned into update ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimeStep {
    /// One tick per frame with the measured delta. Movement is frame-rate dependent.
    #[default]
    Variable,
    /// Whole ticks of `step_secs`, with the remainder carried to the next frame.
    Fixed { step_secs: f32 },
}

impl TimeStep {
    /// Fixed step of `ms` milliseconds; zero means variable.
    pub fn fixed_millis(ms: u32) -> Self {
        if ms == 0 {
            TimeStep::Variable
        } else {
            TimeStep::Fixed {
                step_secs: ms as f32 / 1000.0,
            }
        }
    }

    fn fixed_step(&self) -> Option<f32> {
        match *self {
            TimeStep::Fixed { step_secs } if step_secs.is_finite() && step_secs > 0.0 => {
                Some(step_secs)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    time_step: TimeStep,
    /// Unspent frame time under [`TimeStep::Fixed`].
    accumulator: f32,
    frames: u64,
}

impl Session {
    pub fn new(state: GameState, time_step: TimeStep) -> Self {
        Self {
            state,
            time_step,
            accumulator: 0.0,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn time_step(&self) -> TimeStep {
        self.time_step
    }

    /// Frames processed, counting the one that quit.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        self.state.take_events()
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Sample `clock` once and run a frame with that delta.
    pub fn advance(&mut self, input: &InputSnapshot, clock: &mut impl FrameClock) -> TickOutcome {
        let dt = clock.delta_secs();
        self.frame(input, dt)
    }

    /// Run one frame of `dt` seconds.
    ///
    /// Every frame runs at least one tick, so a mine press is never dropped. Under a
    /// fixed step the mine edge rides on the first tick only, and anything beyond
    /// `MAX_SUBSTEPS` whole steps is discarded.
    pub fn frame(&mut self, input: &InputSnapshot, dt: f32) -> TickOutcome {
        self.frames = self.frames.wrapping_add(1);
        if input.quit {
            return TickOutcome::Quit;
        }

        let Some(step) = self.time_step.fixed_step() else {
            return self.state.tick(input, dt);
        };

        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }
        let mut steps = (self.accumulator / step).floor() as u32;
        if steps > MAX_SUBSTEPS {
            steps = MAX_SUBSTEPS;
            self.accumulator = 0.0;
        } else {
            self.accumulator -= steps as f32 * step;
        }

        if steps == 0 {
            return self.state.tick(input, 0.0);
        }

        let mut held = *input;
        for _ in 0..steps {
            self.state.tick(&held, step);
            held.mine = false;
        }
        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::types::{Direction, PLAYER_START};

    fn session(time_step: TimeStep) -> Session {
        Session::new(GameState::with_treasure_rock(0), time_step)
    }

    #[test]
    fn test_variable_step_runs_one_tick_per_frame() {
        let mut s = session(TimeStep::Variable);
        let input = InputSnapshot::idle().with(Direction::Left);
        assert_eq!(s.frame(&input, 0.1), TickOutcome::Continue);
        assert_eq!(s.state().ticks(), 1);
        assert!((s.state().position().x + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_quit_stops_before_any_tick() {
        let mut s = session(TimeStep::fixed_millis(10));
        let input = InputSnapshot::idle().with(Direction::Up).quitting();
        assert_eq!(s.frame(&input, 1.0), TickOutcome::Quit);
        assert_eq!(s.state().ticks(), 0);
        assert_eq!(s.state().position(), PLAYER_START);
        assert_eq!(s.frames(), 1);
    }

    #[test]
    fn test_fixed_step_accumulates_partial_frames() {
        let mut s = session(TimeStep::fixed_millis(10));
        let idle = InputSnapshot::idle();

        // 4ms: no whole step, but a zero-length tick still runs.
        s.frame(&idle, 0.004);
        assert_eq!(s.state().ticks(), 1);

        // 4 + 17 = 21ms: two whole steps.
        s.frame(&idle, 0.017);
        assert_eq!(s.state().ticks(), 3);
    }

    #[test]
    fn test_fixed_step_caps_substeps() {
        let mut s = session(TimeStep::fixed_millis(10));
        s.frame(&InputSnapshot::idle(), 5.0);
        assert_eq!(s.state().ticks(), MAX_SUBSTEPS as u64);

        // Surplus was dropped rather than replayed.
        s.frame(&InputSnapshot::idle(), 0.0);
        assert_eq!(s.state().ticks(), MAX_SUBSTEPS as u64 + 1);
    }

    #[test]
    fn test_fixed_step_matches_variable_distance() {
        let input = InputSnapshot::idle().with(Direction::Left);
        let mut fixed = session(TimeStep::fixed_millis(10));
        let mut variable = session(TimeStep::Variable);
        for _ in 0..10 {
            fixed.frame(&input, 0.02);
            variable.frame(&input, 0.02);
        }
        let dx = fixed.state().position().x - variable.state().position().x;
        assert!(dx.abs() < 1e-4, "fixed and variable drifted by {dx}");
    }

    #[test]
    fn test_invalid_fixed_step_falls_back_to_variable() {
        let mut s = session(TimeStep::Fixed { step_secs: f32::NAN });
        s.frame(&InputSnapshot::idle(), 0.5);
        assert_eq!(s.state().ticks(), 1);
        assert_eq!(TimeStep::fixed_millis(0), TimeStep::Variable);
    }

    #[test]
    fn test_advance_samples_the_clock() {
        let mut s = session(TimeStep::Variable);
        let mut clock = FixedClock::from_millis(100);
        let input = InputSnapshot::idle().with(Direction::Left);
        s.advance(&input, &mut clock);
        s.advance(&input, &mut clock);
        assert!((s.state().position().x + 0.2).abs() < 1e-5);
    }
}
