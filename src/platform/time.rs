//! Frame pacing
//!
//! `requestAnimationFrame` fires at whatever rate the display runs. The
//! physics constants are per-step values tuned for 60 Hz, so frame time is
//! banked in an accumulator and spent in whole fixed steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Slack so a 16.6 ms frame still counts as one 16.67 ms step
const STEP_EPSILON: f32 = 0.001;

/// Fixed-timestep accumulator
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame timestamp in milliseconds; returns how many steps to run
    ///
    /// The first frame always runs one step. Long gaps (tab switches) are
    /// clamped, and any backlog beyond `MAX_SUBSTEPS` is dropped.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(now_ms);

        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator + STEP_EPSILON >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }

        if steps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        steps
    }

    /// Forget the previous timestamp and any banked time
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frames(clock: &mut FixedStep, frame_ms: f64, frames: u32) -> u32 {
        let mut t = 1000.0;
        let mut total = 0;
        for _ in 0..frames {
            total += clock.advance(t);
            t += frame_ms;
        }
        total
    }

    #[test]
    fn test_first_frame_runs_one_step() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(12345.0), 1);
    }

    #[test]
    fn test_60hz_is_one_step_per_frame() {
        let mut clock = FixedStep::new();
        let mut t = 0.0;
        for _ in 0..600 {
            assert_eq!(clock.advance(t), 1);
            t += 1000.0 / 60.0;
        }
    }

    #[test]
    fn test_120hz_runs_60_steps_per_second() {
        let mut clock = FixedStep::new();
        let total = run_frames(&mut clock, 1000.0 / 120.0, 121);
        assert!((60..=61).contains(&total), "got {total}");
    }

    #[test]
    fn test_30hz_runs_two_steps_per_frame() {
        let mut clock = FixedStep::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(1000.0 / 30.0), 2);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut clock = FixedStep::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(5000.0), MAX_SUBSTEPS);
        // Backlog dropped: the next normal frame is a single step
        assert_eq!(clock.advance(5000.0 + 1000.0 / 60.0), 1);
    }

    #[test]
    fn test_clock_going_backwards_runs_nothing() {
        let mut clock = FixedStep::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FixedStep::new();
        clock.advance(0.0);
        clock.advance(10.0);
        clock.reset();
        assert_eq!(clock.advance(99999.0), 1);
    }
}
