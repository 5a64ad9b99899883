//! Fixed-step frame clock
//!
//! Converts variable render-frame durations into a whole number of fixed
//! simulation steps. The step length itself never changes.

use particle_physics::FIXED_DT;

/// Upper bound on steps run for a single render frame
pub const MAX_STEPS_PER_FRAME: u32 = 4;

#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// Feed elapsed wall-clock seconds, get the number of steps to run now.
    /// Backlog beyond `MAX_STEPS_PER_FRAME` is discarded.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }

        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= self.step {
            log::debug!(
                "Frame clock dropping {:.1} ms of backlog",
                self.accumulator * 1000.0
            );
            self.accumulator %= self.step;
        }

        steps
    }

    /// Fraction of a step currently buffered
    pub fn pending(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_DT)
    }
}
