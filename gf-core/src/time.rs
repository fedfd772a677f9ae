//! Fixed-timestep tick accumulation.
//!
//! The simulation runs at a fixed rate regardless of how fast frames
//! arrive: each frame's wall-clock duration is added to an accumulator,
//! which pays out whole ticks of [`TIMESTEP`] seconds. The fractional
//! remainder is exposed as an interpolation factor so a renderer can blend
//! between the last two simulation states.
//!
//! Frame durations are clamped to [`MAX_FRAME_TIME`] so a stall (debugger
//! pause, window drag) does not trigger a catch-up spiral of hundreds of
//! ticks.

/// Simulation timestep (s), 60 ticks per second.
pub const TIMESTEP: f64 = 1.0 / 60.0;

/// Upper bound on the frame time credited to the accumulator (s).
pub const MAX_FRAME_TIME: f64 = 0.1;

/// Converts variable frame durations into whole fixed ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickAccumulator {
    accumulated: f64,
}

impl TickAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one frame's duration and return how many fixed ticks to run.
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        self.accumulated += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        while self.accumulated >= TIMESTEP {
            self.accumulated -= TIMESTEP;
            ticks += 1;
        }
        ticks
    }

    /// Fraction of a tick left in the accumulator, in [0, 1).
    ///
    /// Blend factor between the previous and current simulation states.
    pub fn alpha(&self) -> f64 {
        self.accumulated / TIMESTEP
    }
}

// =============================================================================
// Tests
// =============================================================================
