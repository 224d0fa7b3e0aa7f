use anyhow::{ensure, Result};

use super::clock::ClockSample;
use super::mode::{DisplayBackend, FrameRateModeController, ModeState};
use super::sampler::FrameRateSampler;
use super::tick::{StallPolicy, TickAccumulator, DEFAULT_TICK_SECONDS};

/// Startup configuration for the timing subsystem.
#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Logical tick rate.
    pub tick_rate_hz: f64,

    /// Iteration interval used in fixed-step mode, in seconds.
    pub target_interval_seconds: f64,

    /// Start in fixed-step mode instead of display sync.
    pub fixed_step: bool,

    pub stall_policy: StallPolicy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            target_interval_seconds: DEFAULT_TICK_SECONDS,
            fixed_step: false,
            stall_policy: StallPolicy::Retain,
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0,
            "tick rate must be a positive number of Hz, got {}",
            self.tick_rate_hz
        );
        ensure!(
            self.target_interval_seconds.is_finite() && self.target_interval_seconds > 0.0,
            "fixed-step target interval must be a positive number of seconds, got {}",
            self.target_interval_seconds
        );
        Ok(())
    }
}

/// Per-loop timing state: tick signal, measured rate and frame-rate mode.
///
/// Owned by the host loop and lent to whoever needs it for the current iteration.
/// Within one iteration call [`tick`](Self::tick) first, run the update logic,
/// then call [`record_frame`](Self::record_frame) before drawing.
#[derive(Debug, Clone)]
pub struct TimingController {
    accumulator: TickAccumulator,
    sampler: FrameRateSampler,
    mode: FrameRateModeController,
    tick_this_frame: bool,
}

impl TimingController {
    pub fn new() -> Self {
        Self::from_config(&TimingConfig::default())
    }

    /// Builds a controller from a validated config.
    pub fn from_config(config: &TimingConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        Self {
            accumulator: TickAccumulator::with_threshold(1.0 / config.tick_rate_hz)
                .with_policy(config.stall_policy),
            sampler: FrameRateSampler::new(),
            mode: FrameRateModeController::with_state(
                config.fixed_step,
                config.target_interval_seconds,
            ),
            tick_this_frame: false,
        }
    }

    /// Feeds this iteration's delta to the accumulator.
    pub fn tick(&mut self, sample: &ClockSample) -> bool {
        self.tick_this_frame = self.accumulator.update(sample.elapsed_seconds);
        self.tick_this_frame
    }

    /// Counts this iteration toward the measured rate.
    ///
    /// Returns the newly published rate when this iteration closed a second.
    pub fn record_frame(&mut self, sample: &ClockSample) -> Option<u32> {
        self.sampler.sample(sample.total_elapsed_seconds)
    }

    /// Result of the latest [`tick`](Self::tick) call.
    pub fn tick_this_frame(&self) -> bool {
        self.tick_this_frame
    }

    /// Measured iterations per second over the last completed second.
    pub fn frame_rate(&self) -> u32 {
        self.sampler.current_rate()
    }

    pub fn frame_rate_label(&self) -> String {
        format!("Frame Rate: {} Hz", self.frame_rate())
    }

    /// How many nominal ticks this sample's delta spans, fractional.
    ///
    /// Useful for scaling continuous motion that is not gated on the tick.
    pub fn nominal_frames(&self, sample: &ClockSample) -> f64 {
        self.accumulator.nominal_frames(sample.elapsed_seconds)
    }

    pub fn mode(&self) -> ModeState {
        self.mode.state()
    }

    pub fn toggle_fixed_step(&mut self, enabled: bool, backend: &mut impl DisplayBackend) {
        self.mode.toggle(enabled, backend);
    }

    /// Inverts the mode. Returns whether fixed step is now on.
    pub fn flip_fixed_step(&mut self, backend: &mut impl DisplayBackend) -> bool {
        self.mode.flip(backend)
    }

    /// Pushes the current mode to a freshly created backend.
    pub fn apply_mode(&self, backend: &mut impl DisplayBackend) {
        self.mode.apply_current(backend);
    }

    pub fn accumulator(&self) -> &TickAccumulator {
        &self.accumulator
    }

    pub fn sampler(&self) -> &FrameRateSampler {
        &self.sampler
    }
}

impl Default for TimingController {
    fn default() -> Self {
        Self::new()
    }
}
