//! Time subsystem.
//!
//! Frame timing without coupling to the runtime:
//! - `FrameClock` produces one `ClockSample` per iteration
//! - `TimingController` turns samples into a 60 Hz tick signal and a measured
//!   frame rate, and owns the display-sync / fixed-step mode
//! - `FramePacer` turns the mode into host-loop wake-ups
//!
//! Everything here is single-threaded and infallible.

mod clock;
mod controller;
mod mode;
mod pacer;
mod sampler;
mod tick;

pub use clock::{ClockSample, FrameClock};
pub use controller::{TimingConfig, TimingController};
pub use mode::{DisplayBackend, DisplaySettings, FrameRateModeController, ModeState};
pub use pacer::{FramePacer, Pace};
pub use sampler::FrameRateSampler;
pub use tick::{StallPolicy, TickAccumulator, DEFAULT_TICK_SECONDS};
