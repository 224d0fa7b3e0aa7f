use std::time::{Duration, Instant};

/// One reading of the host clock, taken once per iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockSample {
    /// Seconds elapsed since the previous iteration.
    pub elapsed_seconds: f64,

    /// Seconds elapsed since the clock was created or last reset.
    pub total_elapsed_seconds: f64,

    /// Monotonic iteration counter.
    pub frame_index: u64,
}

impl ClockSample {
    /// Builds a sample from raw values. Mostly useful for hosts that own their own clock.
    pub fn new(elapsed_seconds: f64, total_elapsed_seconds: f64, frame_index: u64) -> Self {
        debug_assert!(elapsed_seconds >= 0.0);
        debug_assert!(total_elapsed_seconds >= 0.0);
        Self {
            elapsed_seconds,
            total_elapsed_seconds,
            frame_index,
        }
    }
}

/// Host clock producing `ClockSample`s.
///
/// One clock per window (or per loop) so that multi-window hosts do not share
/// delta state.
///
/// Deltas are passed through unmodified by default: a debugger break produces one
/// large delta and the timing core decides what to do with it. Hosts that prefer
/// bounded deltas can opt in with [`FrameClock::with_clamps`].
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    clamps: Option<(Duration, Duration)>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose baseline is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last: start,
            frame_index: 0,
            clamps: None,
        }
    }

    /// Creates a clock that clamps every delta into `[dt_min, dt_max]`.
    ///
    /// Only the per-iteration delta is clamped; the total keeps following wall time.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            clamps: Some((dt_min, dt_max)),
            ..Self::new()
        }
    }

    /// Resets the delta baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension. The
    /// total is left alone so that it stays monotonic.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Reads the clock now.
    pub fn sample(&mut self) -> ClockSample {
        self.sample_at(Instant::now())
    }

    /// Reads the clock as if the current time were `now`.
    ///
    /// Times earlier than the previous reading saturate to a zero delta.
    pub fn sample_at(&mut self, now: Instant) -> ClockSample {
        let mut dt = now.saturating_duration_since(self.last);

        if let Some((dt_min, dt_max)) = self.clamps {
            dt = dt.clamp(dt_min, dt_max);
        }

        if now > self.last {
            self.last = now;
        }

        let sample = ClockSample {
            elapsed_seconds: dt.as_secs_f64(),
            total_elapsed_seconds: self.last.saturating_duration_since(self.start).as_secs_f64(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        sample
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
