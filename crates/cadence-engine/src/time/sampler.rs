/// Width of one measurement window, in seconds.
const WINDOW_SECONDS: f64 = 1.0;

/// Measures achieved iterations per wall-clock second.
///
/// The published rate is always the count of the last *completed* window, so it
/// lags real time by up to one second after a rate change.
///
/// The iteration that crosses a window boundary closes the old window and opens
/// the new one; it is counted in neither.
#[derive(Debug, Clone, Default)]
pub struct FrameRateSampler {
    frames_this_second: u32,
    second_boundary: f64,
    last_measured_rate: u32,
}

impl FrameRateSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one iteration at `total_elapsed_seconds`.
    ///
    /// Returns the newly published rate when this call closed a window.
    pub fn sample(&mut self, total_elapsed_seconds: f64) -> Option<u32> {
        if total_elapsed_seconds > self.second_boundary + WINDOW_SECONDS {
            self.last_measured_rate = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_boundary = total_elapsed_seconds;

            log::debug!("frame rate: {} Hz", self.last_measured_rate);
            return Some(self.last_measured_rate);
        }

        self.frames_this_second = self.frames_this_second.saturating_add(1);
        None
    }

    /// Rate of the last completed window.
    pub fn current_rate(&self) -> u32 {
        self.last_measured_rate
    }

    /// Iterations counted so far in the open window.
    pub fn frames_this_second(&self) -> u32 {
        self.frames_this_second
    }

    /// Start of the open window, in total elapsed seconds.
    pub fn second_boundary(&self) -> f64 {
        self.second_boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── window boundaries ─────────────────────────────────────────────────

    #[test]
    fn starts_at_zero() {
        let s = FrameRateSampler::new();
        assert_eq!(s.current_rate(), 0);
        assert_eq!(s.frames_this_second(), 0);
        assert_eq!(s.second_boundary(), 0.0);
    }

    #[test]
    fn publishes_on_the_sample_that_crosses() {
        let step = 1.000001 / 60.0;
        let mut s = FrameRateSampler::new();

        for k in 0..60 {
            assert_eq!(s.sample(k as f64 * step), None);
        }
        assert_eq!(s.frames_this_second(), 60);
        assert_eq!(s.current_rate(), 0);

        // 61st sample sits at 1.000001 s.
        assert_eq!(s.sample(60.0 * step), Some(60));
        assert_eq!(s.current_rate(), 60);
        assert_eq!(s.frames_this_second(), 0);
        assert_eq!(s.second_boundary(), 60.0 * step);
    }

    #[test]
    fn exactly_one_second_does_not_cross() {
        let mut s = FrameRateSampler::new();
        s.sample(0.5);
        assert_eq!(s.sample(1.0), None);
        assert_eq!(s.frames_this_second(), 2);
    }

    #[test]
    fn crossing_iteration_counts_in_neither_window() {
        let mut s = FrameRateSampler::new();
        for k in 1..=10 {
            s.sample(k as f64 * 0.1); // 0.1 .. 1.0
        }
        assert_eq!(s.sample(1.05), Some(10));

        // New window opens at 1.05; the crossing call itself was not counted.
        assert_eq!(s.frames_this_second(), 0);
        s.sample(1.5);
        assert_eq!(s.frames_this_second(), 1);
    }

    // ── lag ───────────────────────────────────────────────────────────────

    #[test]
    fn rate_only_changes_on_crossing_calls() {
        let mut s = FrameRateSampler::new();
        let mut total = 0.0;
        let mut last = s.current_rate();

        // Variable step: 30 Hz then 120 Hz.
        for i in 0..600 {
            total += if i < 200 { 1.0 / 30.0 } else { 1.0 / 120.0 };
            let crossing = total > s.second_boundary() + 1.0;
            let published = s.sample(total);
            assert_eq!(published.is_some(), crossing);
            if !crossing {
                assert_eq!(s.current_rate(), last);
            }
            last = s.current_rate();
        }
        assert!(last > 100, "rate after settling at 120 Hz: {last}");
    }

    #[test]
    fn long_gap_publishes_partial_window_once() {
        let mut s = FrameRateSampler::new();
        s.sample(0.1);
        s.sample(0.2);
        assert_eq!(s.sample(30.0), Some(2));
        assert_eq!(s.second_boundary(), 30.0);
    }
}
