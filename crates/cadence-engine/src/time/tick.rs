/// Default logical tick length: 1/60 s.
pub const DEFAULT_TICK_SECONDS: f64 = 1.0 / 60.0;

/// What happens to carry beyond one threshold after a long delta.
///
/// Both policies report at most one tick per update.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum StallPolicy {
    /// Keep the excess; later updates tick once each until it is worked off.
    #[default]
    Retain,

    /// Drop whole thresholds beyond the consumed one, keeping only the fraction.
    Discard,
}

/// Converts variable elapsed time into a fixed-rate tick signal.
///
/// Elapsed time is accumulated into a carry. Each update consumes at most one
/// threshold from it and reports whether it did. There is no catch-up loop: a
/// stall is never turned into a burst of ticks.
#[derive(Debug, Clone)]
pub struct TickAccumulator {
    carry: f64,
    threshold: f64,
    policy: StallPolicy,
}

impl TickAccumulator {
    /// 60 Hz accumulator with the retaining stall policy.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_TICK_SECONDS)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        debug_assert!(threshold.is_finite() && threshold > 0.0);
        Self {
            carry: 0.0,
            threshold,
            policy: StallPolicy::Retain,
        }
    }

    pub fn with_policy(mut self, policy: StallPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds `elapsed_seconds` and reports whether a tick occurred.
    pub fn update(&mut self, elapsed_seconds: f64) -> bool {
        debug_assert!(elapsed_seconds >= 0.0);

        self.carry += elapsed_seconds;
        if self.carry < self.threshold {
            return false;
        }

        self.carry -= self.threshold;

        if self.carry >= self.threshold {
            log::debug!(
                "stall: {:.3}s of carry left after tick ({:?})",
                self.carry,
                self.policy
            );
            if self.policy == StallPolicy::Discard {
                self.carry %= self.threshold;
            }
        }

        true
    }

    /// Number of nominal ticks `elapsed_seconds` spans, fractional.
    pub fn nominal_frames(&self, elapsed_seconds: f64) -> f64 {
        elapsed_seconds / self.threshold
    }

    pub fn carry(&self) -> f64 {
        self.carry
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn policy(&self) -> StallPolicy {
        self.policy
    }
}

impl Default for TickAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const T: f64 = DEFAULT_TICK_SECONDS;

    // ── basic cadence ─────────────────────────────────────────────────────

    #[test]
    fn below_threshold_accumulates() {
        let mut acc = TickAccumulator::new();
        assert!(!acc.update(T / 4.0));
        assert!(!acc.update(T / 4.0));
        assert!((acc.carry() - T / 2.0).abs() < 1e-12);
    }

    #[test]
    fn exact_threshold_ticks_every_call() {
        let mut acc = TickAccumulator::new();
        for _ in 0..120 {
            assert!(acc.update(T));
            assert_eq!(acc.carry(), 0.0);
        }
    }

    #[test]
    fn fraction_carries_into_next_tick() {
        let mut acc = TickAccumulator::new();
        // 144 Hz display: roughly every 2.4 frames tick once.
        let dt = 1.0 / 144.0;
        let ticks = (0..144).filter(|_| acc.update(dt)).count();
        assert!((59..=60).contains(&ticks), "got {ticks}");
        assert!(acc.carry() < T);
    }

    #[test]
    fn zero_delta_never_ticks() {
        let mut acc = TickAccumulator::new();
        assert!(!acc.update(0.0));
        assert_eq!(acc.carry(), 0.0);
    }

    // ── stalls ────────────────────────────────────────────────────────────

    #[test]
    fn large_delta_yields_one_tick_and_retains_excess() {
        let mut acc = TickAccumulator::new();
        assert!(acc.update(10.0));
        assert!((acc.carry() - (10.0 - T)).abs() < 1e-9);

        // Retained carry drains at one tick per call, never more.
        assert!(acc.update(0.0));
        assert!(acc.update(0.0));
    }

    #[test]
    fn large_delta_with_discard_keeps_only_fraction() {
        let mut acc = TickAccumulator::new().with_policy(StallPolicy::Discard);
        assert!(acc.update(10.0));
        assert!(acc.carry() >= 0.0 && acc.carry() < T);
        assert!(!acc.update(0.0));
    }

    #[test]
    fn discard_permanently_loses_stalled_time() {
        let mut acc = TickAccumulator::new().with_policy(StallPolicy::Discard);
        let mut ticks = 0;
        if acc.update(1.0) {
            ticks += 1;
        }
        for _ in 0..60 {
            if acc.update(T) {
                ticks += 1;
            }
        }
        // 2 s of wall time, but logical time fell behind by ~59 ticks.
        assert!(ticks <= 62);
        assert!(ticks >= 60);
    }

    // ── helpers ───────────────────────────────────────────────────────────

    #[test]
    fn nominal_frames_scales_by_threshold() {
        let acc = TickAccumulator::new();
        assert!((acc.nominal_frames(T) - 1.0).abs() < 1e-12);
        assert!((acc.nominal_frames(T / 2.0) - 0.5).abs() < 1e-12);
        assert!((acc.nominal_frames(0.1) - 6.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn tick_count_tracks_total_time(deltas in prop::collection::vec(0.0..=T, 0..600)) {
            let mut acc = TickAccumulator::new();
            let ticks = deltas.iter().filter(|&&dt| acc.update(dt)).count() as i64;
            let total: f64 = deltas.iter().sum();
            let expected = (total / T).floor() as i64;
            prop_assert!((ticks - expected).abs() <= 1, "ticks={} expected={}", ticks, expected);
        }

        #[test]
        fn never_more_than_one_tick_per_update(
            deltas in prop::collection::vec(0.0f64..20.0, 1..50),
            discard in any::<bool>(),
        ) {
            let policy = if discard { StallPolicy::Discard } else { StallPolicy::Retain };
            let mut acc = TickAccumulator::new().with_policy(policy);
            let mut ticks = 0usize;
            for &dt in &deltas {
                if acc.update(dt) {
                    ticks += 1;
                }
                prop_assert!(acc.carry() >= 0.0);
                if discard {
                    prop_assert!(acc.carry() < T);
                }
            }
            prop_assert!(ticks <= deltas.len());
        }
    }
}
