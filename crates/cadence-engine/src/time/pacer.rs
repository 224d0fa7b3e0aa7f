use std::time::{Duration, Instant};

use super::mode::DisplaySettings;

/// What the host loop should do next.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pace {
    /// Run an iteration now.
    Redraw,
    /// Sleep until the given deadline, then poll again.
    WaitUntil(Instant),
}

/// Iteration pacing for the host loop.
///
/// In display-sync mode every poll says [`Pace::Redraw`] and presentation does the
/// throttling. In fixed-step mode iterations are spaced by the target interval on
/// a deadline grid. A late deadline is honored once and the grid restarts from
/// `now`, so a slow frame never produces a run of back-to-back iterations.
#[derive(Debug, Clone)]
pub struct FramePacer {
    fixed_step: bool,
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            fixed_step: false,
            interval,
            next_deadline: None,
        }
    }

    /// Adopts the pacing half of `settings`.
    pub fn configure(&mut self, settings: &DisplaySettings) {
        if settings.fixed_step != self.fixed_step || settings.target_interval != self.interval {
            self.next_deadline = None;
        }
        self.fixed_step = settings.fixed_step;
        self.interval = settings.target_interval;
    }

    /// Whether an iteration is due at `now`. Does not schedule anything.
    pub fn peek(&self, now: Instant) -> Pace {
        match self.next_deadline {
            Some(deadline) if self.fixed_step && now < deadline => Pace::WaitUntil(deadline),
            _ => Pace::Redraw,
        }
    }

    /// Claims the iteration due at `now`.
    ///
    /// `Redraw` schedules the next deadline, so callers must run the iteration
    /// they were told to run. `WaitUntil` leaves the schedule alone; every
    /// iteration source, including platform-initiated redraws, goes through here.
    pub fn poll(&mut self, now: Instant) -> Pace {
        if !self.fixed_step {
            return Pace::Redraw;
        }

        match self.next_deadline {
            Some(deadline) if now < deadline => Pace::WaitUntil(deadline),
            Some(deadline) => {
                let next = deadline + self.interval;
                self.next_deadline = Some(if next > now { next } else { now + self.interval });
                Pace::Redraw
            }
            None => {
                self.next_deadline = Some(now + self.interval);
                Pace::Redraw
            }
        }
    }

    /// Deadline of the next fixed-step iteration, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIXTIETH: Duration = Duration::from_nanos(16_666_667);

    fn settings(fixed_step: bool) -> DisplaySettings {
        DisplaySettings {
            fixed_step,
            display_sync: !fixed_step,
            target_interval: SIXTIETH,
        }
    }

    #[test]
    fn display_sync_always_redraws() {
        let mut p = FramePacer::new(SIXTIETH);
        let t0 = Instant::now();
        assert_eq!(p.poll(t0), Pace::Redraw);
        assert_eq!(p.poll(t0), Pace::Redraw);
        assert_eq!(p.next_deadline(), None);
    }

    #[test]
    fn fixed_step_waits_for_deadline() {
        let mut p = FramePacer::new(SIXTIETH);
        p.configure(&settings(true));
        let t0 = Instant::now();

        assert_eq!(p.poll(t0), Pace::Redraw);
        assert_eq!(p.poll(t0 + Duration::from_millis(5)), Pace::WaitUntil(t0 + SIXTIETH));
        assert_eq!(p.poll(t0 + SIXTIETH), Pace::Redraw);
        assert_eq!(p.next_deadline(), Some(t0 + SIXTIETH * 2));
    }

    #[test]
    fn late_frame_does_not_burst() {
        let mut p = FramePacer::new(SIXTIETH);
        p.configure(&settings(true));
        let t0 = Instant::now();

        assert_eq!(p.poll(t0), Pace::Redraw);

        // Half a second late: one iteration, then wait a full interval.
        let late = t0 + Duration::from_millis(500);
        assert_eq!(p.poll(late), Pace::Redraw);
        assert_eq!(p.poll(late), Pace::WaitUntil(late + SIXTIETH));
    }

    #[test]
    fn peek_does_not_schedule() {
        let mut p = FramePacer::new(SIXTIETH);
        p.configure(&settings(true));
        let t0 = Instant::now();

        assert_eq!(p.peek(t0), Pace::Redraw);
        assert_eq!(p.next_deadline(), None);

        p.poll(t0);
        assert_eq!(p.peek(t0 + Duration::from_millis(5)), Pace::WaitUntil(t0 + SIXTIETH));
        assert_eq!(p.peek(t0 + SIXTIETH), Pace::Redraw);
        assert_eq!(p.next_deadline(), Some(t0 + SIXTIETH));
    }

    #[test]
    fn early_platform_redraws_are_refused() {
        let mut p = FramePacer::new(SIXTIETH);
        p.configure(&settings(true));
        let t0 = Instant::now();
        assert_eq!(p.poll(t0), Pace::Redraw);

        // A burst of resize-driven redraws inside one interval runs nothing.
        let mut admitted = 0;
        for ms in 1..16 {
            if p.poll(t0 + Duration::from_millis(ms)) == Pace::Redraw {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 0);
        assert_eq!(p.next_deadline(), Some(t0 + SIXTIETH));

        assert_eq!(p.poll(t0 + SIXTIETH), Pace::Redraw);
    }

    #[test]
    fn switching_mode_clears_schedule() {
        let mut p = FramePacer::new(SIXTIETH);
        p.configure(&settings(true));
        let t0 = Instant::now();
        p.poll(t0);
        assert!(p.next_deadline().is_some());

        p.configure(&settings(false));
        assert_eq!(p.next_deadline(), None);
        assert_eq!(p.poll(t0), Pace::Redraw);

        // Re-applying the same settings keeps the grid.
        p.configure(&settings(true));
        p.poll(t0);
        let deadline = p.next_deadline();
        p.configure(&settings(true));
        assert_eq!(p.next_deadline(), deadline);
    }
}
