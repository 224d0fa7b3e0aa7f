use std::time::Duration;

use super::tick::DEFAULT_TICK_SECONDS;

/// Frame-rate mode as seen by the host.
///
/// `fixed_step_enabled` and `display_sync_enabled` are always complements; the
/// fields are private so that no caller can observe them disagreeing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModeState {
    fixed_step_enabled: bool,
    display_sync_enabled: bool,
    target_interval_seconds: f64,
}

impl ModeState {
    fn new(fixed_step_enabled: bool, target_interval_seconds: f64) -> Self {
        Self {
            fixed_step_enabled,
            display_sync_enabled: !fixed_step_enabled,
            target_interval_seconds,
        }
    }

    pub fn fixed_step_enabled(&self) -> bool {
        self.fixed_step_enabled
    }

    pub fn display_sync_enabled(&self) -> bool {
        self.display_sync_enabled
    }

    pub fn target_interval_seconds(&self) -> f64 {
        self.target_interval_seconds
    }

    /// Settings to push to a backend.
    pub fn settings(&self) -> DisplaySettings {
        DisplaySettings {
            fixed_step: self.fixed_step_enabled,
            display_sync: self.display_sync_enabled,
            target_interval: Duration::from_secs_f64(self.target_interval_seconds),
        }
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(false, DEFAULT_TICK_SECONDS)
    }
}

/// One atomic batch of display settings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DisplaySettings {
    /// Host loop caps iterations to `target_interval`.
    pub fixed_step: bool,

    /// Presentation waits for the display's vertical blank.
    pub display_sync: bool,

    /// Iteration interval used while `fixed_step` is set.
    pub target_interval: Duration,
}

/// Graphics-side sink for display settings.
///
/// Implementations must commit every field of `settings` together. Failures are
/// the backend's own concern; the call is infallible from the caller's side.
pub trait DisplayBackend {
    fn apply_display_settings(&mut self, settings: DisplaySettings);
}

/// Owns the frame-rate mode and pushes it to a backend on every change.
#[derive(Debug, Clone, Default)]
pub struct FrameRateModeController {
    state: ModeState,
}

impl FrameRateModeController {
    /// Display-synchronized, 1/60 s target interval.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(fixed_step_enabled: bool, target_interval_seconds: f64) -> Self {
        debug_assert!(target_interval_seconds.is_finite() && target_interval_seconds > 0.0);
        Self {
            state: ModeState::new(fixed_step_enabled, target_interval_seconds),
        }
    }

    pub fn state(&self) -> ModeState {
        self.state
    }

    /// Sets fixed-step mode to `enabled` (display sync to its complement) and
    /// applies both to `backend` in one call.
    ///
    /// Repeating the current value re-applies identical settings.
    pub fn toggle(&mut self, enabled: bool, backend: &mut impl DisplayBackend) {
        if enabled != self.state.fixed_step_enabled {
            log::info!(
                "frame rate mode: {}",
                if enabled { "fixed step" } else { "display sync" }
            );
        }

        self.state = ModeState::new(enabled, self.state.target_interval_seconds);
        self.apply_current(backend);
    }

    /// Inverts fixed-step mode. Returns the new fixed-step flag.
    pub fn flip(&mut self, backend: &mut impl DisplayBackend) -> bool {
        let enabled = !self.state.fixed_step_enabled;
        self.toggle(enabled, backend);
        enabled
    }

    /// Pushes the current state without changing it.
    pub fn apply_current(&self, backend: &mut impl DisplayBackend) {
        backend.apply_display_settings(self.state.settings());
    }
}
