use std::time::Instant;

use crate::time::{DisplayBackend, DisplaySettings, FramePacer, Pace, DEFAULT_TICK_SECONDS};

use super::gpu::Gpu;

/// Present mode implementing the sync half of `settings`.
///
/// FIFO waits for vblank and is supported everywhere. `AutoNoVsync` lets wgpu pick
/// Immediate or Mailbox, falling back to FIFO when neither exists.
pub fn present_mode_for(settings: &DisplaySettings) -> wgpu::PresentMode {
    if settings.display_sync {
        wgpu::PresentMode::Fifo
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

/// A window's display backend: surface presentation plus loop pacing.
///
/// Both halves of a `DisplaySettings` land here in one call, so the present mode
/// and the fixed-step cap never disagree.
pub struct Display<'w> {
    gpu: Gpu<'w>,
    pacer: FramePacer,
}

impl<'w> Display<'w> {
    pub fn new(gpu: Gpu<'w>) -> Self {
        Self {
            gpu,
            pacer: FramePacer::new(std::time::Duration::from_secs_f64(DEFAULT_TICK_SECONDS)),
        }
    }

    pub fn gpu(&self) -> &Gpu<'w> {
        &self.gpu
    }

    pub fn gpu_mut(&mut self) -> &mut Gpu<'w> {
        &mut self.gpu
    }

    /// Whether an iteration is due at `now`, without claiming it.
    pub fn due(&self, now: Instant) -> Pace {
        self.pacer.peek(now)
    }

    /// Claims the iteration due at `now`. `WaitUntil` means the iteration must be
    /// skipped.
    pub fn admit(&mut self, now: Instant) -> Pace {
        self.pacer.poll(now)
    }
}

impl DisplayBackend for Display<'_> {
    fn apply_display_settings(&mut self, settings: DisplaySettings) {
        let mode = present_mode_for(&settings);
        log::debug!(
            "applying display settings: {mode:?}, fixed step {} @ {:?}",
            settings.fixed_step,
            settings.target_interval
        );

        self.pacer.configure(&settings);
        if self.gpu.present_mode() != mode {
            self.gpu.set_present_mode(mode);
        }
    }
}
