use winit::window::{Window, WindowId};

use crate::device::{Display, SurfaceErrorAction};
use crate::input::{InputFrame, InputState, Key};
use crate::time::{ClockSample, ModeState, TimingController};

use super::app::AppControl;

/// Per-window handles.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Per-iteration context passed to `core::App`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Display<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub display: &'a mut Display<'w>,
    pub timing: &'a mut TimingController,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub sample: ClockSample,
}

impl FrameCtx<'_, '_> {
    /// Whether a logical tick occurred this iteration.
    pub fn tick(&self) -> bool {
        self.timing.tick_this_frame()
    }

    /// Fractional number of nominal ticks this iteration's delta spans.
    pub fn nominal_frames(&self) -> f64 {
        self.timing.nominal_frames(&self.sample)
    }

    pub fn frame_rate(&self) -> u32 {
        self.timing.frame_rate()
    }

    pub fn mode(&self) -> ModeState {
        self.timing.mode()
    }

    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.input_frame.was_key_pressed(key)
    }

    /// Switches fixed-step mode and applies it to this window's display.
    pub fn set_fixed_step(&mut self, enabled: bool) {
        self.timing.toggle_fixed_step(enabled, &mut *self.display);
    }

    /// Inverts fixed-step mode. Returns whether fixed step is now on.
    pub fn flip_fixed_step(&mut self) -> bool {
        self.timing.flip_fixed_step(&mut *self.display)
    }

    /// Clears the surface to `color` and presents it.
    pub fn clear(&mut self, color: wgpu::Color) -> AppControl {
        self.window.window.pre_present_notify();

        let err = match self.display.gpu().present_clear(color) {
            Ok(()) => return AppControl::Continue,
            Err(err) => err,
        };

        match self.display.gpu_mut().handle_surface_error(err.clone()) {
            SurfaceErrorAction::Fatal => {
                log::error!("surface lost beyond recovery: {err}");
                AppControl::Exit
            }
            action => {
                log::warn!("frame skipped ({action:?}): {err}");
                AppControl::Continue
            }
        }
    }
}
