use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by hosts.
///
/// Each iteration the runtime samples the clock, feeds the tick accumulator,
/// calls [`update`](App::update), counts the frame toward the measured rate, then
/// calls [`draw`](App::draw).
pub trait App {
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Simulation step. Gate fixed-cadence logic on [`FrameCtx::tick`].
    fn update(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Presentation step. Skipped when `update` asked to exit.
    fn draw(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
