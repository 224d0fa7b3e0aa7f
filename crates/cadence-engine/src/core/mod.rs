//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and hosts: the `App`
//! trait and the per-iteration `FrameCtx` carrying the clock sample, the timing
//! controller and the window's display.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
