//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, and runs one timing iteration per
//! redraw: clock sample, tick, update, frame count, draw. Redraws are paced by
//! the window's `Display` according to the frame-rate mode.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
