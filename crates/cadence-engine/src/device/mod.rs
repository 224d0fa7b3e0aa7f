//! GPU device + surface management.
//!
//! - `Gpu` creates the wgpu device and configures the window surface
//! - `Display` pairs it with a `FramePacer` and receives frame-rate mode changes
//!   as the timing subsystem's `DisplayBackend`

mod display;
mod gpu;

pub use display::{present_mode_for, Display};
pub use gpu::{Gpu, GpuInit, SurfaceErrorAction};
