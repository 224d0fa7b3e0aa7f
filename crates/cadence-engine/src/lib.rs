//! Cadence engine crate.
//!
//! A frame-loop front end: a fixed 60 Hz logical tick decoupled from the render
//! rate, a measured frame rate, and run-time switching between display-synced and
//! fixed-step presentation. `time` holds the platform-free core; the remaining
//! modules wire it to winit and wgpu.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod time;
pub mod window;
