//! Input subsystem.
//!
//! Public API does not expose winit types; `platform::winit` translates window
//! events into `InputEvent`s for the runtime. Only focus and keys are tracked:
//! the frame loop needs key-press edges for operator commands and nothing more.

mod frame;
mod state;
mod types;

pub(crate) mod platform {
    pub(crate) mod winit;
}

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
