//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into
//! `InputEvent`s. Keyboard only: the engine's consumers poll held-key state
//! once per logic tick.

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
