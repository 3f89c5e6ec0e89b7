//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window, ticked once per presented frame
//! - one `AnimationClock` per animation timeline, started once and read per frame

mod animation_clock;
mod frame_clock;

pub use animation_clock::AnimationClock;
pub use frame_clock::{FrameClock, FrameTime};
