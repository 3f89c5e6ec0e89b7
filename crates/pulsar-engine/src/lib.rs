//! Pulsar engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo layer:
//! the window runtime, the wgpu device/surface, keyboard input, timing, and
//! the shader-program abstraction.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
