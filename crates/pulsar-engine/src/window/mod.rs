//! Window runtime.
//!
//! Wraps the winit event loop and drives the `core::App` lifecycle for the
//! single application window.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
