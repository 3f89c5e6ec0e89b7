//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and the application layer. It avoids leaking runtime internals into user
//! code and provides a consistent context per lifecycle callback.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, LoadCtx, UpdateCtx, WindowCtx};
