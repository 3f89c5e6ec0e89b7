use anyhow::Result;
use winit::dpi::PhysicalSize;

use super::ctx::{FrameCtx, LoadCtx, UpdateCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo layer.
///
/// The runtime invokes the callbacks in causal order: `on_load` exactly once
/// after the window and GPU exist, then any interleaving of `on_update`,
/// `on_frame`, and `on_resize`, then `on_unload` exactly once.
pub trait App {
    /// Called once before any frame. Resource creation happens here;
    /// an `Err` is fatal and terminates the runtime.
    fn on_load(&mut self, ctx: &mut LoadCtx<'_, '_>) -> Result<()>;

    /// Called once per logic tick, before the frame is rendered.
    ///
    /// Returning [`AppControl::Exit`] requests window close; the runtime
    /// proceeds to teardown without rendering further frames.
    fn on_update(&mut self, ctx: &mut UpdateCtx<'_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called once per displayed frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called when the window's drawable size changed.
    ///
    /// Surface reconfiguration is handled by the runtime before this fires;
    /// the callback only observes the new size.
    fn on_resize(&mut self, new_size: PhysicalSize<u32>) {
        let _ = new_size;
    }

    /// Called once after the last frame, before the window is destroyed.
    fn on_unload(&mut self) {}
}
