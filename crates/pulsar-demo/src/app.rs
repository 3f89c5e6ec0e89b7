//! The demo application: sequences load, per-frame update, and teardown.

use anyhow::Result;
use winit::dpi::PhysicalSize;

use pulsar_engine::core::{App, AppControl, FrameCtx, LoadCtx, UpdateCtx};
use pulsar_engine::input::Key;
use pulsar_engine::render::Color;
use pulsar_engine::time::AnimationClock;

use crate::triangle::TriangleRenderer;

/// Fixed background color behind the triangle.
const CLEAR_COLOR: Color = Color::new(0.2, 0.3, 0.3, 1.0);

/// The pulsating-triangle app.
///
/// Owns the triangle's GPU resources and the animation clock. Both are
/// created exactly once in `on_load` and released exactly once in
/// `on_unload`; `Option` guards the single-shot transitions.
pub struct PulseApp {
    renderer: Option<TriangleRenderer>,
    clock: Option<AnimationClock>,
}

impl PulseApp {
    pub fn new() -> Self {
        Self {
            renderer: None,
            clock: None,
        }
    }
}

impl Default for PulseApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for PulseApp {
    fn on_load(&mut self, ctx: &mut LoadCtx<'_, '_>) -> Result<()> {
        let rctx = ctx.render_ctx();

        self.renderer = Some(TriangleRenderer::new(&rctx));

        // Diagnostic only; not used for control flow.
        log::debug!(
            "maximum number of vertex attributes supported: {}",
            rctx.device.limits().max_vertex_attributes
        );

        // Started here because on_load runs exactly once.
        self.clock = Some(AnimationClock::start());

        Ok(())
    }

    fn on_update(&mut self, ctx: &mut UpdateCtx<'_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (Some(renderer), Some(clock)) = (self.renderer.as_ref(), self.clock.as_ref()) else {
            return AppControl::Continue;
        };

        let elapsed = clock.elapsed_secs();

        ctx.render(CLEAR_COLOR, |rctx, target| {
            renderer.draw(rctx, target, elapsed);
        })
    }

    fn on_resize(&mut self, new_size: PhysicalSize<u32>) {
        // The runtime already reconfigured the surface; nothing else changes.
        log::trace!("resized to {}x{}", new_size.width, new_size.height);
    }

    fn on_unload(&mut self) {
        // Release exactly once, renderer (buffer, then program) before clock.
        self.renderer.take();
        self.clock.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsar_engine::input::{InputEvent, InputState, KeyState, Modifiers};
    use pulsar_engine::time::FrameClock;

    fn press(input: &mut InputState, key: Key) {
        input.apply_event(InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        });
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = PulseApp::new();
        let mut input = InputState::default();
        press(&mut input, Key::Escape);

        let mut ctx = UpdateCtx {
            input: &input,
            time: FrameClock::new().tick(),
        };
        assert_eq!(app.on_update(&mut ctx), AppControl::Exit);
    }

    #[test]
    fn other_keys_do_not_exit() {
        let mut app = PulseApp::new();
        let mut input = InputState::default();
        press(&mut input, Key::Space);

        let mut ctx = UpdateCtx {
            input: &input,
            time: FrameClock::new().tick(),
        };
        assert_eq!(app.on_update(&mut ctx), AppControl::Continue);
    }

    #[test]
    fn unload_before_load_is_a_no_op() {
        let mut app = PulseApp::new();
        app.on_unload();
        app.on_unload();
        assert!(app.renderer.is_none());
        assert!(app.clock.is_none());
    }

    #[test]
    fn clear_color_is_the_fixed_constant() {
        assert_eq!(CLEAR_COLOR.to_array(), [0.2, 0.3, 0.3, 1.0]);
    }
}
