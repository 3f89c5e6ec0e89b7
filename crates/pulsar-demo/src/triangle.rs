//! The animated triangle: its vertex data, shader program, and per-frame draw.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use pulsar_engine::render::shader::{ProgramDesc, ShaderProgram, UniformDesc};
use pulsar_engine::render::{RenderCtx, RenderTarget};

/// Name of the color uniform rewritten every frame.
const COLOR_UNIFORM: &str = "ourColor";

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The triangle in normalized device coordinates.
const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5, 0.0] }, // bottom-left
    Vertex { position: [0.5, -0.5, 0.0] },  // bottom-right
    Vertex { position: [0.0, 0.5, 0.0] },   // top
];

/// Green channel of the pulsating color at `elapsed_secs`.
///
/// The divisor reproduces the original demo's literal `2.0 + 0.5` constant,
/// so the value oscillates in roughly `[-0.4, 0.4]` rather than `[0, 1]`.
/// Out-of-range values are clamped by the surface on output, not here.
pub fn pulse_green(elapsed_secs: f64) -> f32 {
    elapsed_secs.sin() as f32 / (2.0 + 0.5)
}

/// Full RGBA uniform value at `elapsed_secs`: only green animates.
pub fn pulse_color(elapsed_secs: f64) -> [f32; 4] {
    [0.0, pulse_green(elapsed_secs), 0.0, 1.0]
}

/// Owns the triangle's GPU resources: one immutable vertex buffer and one
/// shader program. Field order releases the buffer before the program.
pub struct TriangleRenderer {
    vertex_buffer: wgpu::Buffer,
    program: ShaderProgram,
}

impl TriangleRenderer {
    /// Uploads the static vertex data and compiles the shader pair.
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        // VERTEX-only usage: the data never changes after creation.
        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("triangle vbo"),
                contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let program = ShaderProgram::compile(
            ctx,
            &ProgramDesc {
                label: "triangle",
                vertex_src: include_str!("../shaders/triangle.vert.wgsl"),
                fragment_src: include_str!("../shaders/triangle.frag.wgsl"),
                vertex_layouts: &[Vertex::layout()],
                uniforms: &[UniformDesc::vec4(COLOR_UNIFORM)],
            },
        );

        Self {
            vertex_buffer,
            program,
        }
    }

    /// Draws the triangle with the color derived from `elapsed_secs`.
    ///
    /// Issues exactly one draw call: triangle-list, vertices `0..3`.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, elapsed_secs: f64) {
        // String-keyed lookup every frame, uncached; a missing uniform makes
        // the write a silent no-op.
        let location = self.program.uniform_location(COLOR_UNIFORM);
        self.program
            .set_vec4(ctx.queue, location, pulse_color(elapsed_secs));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.program.bind(&mut rpass);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    // ── pulse formula ─────────────────────────────────────────────────────

    #[test]
    fn green_starts_at_zero() {
        assert_relative_eq!(pulse_green(0.0), 0.0);
    }

    #[test]
    fn green_peaks_at_two_fifths() {
        assert_relative_eq!(pulse_green(PI / 2.0), 0.4, epsilon = 1e-6);
    }

    #[test]
    fn green_crosses_zero_at_pi() {
        assert_relative_eq!(pulse_green(PI), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn green_troughs_uncapped() {
        // The trough is passed through as-is; the surface clamps on write.
        assert_relative_eq!(pulse_green(3.0 * PI / 2.0), -0.4, epsilon = 1e-6);
    }

    #[test]
    fn green_is_periodic_in_two_pi() {
        for t in [0.0, 0.7, 1.5707963, 3.0, 5.9] {
            assert_relative_eq!(pulse_green(t), pulse_green(t + 2.0 * PI), epsilon = 1e-6);
        }
    }

    #[test]
    fn uniform_value_at_quarter_period() {
        let [r, g, b, a] = pulse_color(1.5707963);
        assert_relative_eq!(r, 0.0);
        assert_relative_eq!(g, 0.4, epsilon = 1e-6);
        assert_relative_eq!(b, 0.0);
        assert_relative_eq!(a, 1.0);
    }

    #[test]
    fn only_green_animates() {
        for t in [0.3, 1.1, 4.2] {
            let [r, _, b, a] = pulse_color(t);
            assert_eq!(r, 0.0);
            assert_eq!(b, 0.0);
            assert_eq!(a, 1.0);
        }
    }

    // ── vertex data ───────────────────────────────────────────────────────

    #[test]
    fn triangle_has_three_vertices() {
        assert_eq!(TRIANGLE_VERTICES.len(), 3);
        assert_eq!(
            std::mem::size_of_val(&TRIANGLE_VERTICES),
            9 * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn vertex_layout_is_tightly_packed_float32x3() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);

        let attr = &layout.attributes[0];
        assert_eq!(attr.shader_location, 0);
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x3);
    }
}
