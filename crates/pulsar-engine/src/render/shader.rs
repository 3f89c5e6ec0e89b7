//! Shader program abstraction.
//!
//! A [`ShaderProgram`] links a vertex + fragment WGSL source pair into one
//! render pipeline and owns the program's uniform block: a single uniform
//! buffer bound at `@group(0) @binding(0)`, plus a name → location table.
//!
//! Each declared uniform occupies one 16-byte `vec4<f32>` slot; offsets are
//! assigned in declaration order, which must match the field order of the
//! uniform struct in the fragment source.

use std::collections::HashMap;

use crate::render::RenderCtx;

/// Size of one uniform slot. Every declared uniform is a `vec4<f32>`, which
/// also satisfies WGSL's 16-byte struct-member alignment.
const UNIFORM_SLOT_SIZE: u64 = 16;

/// Declaration of one named uniform in a program's uniform block.
#[derive(Debug, Copy, Clone)]
pub struct UniformDesc {
    pub name: &'static str,
}

impl UniformDesc {
    pub const fn vec4(name: &'static str) -> Self {
        Self { name }
    }
}

/// Everything needed to compile a [`ShaderProgram`].
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex_src: &'a str,
    pub fragment_src: &'a str,
    pub vertex_layouts: &'a [wgpu::VertexBufferLayout<'a>],
    pub uniforms: &'a [UniformDesc],
}

/// Resolved location of a named uniform: a byte offset into the program's
/// uniform buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformLocation {
    pub(crate) offset: u64,
}

/// A linked vertex + fragment pipeline with its uniform block.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,

    /// `None` when the program declares no uniforms.
    uniform_buffer: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,

    locations: HashMap<String, UniformLocation>,
}

impl ShaderProgram {
    /// Compiles the two shader stages and links them into one pipeline.
    ///
    /// Compile/link faults are reported through wgpu's own validation
    /// machinery; this layer does not classify them.
    pub fn compile(ctx: &RenderCtx<'_>, desc: &ProgramDesc<'_>) -> Self {
        let vertex_module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} vertex stage", desc.label)),
            source: wgpu::ShaderSource::Wgsl(desc.vertex_src.into()),
        });

        let fragment_module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} fragment stage", desc.label)),
            source: wgpu::ShaderSource::Wgsl(desc.fragment_src.into()),
        });

        let locations = assign_locations(desc.uniforms);
        let block_size = uniform_block_size(desc.uniforms.len());

        let layout = block_size.map(|size| {
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some(&format!("{} uniform bgl", desc.label)),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(size),
                        },
                        count: None,
                    }],
                })
        });

        let mut uniform_buffer = None;
        let mut bind_group = None;

        if let (Some(bgl), Some(size)) = (&layout, block_size) {
            let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("{} uniform buffer", desc.label)),
                size: size.get(),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{} bind group", desc.label)),
                layout: bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            }));

            uniform_buffer = Some(buffer);
        }

        let bind_group_layouts: Vec<&wgpu::BindGroupLayout> = layout.iter().collect();

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some(&format!("{} pipeline layout", desc.label)),
                    bind_group_layouts: &bind_group_layouts,
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&format!("{} pipeline", desc.label)),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &vertex_module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: desc.vertex_layouts,
                },

                fragment: Some(wgpu::FragmentState {
                    module: &fragment_module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            locations,
        }
    }

    /// Looks up the location of a named uniform.
    ///
    /// Returns `None` for names the program never declared.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.locations.get(name).copied()
    }

    /// Writes a 4-component float vector into the uniform block.
    ///
    /// A `None` location is a silent no-op, mirroring the classic GL
    /// sentinel-location contract for missing uniforms.
    pub fn set_vec4(
        &self,
        queue: &wgpu::Queue,
        location: Option<UniformLocation>,
        value: [f32; 4],
    ) {
        let (Some(buffer), Some(location)) = (self.uniform_buffer.as_ref(), location) else {
            return;
        };

        queue.write_buffer(buffer, location.offset, bytemuck::cast_slice(&value));
    }

    /// Binds the pipeline and uniform bind group on a render pass.
    ///
    /// Idempotent within a pass; safe to call before every draw.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        if let Some(bg) = self.bind_group.as_ref() {
            rpass.set_bind_group(0, bg, &[]);
        }
    }
}

/// Assigns each declared uniform a sequential vec4 slot, in declaration order.
fn assign_locations(uniforms: &[UniformDesc]) -> HashMap<String, UniformLocation> {
    uniforms
        .iter()
        .enumerate()
        .map(|(i, u)| {
            (
                u.name.to_string(),
                UniformLocation {
                    offset: i as u64 * UNIFORM_SLOT_SIZE,
                },
            )
        })
        .collect()
}

/// Total size of the uniform block, or `None` for uniform-free programs.
fn uniform_block_size(count: usize) -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(count as u64 * UNIFORM_SLOT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_uniform_resolves_to_offset_zero() {
        let table = assign_locations(&[UniformDesc::vec4("ourColor")]);
        assert_eq!(
            table.get("ourColor").copied(),
            Some(UniformLocation { offset: 0 })
        );
    }

    #[test]
    fn undeclared_name_resolves_to_none() {
        let table = assign_locations(&[UniformDesc::vec4("ourColor")]);
        assert_eq!(table.get("theirColor"), None);
    }

    #[test]
    fn multi_uniform_offsets_are_sequential_vec4_slots() {
        let table = assign_locations(&[
            UniformDesc::vec4("tint"),
            UniformDesc::vec4("highlight"),
            UniformDesc::vec4("shadow"),
        ]);
        assert_eq!(table.get("tint").unwrap().offset, 0);
        assert_eq!(table.get("highlight").unwrap().offset, 16);
        assert_eq!(table.get("shadow").unwrap().offset, 32);
    }

    #[test]
    fn block_size_covers_all_slots() {
        assert_eq!(uniform_block_size(0), None);
        assert_eq!(uniform_block_size(1).unwrap().get(), 16);
        assert_eq!(uniform_block_size(3).unwrap().get(), 48);
    }
}
