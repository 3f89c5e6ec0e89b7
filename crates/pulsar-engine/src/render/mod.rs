//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and issue wgpu
//! commands against a [`RenderTarget`] using the handles in [`RenderCtx`].
//!
//! [`shader::ShaderProgram`] is the shader collaborator: it links a
//! vertex + fragment source pair into one pipeline and exposes name-keyed
//! uniform writes.

mod color;
mod ctx;
pub mod shader;

pub use color::Color;
pub use ctx::{RenderCtx, RenderTarget};
