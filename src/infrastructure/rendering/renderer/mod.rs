//! WebGPU renderer for the aurora background.
//!
//! Owns the device, the configured canvas surface, the shader pipeline and
//! the quad/uniform buffers. One renderer per render session; nothing here is
//! shared or global.

use crate::domain::background::{AuroraUniforms, Viewport};
use crate::domain::errors::{RenderError, RenderResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::gpu_structures::{AURORA_SHADER, FULL_SCREEN_QUAD, QuadVertex};
use wgpu::util::DeviceExt;

mod initialization;
mod render_loop;

const COMPONENT: LogComponent = LogComponent::Gpu("AuroraRenderer");

pub struct AuroraRenderer {
    width: u32,
    height: u32,

    // WGPU state
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    // Rendering pipeline
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

impl AuroraRenderer {
    pub fn size(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Free GPU memory and the device now instead of waiting for the
    /// JavaScript garbage collector.
    pub fn release(self) {
        let Self {
            surface,
            device,
            queue,
            render_pipeline,
            vertex_buffer,
            uniform_buffer,
            uniform_bind_group,
            ..
        } = self;
        drop(uniform_bind_group);
        drop(render_pipeline);
        vertex_buffer.destroy();
        uniform_buffer.destroy();
        drop(surface);
        drop(queue);
        device.destroy();
        crate::log_debug!(COMPONENT, "GPU resources released");
    }
}
