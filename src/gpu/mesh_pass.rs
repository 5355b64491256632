//! Indexed-mesh draw pass and the per-draw world uniform binding.

use glam::Mat4;
use wgpu::util::DeviceExt;

use super::mesh::WorldUniform;
use super::pipeline_helpers;

/// An indexed-mesh draw pass: pipeline, static vertex streams and indices.
pub struct MeshPass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffers: Vec<wgpu::Buffer>,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl MeshPass {
    /// Upload one buffer per vertex stream (slot order) plus the indices.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        pipeline: wgpu::RenderPipeline,
        streams: &[&[[f32; 3]]],
        indices: &[u32],
    ) -> Self {
        let vertex_buffers = streams
            .iter()
            .enumerate()
            .map(|(slot, &data)| {
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label} Vertices {slot}")),
                    contents: bytemuck::cast_slice(data),
                    usage: wgpu::BufferUsages::VERTEX,
                })
            })
            .collect();
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            pipeline,
            vertex_buffers,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// Set pipeline, vertex and index buffers, and draw.
    ///
    /// Caller must set bind groups before calling this.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        for (slot, buffer) in self.vertex_buffers.iter().enumerate() {
            render_pass.set_vertex_buffer(slot as u32, buffer.slice(..));
        }
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Uniform buffer holding one [`WorldUniform`] plus its bind group.
pub struct WorldBinding {
    buffer: wgpu::Buffer,
    /// Bind group for `@group(0) @binding(0)`.
    pub bind_group: wgpu::BindGroup,
}

impl WorldBinding {
    /// Layout shared by every pipeline's group 0.
    #[must_use]
    pub fn layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("World Uniform Layout"),
            entries: &[pipeline_helpers::uniform_buffer(0)],
        })
    }

    /// Allocate the buffer (initialized to identity) and bind it.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
    ) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::bytes_of(&WorldUniform::new(
                    Mat4::IDENTITY,
                )),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Bind Group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    /// Queue a new matrix. It lands before the next submission.
    pub fn write(&self, queue: &wgpu::Queue, world: Mat4) {
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::bytes_of(&WorldUniform::new(world)),
        );
    }
}
