//! One frame's worth of GPU targets, handed to the cube renderer.

use glam::Mat4;

use super::render_context::RenderContext;
use super::resources::CubeResources;
use crate::cube::{CubeFace, FrameTargets};

/// Convert an RGBA option value into a clear color.
#[must_use]
pub fn clear_color(rgba: [f32; 4]) -> wgpu::Color {
    let [r, g, b, a] = rgba.map(f64::from);
    wgpu::Color { r, g, b, a }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Face { face: CubeFace, resolution: u32 },
    Viewport { width: u32, height: u32 },
}

/// GPU implementation of [`FrameTargets`].
///
/// Every [`pass`](Self::pass) is encoded and submitted on its own, so a
/// uniform written with `queue.write_buffer` just before a pass is the value
/// that pass sees.
pub struct GpuFrame<'a> {
    context: &'a RenderContext,
    resources: &'a CubeResources,
    surface_view: &'a wgpu::TextureView,
    environment_clear: wgpu::Color,
    bound: Bound,
}

impl<'a> GpuFrame<'a> {
    /// Start a frame drawing into `surface_view`. The window is bound
    /// initially.
    #[must_use]
    pub fn new(
        context: &'a RenderContext,
        resources: &'a CubeResources,
        surface_view: &'a wgpu::TextureView,
        environment_clear: wgpu::Color,
    ) -> Self {
        let (width, height) = context.size();
        Self {
            context,
            resources,
            surface_view,
            environment_clear,
            bound: Bound::Viewport { width, height },
        }
    }

    /// Queue for uniform uploads ahead of the next pass.
    #[must_use]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.context.queue
    }

    /// Clear the bound target (color and depth), run `draw` inside a render
    /// pass restricted to the bound viewport, and submit.
    pub fn pass(
        &self,
        label: &str,
        clear: wgpu::Color,
        draw: impl FnOnce(&mut wgpu::RenderPass<'_>),
    ) {
        let (color, depth, width, height) = match self.bound {
            Bound::Face { face, resolution } => (
                self.resources.cube.face_view(face),
                self.resources.cube.depth_view(),
                resolution,
                resolution,
            ),
            Bound::Viewport { width, height } => (
                self.surface_view,
                &self.resources.depth.view,
                width,
                height,
            ),
        };

        let mut encoder = self.context.create_encoder(label);
        {
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some(label),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: color,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(clear),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: depth,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });
            render_pass.set_viewport(
                0.0,
                0.0,
                width as f32,
                height as f32,
                0.0,
                1.0,
            );
            draw(&mut render_pass);
        }
        self.context.submit(encoder);
    }
}

impl FrameTargets for GpuFrame<'_> {
    /// Requests larger than the allocated face clamp to its size.
    fn bind_face(&mut self, face: CubeFace, resolution: u32) {
        let allocated = self.resources.cube.resolution();
        self.bound = Bound::Face {
            face,
            resolution: resolution.clamp(1, allocated),
        };
    }

    /// Requests larger than the surface clamp to its size.
    fn bind_viewport(&mut self, width: u32, height: u32) {
        let (max_width, max_height) = self.context.size();
        self.bound = Bound::Viewport {
            width: width.clamp(1, max_width),
            height: height.clamp(1, max_height),
        };
    }

    fn draw_environment_cube(&mut self, world: Mat4) {
        let environment = &self.resources.environment;
        environment.prepare(self.queue(), world);
        self.pass("Environment Cube", self.environment_clear, |render_pass| {
            environment.draw(render_pass);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_widens_channels() {
        let color = clear_color([0.25, 0.5, 0.75, 1.0]);
        assert_eq!(color.r, 0.25);
        assert_eq!(color.g, 0.5);
        assert_eq!(color.b, 0.75);
        assert_eq!(color.a, 1.0);
    }
}
