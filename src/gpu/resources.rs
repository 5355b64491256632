//! GPU objects owned by the cube renderer for its whole lifetime.

use super::environment_cube::EnvironmentCubePass;
use super::mesh_pass::WorldBinding;
use super::render_context::RenderContext;
use super::shader_composer::ShaderComposer;
use super::texture::{CubeTarget, DepthTarget};
use crate::error::SetupError;

/// Cube map, window depth buffer and composite pass.
pub struct CubeResources {
    /// Six face layers plus their shared depth buffer.
    pub cube: CubeTarget,
    /// Depth buffer matching the window surface.
    pub depth: DepthTarget,
    /// Environment cube drawn in cube mode.
    pub environment: EnvironmentCubePass,
    /// Group 0 layout shared by every mesh pipeline.
    pub world_layout: wgpu::BindGroupLayout,
}

impl CubeResources {
    /// Allocate everything at `face_resolution`² per face, clamped to the
    /// device limit.
    ///
    /// # Errors
    ///
    /// Propagates shader setup failures.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        face_resolution: u32,
    ) -> Result<Self, SetupError> {
        let device = &context.device;
        let (width, height) = context.size();
        let world_layout = WorldBinding::layout(device);
        let cube = CubeTarget::new(
            device,
            context.face_resolution(face_resolution),
            context.format(),
        );
        let depth = DepthTarget::new(device, "Window Depth", width, height);
        let environment = EnvironmentCubePass::new(
            device,
            composer,
            context.format(),
            &world_layout,
            &cube,
        )?;
        log::debug!(
            "cube resources: {0}x{0} faces, {width}x{height} window",
            cube.resolution()
        );
        Ok(Self {
            cube,
            depth,
            environment,
            world_layout,
        })
    }

    /// Recreate the window depth buffer.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = DepthTarget::new(device, "Window Depth", width, height);
    }
}
