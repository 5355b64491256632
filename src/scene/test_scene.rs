use glam::Mat4;

use super::{CubeAnimation, Scene};
use crate::camera::CameraView;
use crate::error::SetupError;
use crate::gpu::frame::{clear_color, GpuFrame};
use crate::gpu::mesh::{position_layout, CUBE_INDICES, CUBE_POSITIONS};
use crate::gpu::mesh_pass::{MeshPass, WorldBinding};
use crate::gpu::pipeline_helpers;
use crate::gpu::shader_composer::{ShaderComposer, SCENE_CUBE};
use crate::options::SceneOptions;

/// A single bobbing unit cube colored by its local position.
pub struct TestScene {
    animation: CubeAnimation,
    mesh: MeshPass,
    world: WorldBinding,
    clear: wgpu::Color,
}

impl TestScene {
    /// Build the pipeline and upload the cube.
    ///
    /// # Errors
    ///
    /// Propagates shader setup failures.
    pub fn new(
        device: &wgpu::Device,
        composer: &mut ShaderComposer,
        format: wgpu::TextureFormat,
        world_layout: &wgpu::BindGroupLayout,
        options: &SceneOptions,
    ) -> Result<Self, SetupError> {
        let pipeline = pipeline_helpers::create_mesh_pipeline(
            device,
            composer,
            "Test Scene",
            SCENE_CUBE,
            format,
            &[world_layout],
            &[position_layout()],
        )?;
        let mesh = MeshPass::new(
            device,
            "Test Scene",
            pipeline,
            &[CUBE_POSITIONS.as_slice()],
            &CUBE_INDICES,
        );
        Ok(Self {
            animation: CubeAnimation::from_options(options),
            mesh,
            world: WorldBinding::new(device, world_layout, "Test Scene World"),
            clear: clear_color(options.clear_color),
        })
    }

    /// Current animation state.
    #[must_use]
    pub fn animation(&self) -> &CubeAnimation {
        &self.animation
    }
}

impl<'a> Scene<GpuFrame<'a>> for TestScene {
    fn advance(&mut self, delta_ms: u32) {
        self.animation.advance(delta_ms);
    }

    fn render(&mut self, frame: &mut GpuFrame<'a>, camera: &dyn CameraView) {
        let model = Mat4::from_translation(self.animation.position());
        self.world.write(frame.queue(), camera.view_projection() * model);
        frame.pass("Test Scene", self.clear, |render_pass| {
            render_pass.set_bind_group(0, &self.world.bind_group, &[]);
            self.mesh.draw(render_pass);
        });
    }
}
