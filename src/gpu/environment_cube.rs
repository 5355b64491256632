//! Composite pass: a unit cube in the window textured from the face cube
//! map.

use glam::Mat4;

use super::mesh::{
    direction_layout, position_layout, CUBE_DIRECTIONS, CUBE_INDICES,
    CUBE_POSITIONS,
};
use super::mesh_pass::{MeshPass, WorldBinding};
use super::pipeline_helpers;
use super::shader_composer::{ShaderComposer, ENVIRONMENT_CUBE};
use super::texture::CubeTarget;
use crate::error::SetupError;

/// Pipeline, mesh and bindings for the environment cube.
pub struct EnvironmentCubePass {
    mesh: MeshPass,
    world: WorldBinding,
    faces_bind_group: wgpu::BindGroup,
}

impl EnvironmentCubePass {
    /// Build the pass, binding `cube` for sampling.
    ///
    /// # Errors
    ///
    /// Propagates shader setup failures.
    pub fn new(
        device: &wgpu::Device,
        composer: &mut ShaderComposer,
        format: wgpu::TextureFormat,
        world_layout: &wgpu::BindGroupLayout,
        cube: &CubeTarget,
    ) -> Result<Self, SetupError> {
        let faces_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Cube Map Layout"),
                entries: &[
                    pipeline_helpers::texture_cube(0),
                    pipeline_helpers::filtering_sampler(1),
                ],
            });
        let sampler =
            pipeline_helpers::nearest_sampler(device, "Cube Map Sampler");
        let faces_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Cube Map Bind Group"),
                layout: &faces_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(
                            cube.cube_view(),
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });

        let pipeline = pipeline_helpers::create_mesh_pipeline(
            device,
            composer,
            "Environment Cube",
            ENVIRONMENT_CUBE,
            format,
            &[world_layout, &faces_layout],
            &[position_layout(), direction_layout()],
        )?;
        let mesh = MeshPass::new(
            device,
            "Environment Cube",
            pipeline,
            &[CUBE_POSITIONS.as_slice(), CUBE_DIRECTIONS.as_slice()],
            &CUBE_INDICES,
        );
        let world =
            WorldBinding::new(device, world_layout, "Environment Cube World");

        Ok(Self {
            mesh,
            world,
            faces_bind_group,
        })
    }

    /// Queue the `projection * view * model` matrix for the next draw.
    pub fn prepare(&self, queue: &wgpu::Queue, world: Mat4) {
        self.world.write(queue, world);
    }

    /// Record the draw into an open pass.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(0, &self.world.bind_group, &[]);
        render_pass.set_bind_group(1, &self.faces_bind_group, &[]);
        self.mesh.draw(render_pass);
    }
}
