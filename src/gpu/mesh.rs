//! Static unit-cube geometry and the per-draw uniform.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Unit cube centered on the origin: four vertices per side, six sides.
pub const CUBE_POSITIONS: [[f32; 3]; 24] = [
    // bottom
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    // front
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
    // left
    [-0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, 0.5, 0.5],
    // right
    [0.5, -0.5, -0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, -0.5],
    [0.5, 0.5, 0.5],
    // back
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    // top
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
];

/// Cube-map lookup direction per vertex of [`CUBE_POSITIONS`].
pub const CUBE_DIRECTIONS: [[f32; 3]; 24] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    //
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    //
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    //
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    //
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    //
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
];

/// Two triangles per side.
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 1, 2, 3, //
    4, 5, 6, 5, 6, 7, //
    8, 9, 10, 9, 10, 11, //
    12, 13, 14, 13, 14, 15, //
    16, 17, 18, 17, 18, 19, //
    20, 21, 22, 21, 22, 23,
];

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];
const DIRECTION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![1 => Float32x3];

/// Buffer layout for `@location(0) position`.
#[must_use]
pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRIBUTES,
    }
}

/// Buffer layout for `@location(1) direction`.
#[must_use]
pub fn direction_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &DIRECTION_ATTRIBUTES,
    }
}

/// `projection * view * model`, uploaded once per draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct WorldUniform {
    /// Column-major 4x4 matrix.
    pub world: [[f32; 4]; 4],
}

impl WorldUniform {
    /// Wrap a matrix for upload.
    #[must_use]
    pub fn new(world: Mat4) -> Self {
        Self {
            world: world.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_reference_existing_vertices() {
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < 24));
        assert_eq!(CUBE_POSITIONS.len(), CUBE_DIRECTIONS.len());
    }

    #[test]
    fn positions_span_the_unit_cube() {
        for p in CUBE_POSITIONS {
            assert!(p.iter().all(|c| c.abs() == 0.5));
        }
        for d in CUBE_DIRECTIONS {
            assert!(d.iter().all(|c| c.abs() == 1.0));
        }
    }

    #[test]
    fn uniform_is_one_matrix() {
        assert_eq!(size_of::<WorldUniform>(), 64);
        let uniform = WorldUniform::new(Mat4::IDENTITY);
        assert_eq!(uniform.world[3][3], 1.0);
    }
}
