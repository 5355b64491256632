//! Render-target textures: window depth buffer and the six-face cube map.

use crate::cube::{CubeFace, FACE_COUNT};

/// Depth format shared by every pass.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A depth buffer, held through its full-texture view.
pub struct DepthTarget {
    /// Attachment view.
    pub view: wgpu::TextureView,
}

impl DepthTarget {
    /// Create a depth texture with the given dimensions.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        width: u32,
        height: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        Self {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
        }
    }
}

/// Six square color layers, rendered one face at a time and sampled as a
/// cube map.
///
/// Faces share one depth buffer; every face pass clears it first.
pub struct CubeTarget {
    resolution: u32,
    face_views: [wgpu::TextureView; FACE_COUNT],
    cube_view: wgpu::TextureView,
    depth: DepthTarget,
}

impl CubeTarget {
    /// Allocate the cube at `resolution`² per face.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        resolution: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let resolution = resolution.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Cube Faces"),
            size: wgpu::Extent3d {
                width: resolution,
                height: resolution,
                depth_or_array_layers: FACE_COUNT as u32,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let face_views = std::array::from_fn(|i| {
            let face = CubeFace::from_index(i);
            texture.create_view(&wgpu::TextureViewDescriptor {
                label: Some(&format!("Cube Face {}", face.label())),
                dimension: Some(wgpu::TextureViewDimension::D2),
                base_array_layer: face.index() as u32,
                array_layer_count: Some(1),
                ..Default::default()
            })
        });
        let cube_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Cube Map View"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            array_layer_count: Some(FACE_COUNT as u32),
            ..Default::default()
        });
        let depth =
            DepthTarget::new(device, "Cube Face Depth", resolution, resolution);

        Self {
            resolution,
            face_views,
            cube_view,
            depth,
        }
    }

    /// Side length of each face in pixels.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Render view of one face.
    #[must_use]
    pub fn face_view(&self, face: CubeFace) -> &wgpu::TextureView {
        &self.face_views[face.index()]
    }

    /// Depth view shared by the face passes.
    #[must_use]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.view
    }

    /// All six layers viewed as a cube map for sampling.
    #[must_use]
    pub fn cube_view(&self) -> &wgpu::TextureView {
        &self.cube_view
    }
}
