//! GPU resource management.
//!
//! Provides wgpu device/surface initialization, WGSL composition, the
//! six-face cube target, the environment cube pass and the per-frame
//! [`FrameTargets`](crate::cube::FrameTargets) implementation.

/// Composite pass drawing the environment cube.
pub mod environment_cube;
/// Per-frame render target binding and pass submission.
pub mod frame;
/// Static unit-cube geometry and the world uniform.
pub mod mesh;
/// Indexed-mesh draw pass and uniform binding.
pub mod mesh_pass;
/// Shared wgpu boilerplate helpers for the mesh pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// GPU objects owned for the renderer's lifetime.
pub mod resources;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth and cube-map render targets.
pub mod texture;

pub use frame::GpuFrame;
pub use render_context::{RenderContext, RenderContextError};
pub use resources::CubeResources;
pub use shader_composer::ShaderComposer;
