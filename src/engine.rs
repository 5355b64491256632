//! The windowed engine: GPU context, cube resources, the cube renderer and
//! the test scene, stepped by a fixed-tick frame clock.

use crate::cube::CubeRenderer;
use crate::error::CubeviewError;
use crate::gpu::frame::clear_color;
use crate::gpu::{CubeResources, GpuFrame, RenderContext, ShaderComposer};
use crate::input::InputEvent;
use crate::options::Options;
use crate::scene::{Scene, TestScene};
use crate::util::frame_clock::FrameClock;

/// Owns everything needed to draw a frame into a window surface.
///
/// # Frame loop
///
/// ```ignore
/// if engine.should_render() {
///     engine.update();
///     engine.render()?;
/// }
/// ```
pub struct CubeViewEngine {
    context: RenderContext,
    resources: CubeResources,
    renderer: CubeRenderer,
    scene: TestScene,
    clock: FrameClock,
    options: Options,
}

impl CubeViewEngine {
    /// Acquire the GPU, compile every pipeline and build both cameras.
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::Gpu`] when no adapter or device is available
    /// and [`CubeviewError::Setup`] when a shader fails to compose.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, CubeviewError> {
        let (width, height) = (size.0.max(1), size.1.max(1));
        let context = RenderContext::new(window, (width, height)).await?;
        let renderer = CubeRenderer::new(width, height, &options);

        let mut composer = ShaderComposer::new()?;
        let resources = CubeResources::new(
            &context,
            &mut composer,
            renderer.probe_resolution(),
        )?;
        let scene = TestScene::new(
            &context.device,
            &mut composer,
            context.format(),
            &resources.world_layout,
            &options.scene,
        )?;

        log::info!(
            "engine ready: {width}x{height}, {} mode, tick {}ms",
            if renderer.is_cube_mode() { "cube" } else { "scene" },
            options.timing.tick_ms,
        );

        Ok(Self {
            context,
            resources,
            renderer,
            scene,
            clock: FrameClock::from_options(&options.timing),
            options,
        })
    }

    /// Resize the surface, window depth buffer and app camera together.
    /// Zero-sized requests are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.context.resize(width, height) {
            return;
        }
        self.resources.resize(&self.context.device, width, height);
        let _ = self.renderer.resize(width, height);
    }

    /// Route an input event to the cube renderer.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.renderer.handle_input_event(event)
    }

    /// Whether the frame limiter allows another frame now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.clock.should_render()
    }

    /// Advance the scene animation and both cameras by one fixed tick.
    pub fn update(&mut self) {
        let tick = self.clock.tick_ms();
        self.scene.advance(tick);
        self.renderer.step(tick);
    }

    /// Draw and present one frame.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] from acquiring the swapchain
    /// texture; the caller reconfigures on `Lost` or `Outdated`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.context.get_next_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut frame = GpuFrame::new(
            &self.context,
            &self.resources,
            &view,
            clear_color(self.options.cube.clear_color),
        );
        self.renderer.render(&mut frame, &mut self.scene);

        output.present();
        self.clock.end_frame();
        Ok(())
    }

    /// The cube renderer and its cameras.
    #[must_use]
    pub fn renderer(&self) -> &CubeRenderer {
        &self.renderer
    }

    /// Mutable access, e.g. to switch render mode programmatically.
    pub fn renderer_mut(&mut self) -> &mut CubeRenderer {
        &mut self.renderer
    }

    /// The options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}
