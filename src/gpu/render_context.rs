//! Device, queue and window surface.
//!
//! The cube faces are rendered with the same pipelines as the window, so the
//! swapchain format doubles as the face format. It is chosen among the
//! surface's formats for one the adapter can both render to and sample.

use std::fmt;

/// Usages every cube face texture needs on top of presenting.
pub const FACE_USAGES: wgpu::TextureUsages =
    wgpu::TextureUsages::RENDER_ATTACHMENT
        .union(wgpu::TextureUsages::TEXTURE_BINDING);

/// Reasons the GPU or window surface could not be brought up.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not back a surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    AdapterRequest(wgpu::RequestAdapterError),
    /// The adapter refused the device.
    DeviceRequest(wgpu::RequestDeviceError),
    /// None of the surface formats can be both rendered to and sampled.
    NoFaceFormat(Vec<wgpu::TextureFormat>),
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => {
                write!(f, "surface creation failed: {e}")
            }
            Self::AdapterRequest(e) => {
                write!(f, "no adapter can present to the window: {e}")
            }
            Self::DeviceRequest(e) => write!(f, "device request failed: {e}"),
            Self::NoFaceFormat(offered) => write!(
                f,
                "no surface format is renderable and sampleable \
                 (offered {offered:?})"
            ),
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::NoFaceFormat(_) => None,
        }
    }
}

/// First sRGB format in `offered` that `supports_faces` accepts, else the
/// first accepted one.
#[must_use]
pub fn pick_face_format(
    offered: &[wgpu::TextureFormat],
    supports_faces: impl Fn(wgpu::TextureFormat) -> bool,
) -> Option<wgpu::TextureFormat> {
    let usable: Vec<_> = offered
        .iter()
        .copied()
        .filter(|&format| supports_faces(format))
        .collect();
    usable
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| usable.first().copied())
}

/// GPU handles plus the window surface they present to.
pub struct RenderContext {
    /// Logical device.
    pub device: wgpu::Device,
    /// Submission queue.
    pub queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    max_face_resolution: u32,
}

impl RenderContext {
    /// Open a device able to present to `window` at `initial_size`.
    ///
    /// # Errors
    ///
    /// See [`RenderContextError`].
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;

        // Ask for the adapter's texture size so large faces are not capped
        // at the portable default.
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Cubeview Device"),
                required_limits: wgpu::Limits::default()
                    .using_resolution(adapter.limits()),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_face_format(&caps.formats, |format| {
            adapter
                .get_texture_format_features(format)
                .allowed_usages
                .contains(FACE_USAGES)
        })
        .ok_or_else(|| RenderContextError::NoFaceFormat(caps.formats.clone()))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: initial_size.0.max(1),
            height: initial_size.1.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: Vec::new(),
        };
        surface.configure(&device, &config);
        let max_face_resolution = device.limits().max_texture_dimension_2d;

        log::info!(
            "{} ({:?}): {format:?} {}x{}, faces up to {max_face_resolution}",
            adapter.get_info().name,
            adapter.get_info().backend,
            config.width,
            config.height,
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            max_face_resolution,
        })
    }

    /// Swapchain format, shared by the cube faces.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current surface size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Largest face side the device can allocate.
    #[must_use]
    pub fn max_face_resolution(&self) -> u32 {
        self.max_face_resolution
    }

    /// `requested` clamped to what the device can allocate.
    #[must_use]
    pub fn face_resolution(&self, requested: u32) -> u32 {
        let resolution = requested.clamp(1, self.max_face_resolution);
        if resolution != requested {
            log::warn!(
                "face resolution {requested} clamped to {resolution}"
            );
        }
        resolution
    }

    /// Reconfigure for a new window size. Zero-sized requests keep the old
    /// configuration and return `false`.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::warn!("ignoring surface resize to {width}x{height}");
            return false;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        true
    }

    /// Next swapchain texture.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the surface is lost, outdated or
    /// timed out.
    pub fn get_next_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Encoder for one pass.
    #[must_use]
    pub fn create_encoder(&self, label: &str) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some(label),
            })
    }

    /// Submit a finished pass.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat;

    #[test]
    fn srgb_face_format_preferred() {
        let offered =
            [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(
            pick_face_format(&offered, |_| true),
            Some(TextureFormat::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn formats_without_face_usages_are_skipped() {
        let offered =
            [TextureFormat::Bgra8UnormSrgb, TextureFormat::Rgba8Unorm];
        let picked = pick_face_format(&offered, |format| {
            format == TextureFormat::Rgba8Unorm
        });
        assert_eq!(picked, Some(TextureFormat::Rgba8Unorm));
    }

    #[test]
    fn no_usable_format_is_none() {
        let offered = [TextureFormat::Bgra8UnormSrgb];
        assert_eq!(pick_face_format(&offered, |_| false), None);
        assert_eq!(pick_face_format(&[], |_| true), None);
    }

    #[test]
    fn no_face_format_error_lists_offered() {
        let err =
            RenderContextError::NoFaceFormat(vec![TextureFormat::Rgba16Float]);
        assert!(err.to_string().contains("Rgba16Float"));
    }
}
