use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor,
    ShaderLanguage, ShaderType,
};

use crate::error::SetupError;

/// Entry points every render shader must export.
const REQUIRED_ENTRY_POINTS: [&str; 2] = ["vs_main", "fs_main"];

/// A WGSL shader shipped with the crate.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSource {
    /// WGSL text, possibly with `#import` directives.
    pub source: &'static str,
    /// Path used in diagnostics.
    pub file_path: &'static str,
}

/// Animated test cube drawn into each face and into the window.
pub const SCENE_CUBE: ShaderSource = ShaderSource {
    source: include_str!("../../assets/shaders/scene_cube.wgsl"),
    file_path: "scene_cube.wgsl",
};

/// Environment cube sampling the face cube map.
pub const ENVIRONMENT_CUBE: ShaderSource = ShaderSource {
    source: include_str!("../../assets/shaders/environment_cube.wgsl"),
    file_path: "environment_cube.wgsl",
};

/// Shared modules in dependency order.
const MODULES: &[ShaderSource] = &[ShaderSource {
    source: include_str!("../../assets/shaders/modules/transform.wgsl"),
    file_path: "modules/transform.wgsl",
}];

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Shared WGSL modules are registered at construction. Consuming shaders
/// use `#import cubeview::transform::{...}`. The composer produces
/// `naga::Module` IR directly, which is validated before it reaches wgpu so
/// that failures surface as [`SetupError`] instead of a device panic.
pub struct ShaderComposer {
    composer: Composer,
}

impl ShaderComposer {
    /// Register all shared modules.
    ///
    /// # Errors
    ///
    /// [`SetupError::Compile`] if a shared module fails to parse.
    pub fn new() -> Result<Self, SetupError> {
        let mut composer = Composer::default();
        for module in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: module.source,
                    file_path: module.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| compile_error(module.file_path, &e))?;
        }
        Ok(Self { composer })
    }

    /// Compose, validate and upload a shader.
    ///
    /// # Errors
    ///
    /// See [`compose_naga`](Self::compose_naga).
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        shader: ShaderSource,
    ) -> Result<wgpu::ShaderModule, SetupError> {
        let naga_module = self.compose_naga(shader).inspect_err(|e| {
            log::error!("{label} setup {}: {e}", e.status());
        })?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose and validate a shader without a GPU device.
    ///
    /// # Errors
    ///
    /// [`SetupError::Compile`] for parse, import or validation failures;
    /// [`SetupError::Precondition`] when `vs_main` or `fs_main` is missing.
    pub fn compose_naga(
        &mut self,
        shader: ShaderSource,
    ) -> Result<naga::Module, SetupError> {
        let module = self
            .composer
            .make_naga_module(NagaModuleDescriptor {
                source: shader.source,
                file_path: shader.file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| compile_error(shader.file_path, &e))?;

        for entry in REQUIRED_ENTRY_POINTS {
            if !module.entry_points.iter().any(|ep| ep.name == entry) {
                return Err(SetupError::Precondition(format!(
                    "shader '{}' has no entry point '{entry}'",
                    shader.file_path
                )));
            }
        }

        let _ = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(&module)
        .map_err(|e| SetupError::Compile {
            label: shader.file_path.to_owned(),
            log: e.to_string(),
        })?;

        Ok(module)
    }
}

fn compile_error(
    file_path: &str,
    error: &naga_oil::compose::ComposerError,
) -> SetupError {
    SetupError::Compile {
        label: file_path.to_owned(),
        log: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupStatus;

    #[test]
    fn all_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        for shader in [SCENE_CUBE, ENVIRONMENT_CUBE] {
            let _ = composer.compose_naga(shader).unwrap_or_else(|e| {
                panic!("shader '{}' failed: {e}", shader.file_path)
            });
        }
    }

    #[test]
    fn syntax_error_is_failed() {
        let mut composer = ShaderComposer::new().unwrap();
        let err = composer
            .compose_naga(ShaderSource {
                source: "fn vs_main( -> {",
                file_path: "broken.wgsl",
            })
            .unwrap_err();
        assert_eq!(err.status(), SetupStatus::Failed);
    }

    #[test]
    fn missing_entry_point_is_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let err = composer
            .compose_naga(ShaderSource {
                source: "@vertex\nfn vs_main() -> @builtin(position) \
                         vec4<f32> {\n    return vec4<f32>(0.0);\n}\n",
                file_path: "vertex_only.wgsl",
            })
            .unwrap_err();
        assert_eq!(err.status(), SetupStatus::Error);
    }
}
