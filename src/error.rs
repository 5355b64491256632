//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Outcome of a GPU setup routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStatus {
    /// Resource created.
    Success,
    /// A precondition or lookup failed (e.g. a missing entry point).
    Error,
    /// Compilation or linking failed with diagnostic text.
    Failed,
}

impl fmt::Display for SetupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// GPU resource setup failure. Setup is never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Lookup or precondition failure.
    Precondition(String),
    /// Shader composition or validation failure.
    Compile {
        /// Shader label.
        label: String,
        /// Diagnostic text from the shader compiler.
        log: String,
    },
}

impl SetupError {
    /// Tri-state classification of this failure.
    #[must_use]
    pub fn status(&self) -> SetupStatus {
        match self {
            Self::Precondition(_) => SetupStatus::Error,
            Self::Compile { .. } => SetupStatus::Failed,
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition(msg) => {
                write!(f, "setup precondition failed: {msg}")
            }
            Self::Compile { label, log } => {
                write!(f, "shader '{label}' failed to compile:\n{log}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Errors produced by the cubeview crate.
#[derive(Debug)]
pub enum CubeviewError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Pipeline or shader setup failure.
    Setup(SetupError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl CubeviewError {
    /// Tri-state status for setup failures; every other error counts as
    /// [`SetupStatus::Error`].
    #[must_use]
    pub fn status(&self) -> SetupStatus {
        match self {
            Self::Setup(e) => e.status(),
            _ => SetupStatus::Error,
        }
    }
}

impl fmt::Display for CubeviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Setup(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for CubeviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Setup(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for CubeviewError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<SetupError> for CubeviewError {
    fn from(e: SetupError) -> Self {
        Self::Setup(e)
    }
}

impl From<std::io::Error> for CubeviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_errors_map_onto_tri_state() {
        let missing = SetupError::Precondition("no vs_main".into());
        let broken = SetupError::Compile {
            label: "scene".into(),
            log: "expected ';'".into(),
        };
        assert_eq!(missing.status(), SetupStatus::Error);
        assert_eq!(broken.status(), SetupStatus::Failed);
        assert_eq!(CubeviewError::from(broken).status(), SetupStatus::Failed);
    }

    #[test]
    fn compile_error_display_carries_log() {
        let err = SetupError::Compile {
            label: "environment".into(),
            log: "unknown identifier".into(),
        };
        let text = err.to_string();
        assert!(text.contains("environment"));
        assert!(text.contains("unknown identifier"));
    }
}
