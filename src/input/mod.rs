//! Input handling: platform-agnostic key and pointer events.
//!
//! Camera and orchestrator code only ever sees [`InputEvent`]; the winit
//! conversion lives behind the `viewer` feature.

/// Platform-agnostic input events.
pub mod event;

pub use event::{InputEvent, Key};
