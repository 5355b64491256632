// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Cube-map 3D viewer built on wgpu.
//!
//! A probe camera renders the scene into the six faces of a cube map every
//! frame; an app camera then views a cube textured with those faces. Both
//! cameras share one keyboard/pointer driven motion model and can be
//! switched between targeting and free-look.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - pose, latched motion intents and the per-tick
//!   integrator
//! - [`cube::CubeRenderer`] - owns both cameras and sequences the face and
//!   composite passes
//! - [`engine::CubeViewEngine`] - GPU-backed engine driving a window
//!   surface
//! - [`options::Options`] - TOML configuration
//!
//! The camera, face derivation and orchestration compile without a window
//! system; the `viewer` feature adds the winit front end.

pub mod camera;
pub mod cube;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::Camera;
pub use cube::CubeRenderer;
pub use engine::CubeViewEngine;
pub use error::CubeviewError;
pub use input::{InputEvent, Key};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
