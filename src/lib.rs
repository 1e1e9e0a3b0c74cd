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
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// GPU / graphics allowances — casts between float widths and pixel
// integers are intentional throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::doc_markdown)]

//! Real-time GPU ray tracer for a small dynamic scene built on wgpu.
//!
//! Glint owns a fixed-capacity scene of bouncing spheres, point lights, and
//! bounding planes, advances it with simple restitution physics once per
//! frame, derives a pixel-to-world camera transform from an orbiting
//! viewpoint, and packs everything into the flat uniform layout the
//! ray-tracing fragment shader is compiled against.
//!
//! # Key entry points
//!
//! - [`simulation::Simulation`] - the tick-driven scene coordinator
//! - [`scene::Scene`] - fixed-capacity entity storage
//! - [`engine::Engine`] - wgpu upload + full-screen raytrace pass
//! - [`options::Options`] - runtime configuration (simulation, camera)
//!
//! # Architecture
//!
//! The per-frame pipeline is strictly sequential and allocation-light:
//! integrate physics → derive the camera basis → serialize the scene into
//! [`scene::serialize::FrameData`] → upload into a single uniform buffer →
//! draw one full-screen triangle. The shader-side maximum entity counts are
//! a versioned contract with `assets/shaders/raytracer.wgsl`, checked once
//! at startup (see [`gpu::verify_shader_contract`]).

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod options;
pub mod scene;
pub mod simulation;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::GlintError;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
