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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison: camera math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
// Precision of the textbook formulas matters more than FMA micro-opts
#![allow(clippy::suboptimal_flops)]

//! Unified interactive camera core for a 3D terrain viewer.
//!
//! Terravis maintains an orthonormal view basis (eye, center, front, right,
//! up), exposes the classic movement primitives (orbit, pan, tilt, dolly,
//! truck, pedestal, zoom) and builds projection/view matrices for two
//! interchangeable projection variants, orthographic and perspective.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the unified camera: state, movement surface, and
//!   matrix building
//! - [`camera::Arcball`] - screen-delta driven orbiting
//! - [`camera::CameraUniform`] - GPU-uploadable transform block
//! - [`options::Options`] - TOML-backed camera/control presets
//!
//! # Architecture
//!
//! Data flows one way: the UI collaborator translates pointer and wheel
//! events into calls on the movement surface, movement operations mutate the
//! camera state, and [`camera::Camera::apply_settings`] rebuilds the
//! projection and view matrices from scratch each frame. Matrices are never
//! updated incrementally, so no accumulation error survives a rebuild.
//!
//! Grid/terrain ingestion, shader handling, and draw submission live in
//! external collaborators; the camera never touches them.

pub mod camera;
pub mod error;
pub mod options;
pub mod util;
