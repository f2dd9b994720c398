//! Camera system for interactive 3D terrain viewing.
//!
//! Provides a unified camera over orthographic and perspective projections
//! with the classic movement surface (orbit, pan, tilt, dolly, truck,
//! pedestal, zoom), pointer-driven arcball orbiting, cursor-anchored zoom,
//! and per-frame projection/view matrix building.

/// Pointer-delta orbit controller and hemisphere utilities.
pub mod arcball;
/// Core camera state, basis maintenance, and GPU uniform types.
pub mod core;
/// Movement operations and their cumulative telemetry.
pub mod movement;
/// Projection variants and matrix building.
pub mod projection;

pub use self::arcball::Arcball;
pub use self::core::{Camera, CameraUniform, Viewport};
pub use self::movement::Movement;
pub use self::projection::{Projection, Rect};
