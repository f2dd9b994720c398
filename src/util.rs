//! Screen-coordinate and direction helpers shared by the camera module.

use glam::{Vec2, Vec3};

/// Convert a window-local point (origin at the top-left corner) into
/// viewport-center-origin coordinates.
///
/// This is the coordinate frame [`crate::camera::Camera::zoom_at`] expects
/// for its cursor argument.
#[inline]
#[must_use]
pub fn screen_pos(point: Vec2, screen: Vec2) -> Vec2 {
    point - screen / 2.0
}

/// Unit direction on the sphere for the angle pair `(x, y)`, in radians.
///
/// `x` sweeps around the vertical axis, `y` elevates toward the poles:
/// `(cos x · cos y, sin y, sin x · cos y)`. Both the absolute-angle orbit
/// and the arcball-driven orbit reposition the eye along this direction.
#[inline]
#[must_use]
pub fn spherical_direction(x: f32, y: f32) -> Vec3 {
    Vec3::new(x.cos() * y.cos(), y.sin(), x.sin() * y.cos())
}
