use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::util;

/// Pointer-driven orbit controller.
///
/// Accumulates normalized pointer deltas into a persistent angle pair and
/// repositions the camera eye on the sphere around the center, preserving
/// the orbit radius. Unlike [`Camera::orbit`], whose arguments are absolute
/// spherical angles, this controller owns the incremental accumulation, so
/// successive drags continue from where the previous one ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arcball {
    /// Accumulated orbit angles, in radians.
    angles: Vec2,
    /// Multiplier applied to normalized pointer deltas.
    rotate_speed: f32,
}

impl Default for Arcball {
    fn default() -> Self {
        Self::new()
    }
}

impl Arcball {
    /// Controller with zeroed angles and unit rotate speed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            angles: Vec2::ZERO,
            rotate_speed: 1.0,
        }
    }

    /// Controller with the given rotate-speed multiplier.
    #[must_use]
    pub const fn with_rotate_speed(rotate_speed: f32) -> Self {
        Self {
            angles: Vec2::ZERO,
            rotate_speed,
        }
    }

    /// Accumulated orbit angles, in radians.
    #[must_use]
    pub const fn angles(&self) -> Vec2 {
        self.angles
    }

    /// Zero the accumulated angles.
    pub fn reset(&mut self) {
        self.angles = Vec2::ZERO;
    }

    /// Orbit the camera from a pointer drag step.
    ///
    /// `previous` and `current` are pointer positions in pixels. The delta
    /// is normalized by the camera's viewport dimensions, scaled by the
    /// rotate speed, and added to the stored angles; the eye is then placed
    /// at `center + direction * radius` for the accumulated angle pair,
    /// with the eye-to-center distance preserved.
    ///
    /// Identical positions, or a viewport with a non-positive dimension,
    /// leave both the camera and the stored angles unchanged.
    pub fn orbit(&mut self, camera: &mut Camera, previous: Vec2, current: Vec2) {
        if current == previous {
            return;
        }
        let dimension = camera.viewport().dimension;
        if dimension.x <= 0.0 || dimension.y <= 0.0 {
            return;
        }

        let delta = (current - previous) / dimension * self.rotate_speed;
        self.angles += delta;

        let radius = (camera.eye() - camera.center()).length();
        let dir = util::spherical_direction(self.angles.x, self.angles.y);
        camera.set_eye(camera.center() + dir * radius);
    }
}

/// Project a pointer position onto the unit hemisphere facing the viewer.
///
/// The position is mapped to [-1, 1] across the given screen extent with y
/// flipped; points inside the unit disc are lifted onto the hemisphere
/// (`z = sqrt(1 - x^2 - y^2)`), points outside are normalized onto its rim.
/// A non-positive screen extent yields the hemisphere apex.
///
/// Together with [`arcball_angle`] this supports rotation-based arcball
/// schemes; the primary orbit path above does not use it.
#[must_use]
pub fn arcball_vector(point: Vec2, width: f32, height: f32) -> Vec3 {
    if width <= 0.0 || height <= 0.0 {
        return Vec3::Z;
    }
    let mut p = Vec3::new(
        point.x / width * 2.0 - 1.0,
        point.y / height * 2.0 - 1.0,
        0.0,
    );
    p.y = -p.y;
    let op_sqr = p.x * p.x + p.y * p.y;
    if op_sqr <= 1.0 {
        p.z = (1.0 - op_sqr).sqrt();
        p
    } else {
        p.normalize()
    }
}

/// Angle in radians between two unit vectors on the arcball sphere.
///
/// The dot product is capped at one so accumulated rounding between nearly
/// identical vectors cannot push `acos` out of its domain.
#[must_use]
pub fn arcball_angle(va: Vec3, vb: Vec3) -> f32 {
    va.dot(vb).min(1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_camera() -> Camera {
        let mut camera = Camera::perspective();
        camera.look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        camera.set_viewport(0.0, 0.0, 800.0, 600.0);
        camera
    }

    #[test]
    fn orbit_preserves_radius() {
        let mut camera = placed_camera();
        let mut arcball = Arcball::new();

        arcball.orbit(
            &mut camera,
            Vec2::new(100.0, 100.0),
            Vec2::new(340.0, 250.0),
        );

        let radius = (camera.eye() - camera.center()).length();
        assert!((radius - 10.0).abs() < 1e-5);
    }

    #[test]
    fn deltas_accumulate_across_drags() {
        let mut camera_stepped = placed_camera();
        let mut arcball_stepped = Arcball::new();
        arcball_stepped.orbit(
            &mut camera_stepped,
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 0.0),
        );
        arcball_stepped.orbit(
            &mut camera_stepped,
            Vec2::new(200.0, 0.0),
            Vec2::new(400.0, 150.0),
        );

        let mut camera_single = placed_camera();
        let mut arcball_single = Arcball::new();
        arcball_single.orbit(
            &mut camera_single,
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 150.0),
        );

        assert_eq!(arcball_stepped.angles(), arcball_single.angles());
        assert!(
            (camera_stepped.eye() - camera_single.eye()).length() < 1e-5
        );
    }

    #[test]
    fn identical_positions_change_nothing() {
        let mut camera = placed_camera();
        let eye = camera.eye();
        let mut arcball = Arcball::new();

        arcball.orbit(&mut camera, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));

        assert_eq!(camera.eye(), eye);
        assert_eq!(arcball.angles(), Vec2::ZERO);
    }

    #[test]
    fn degenerate_viewport_changes_nothing() {
        let mut camera = placed_camera();
        camera.set_viewport(0.0, 0.0, 0.0, 600.0);
        let eye = camera.eye();
        let mut arcball = Arcball::new();

        arcball.orbit(&mut camera, Vec2::ZERO, Vec2::new(50.0, 50.0));

        assert_eq!(camera.eye(), eye);
        assert_eq!(arcball.angles(), Vec2::ZERO);
    }

    #[test]
    fn rotate_speed_scales_the_delta() {
        let mut camera = placed_camera();
        let mut arcball = Arcball::with_rotate_speed(2.0);

        arcball.orbit(
            &mut camera,
            Vec2::ZERO,
            Vec2::new(400.0, 300.0),
        );

        // Half the viewport at double speed is one radian on each axis.
        assert!((arcball.angles() - Vec2::ONE).length() < 1e-6);
    }

    #[test]
    fn arcball_vector_lifts_inner_points_onto_hemisphere() {
        // Screen center maps to the apex.
        let center = arcball_vector(Vec2::new(400.0, 300.0), 800.0, 600.0);
        assert!((center - Vec3::Z).length() < 1e-6);

        let v = arcball_vector(Vec2::new(500.0, 200.0), 800.0, 600.0);
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(v.z > 0.0);
        // y is flipped: a pointer above the center looks up.
        assert!(v.y > 0.0);
    }

    #[test]
    fn arcball_vector_normalizes_outer_points() {
        let v = arcball_vector(Vec2::new(800.0, 600.0), 800.0, 600.0);
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(v.z.abs() < 1e-6);
    }

    #[test]
    fn arcball_angle_is_clamped() {
        let v = Vec3::new(0.6, 0.8, 0.0);
        assert!(arcball_angle(v, v).abs() < 1e-3);
        assert!(
            (arcball_angle(Vec3::X, Vec3::Y)
                - std::f32::consts::FRAC_PI_2)
                .abs()
                < 1e-5
        );
    }
}
