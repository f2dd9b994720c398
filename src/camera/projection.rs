use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::camera::core::Camera;

/// Extent of the orthographic view volume at zoom level 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    /// Left bound.
    pub left: f32,
    /// Right bound.
    pub right: f32,
    /// Bottom bound.
    pub bottom: f32,
    /// Top bound.
    pub top: f32,
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(-50.0, 50.0, -50.0, 50.0)
    }
}

impl Rect {
    /// Create a rectangle from its four bounds.
    #[must_use]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }
}

/// Projection variant tag carrying the variant-specific parameters.
///
/// The two variants share all remaining camera state; they differ only in
/// how the projection matrix is built and in whether cursor-anchored zoom
/// applies (orthographic only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Parallel projection over a fixed view rectangle.
    Orthographic {
        /// Visible extent at zoom level 1.
        rect: Rect,
    },
    /// Pinhole projection with a vertical field of view.
    Perspective {
        /// Vertical field of view in degrees at zoom level 1.
        vertical_angle: f32,
    },
}

impl Camera {
    /// Rebuild the projection and view matrices from current state.
    ///
    /// Both matrices are reset and rebuilt from scratch on every call;
    /// nothing carries over from the previous frame, so repeated rebuilds
    /// cannot accumulate error. Call once per rendered frame, after all
    /// movement for the frame has been applied.
    ///
    /// The zoom level scales the orthographic extent (zoom > 1 widens the
    /// visible area, zoom < 1 narrows it) or the perspective field of view.
    /// Matrices follow the right-handed, zero-to-one depth convention.
    pub fn apply_settings(&mut self) {
        let zoom = self.zoom_level;
        self.projection_matrix = match self.projection {
            Projection::Orthographic { rect } => Mat4::orthographic_rh(
                rect.left * zoom,
                rect.right * zoom,
                rect.bottom * zoom,
                rect.top * zoom,
                self.near_plane,
                self.far_plane,
            ),
            Projection::Perspective { vertical_angle } => {
                Mat4::perspective_rh(
                    (vertical_angle * zoom).to_radians(),
                    self.aspect_ratio,
                    self.near_plane,
                    self.far_plane,
                )
            }
        };
        // An unplaced camera (no look-at yet) keeps the identity view.
        self.view_matrix = if self.front.length_squared() > 0.0 {
            Mat4::look_at_rh(self.eye, self.center, self.up)
        } else {
            Mat4::IDENTITY
        };
    }

    /// Projection matrix from the most recent [`Camera::apply_settings`].
    #[must_use]
    pub const fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// View matrix from the most recent [`Camera::apply_settings`].
    #[must_use]
    pub const fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Combined view-projection transform, for upload as a single uniform.
    #[must_use]
    pub fn mvp(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn assert_mat_close(a: &Mat4, b: &Mat4) {
        let diff: f32 = (*a - *b)
            .to_cols_array()
            .iter()
            .map(|v| v.abs())
            .sum();
        assert!(diff < 1e-4, "matrices differ by {diff}:\n{a}\n{b}");
    }

    #[test]
    fn orthographic_bounds_scale_with_zoom() {
        let mut camera = Camera::orthographic();
        camera.look_at(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO, Vec3::Y);
        camera.zoom(2.0);
        camera.apply_settings();

        // rect(-50, 50, -50, 50) at zoom 2 spans -100..100.
        let expected =
            Mat4::orthographic_rh(-100.0, 100.0, -100.0, 100.0, 2.0, 1000.0);
        assert_mat_close(camera.projection_matrix(), &expected);
    }

    #[test]
    fn perspective_angle_scales_with_zoom() {
        let mut camera = Camera::perspective();
        camera.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        camera.zoom(0.5);
        camera.apply_settings();

        let expected = Mat4::perspective_rh(
            22.5_f32.to_radians(),
            4.0 / 3.0,
            2.0,
            1000.0,
        );
        assert_mat_close(camera.projection_matrix(), &expected);
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let mut camera = Camera::perspective();
        camera.look_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO, Vec3::Y);
        camera.apply_settings();

        let expected =
            Mat4::look_at_rh(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO, camera.up());
        assert_mat_close(camera.view_matrix(), &expected);
    }

    #[test]
    fn unplaced_camera_keeps_identity_view() {
        let mut camera = Camera::orthographic();
        camera.apply_settings();

        assert_eq!(*camera.view_matrix(), Mat4::IDENTITY);
        assert!(camera.projection_matrix().is_finite());
    }

    #[test]
    fn matrices_are_rebuilt_fresh_each_call() {
        let mut camera = Camera::orthographic();
        camera.look_at(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO, Vec3::Y);
        camera.apply_settings();
        let first = *camera.projection_matrix();

        // A second rebuild with unchanged state is identical, not
        // compounded.
        camera.apply_settings();
        assert_eq!(*camera.projection_matrix(), first);

        camera.zoom(2.0);
        camera.apply_settings();
        let expected =
            Mat4::orthographic_rh(-100.0, 100.0, -100.0, 100.0, 2.0, 1000.0);
        assert_mat_close(camera.projection_matrix(), &expected);
    }

    #[test]
    fn mvp_is_projection_times_view() {
        let mut camera = Camera::perspective();
        camera.look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
        camera.apply_settings();

        let expected = *camera.projection_matrix() * *camera.view_matrix();
        assert_eq!(camera.mvp(), expected);
    }

    #[test]
    fn rect_serde_round_trip() {
        let rect = Rect::new(-10.0, 10.0, -7.5, 7.5);
        let text = toml::to_string(&rect).unwrap();
        let parsed: Rect = toml::from_str(&text).unwrap();
        assert_eq!(rect, parsed);
    }
}
