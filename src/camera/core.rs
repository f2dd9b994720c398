use glam::{Mat4, Vec2, Vec3};

use crate::camera::movement::Movement;
use crate::camera::projection::{Projection, Rect};

/// Near clipping plane distance restored by [`Camera::to_default`].
pub const DEFAULT_NEAR_PLANE: f32 = 2.0;
/// Far clipping plane distance restored by [`Camera::to_default`].
pub const DEFAULT_FAR_PLANE: f32 = 1000.0;
/// Vertical field of view, in degrees, restored by [`Camera::to_default`].
pub const DEFAULT_VERTICAL_ANGLE: f32 = 45.0;
/// Viewport aspect ratio restored by [`Camera::to_default`].
pub const DEFAULT_ASPECT_RATIO: f32 = 4.0 / 3.0;
/// Zoom scalar restored by [`Camera::to_default`].
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Padding factor applied by [`Camera::fit_to_points`] so framed geometry
/// does not touch the viewport edges.
const FIT_PADDING: f32 = 1.5;

/// Viewport rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Lower-left corner of the viewport.
    pub pos: Vec2,
    /// Width and height of the viewport.
    pub dimension: Vec2,
}

impl Viewport {
    /// Create a viewport from position and extent components.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            dimension: Vec2::new(width, height),
        }
    }
}

/// Unified interactive camera over an orthographic or perspective
/// projection.
///
/// The camera owns an orthonormal, right-handed view basis (front, right,
/// up) derived from the eye position, the look-at center, and an up hint.
/// The basis is rebuilt from those inputs on every change and never rotated
/// incrementally, so repeated movement cannot accumulate drift.
///
/// State is mutated only through the movement surface (`truck`, `pedestal`,
/// `dolly`, `orbit`, `zoom`, ...) and the setters below; matrices are
/// rebuilt from scratch by [`Camera::apply_settings`] once per frame.
#[derive(Debug, Clone)]
pub struct Camera {
    pub(super) eye: Vec3,
    pub(super) center: Vec3,
    pub(super) up: Vec3,
    pub(super) front: Vec3,
    pub(super) right: Vec3,
    pub(super) near_plane: f32,
    pub(super) far_plane: f32,
    pub(super) aspect_ratio: f32,
    pub(super) zoom_level: f32,
    pub(super) projection: Projection,
    pub(super) viewport: Viewport,
    pub(super) movement: Movement,
    pub(super) projection_matrix: Mat4,
    pub(super) view_matrix: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::orthographic()
    }
}

impl Camera {
    /// Create a camera with the given projection variant and default state.
    #[must_use]
    pub fn new(projection: Projection) -> Self {
        Self {
            eye: Vec3::ZERO,
            center: Vec3::ZERO,
            up: Vec3::ZERO,
            front: Vec3::ZERO,
            right: Vec3::ZERO,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            zoom_level: DEFAULT_ZOOM,
            projection,
            viewport: Viewport::default(),
            movement: Movement::default(),
            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
        }
    }

    /// Orthographic camera over the default view rectangle.
    #[must_use]
    pub fn orthographic() -> Self {
        Self::new(Projection::Orthographic {
            rect: Rect::default(),
        })
    }

    /// Perspective camera with the default vertical field of view.
    #[must_use]
    pub fn perspective() -> Self {
        Self::new(Projection::Perspective {
            vertical_angle: DEFAULT_VERTICAL_ANGLE,
        })
    }

    /// Eye (camera) position in world space.
    #[must_use]
    pub const fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at target position.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Unit up vector of the view basis.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit view direction, from eye toward center.
    #[must_use]
    pub const fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector of the view basis.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Near clipping plane distance.
    #[must_use]
    pub const fn near_plane(&self) -> f32 {
        self.near_plane
    }

    /// Far clipping plane distance.
    #[must_use]
    pub const fn far_plane(&self) -> f32 {
        self.far_plane
    }

    /// Viewport aspect ratio (width / height). Perspective builds only.
    #[must_use]
    pub const fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Unitless zoom scalar, consumed at projection-build time.
    #[must_use]
    pub const fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    /// Current projection variant and its parameters.
    #[must_use]
    pub const fn projection(&self) -> Projection {
        self.projection
    }

    /// Current viewport rectangle.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Vertical field of view in degrees; `None` for orthographic cameras.
    #[must_use]
    pub const fn vertical_angle(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { vertical_angle } => Some(vertical_angle),
            Projection::Orthographic { .. } => None,
        }
    }

    /// Orthographic view rectangle; `None` for perspective cameras.
    #[must_use]
    pub const fn rect(&self) -> Option<Rect> {
        match self.projection {
            Projection::Orthographic { rect } => Some(rect),
            Projection::Perspective { .. } => None,
        }
    }

    /// Move the eye, keeping the current center.
    ///
    /// The whole basis is rebuilt from the new front direction. An eye
    /// coinciding with the center cannot yield a view direction; such calls
    /// are rejected and leave the camera unchanged.
    pub fn set_eye(&mut self, v: Vec3) {
        let Some(front) = (self.center - v).try_normalize() else {
            log::warn!("rejected degenerate eye {v}: coincides with center");
            return;
        };
        self.eye = v;
        self.front = front;
        self.refresh_basis();
    }

    /// Move the look-at center, keeping the current eye.
    ///
    /// Rejected as a no-op when the center coincides with the eye.
    pub fn set_center(&mut self, v: Vec3) {
        let Some(front) = (v - self.eye).try_normalize() else {
            log::warn!("rejected degenerate center {v}: coincides with eye");
            return;
        };
        self.center = v;
        self.front = front;
        self.refresh_basis();
    }

    /// Set the up vector from a hint of arbitrary magnitude.
    ///
    /// Only the component of the hint orthogonal to the view direction is
    /// kept: `up = normalize((front x hint) x front)`, then
    /// `right = normalize(front x up)`. A hint parallel to the view
    /// direction (or a zero hint) is rejected as a no-op.
    pub fn set_up(&mut self, up_hint: Vec3) {
        let side = self.front.cross(up_hint);
        let Some(up) = side.cross(self.front).try_normalize() else {
            log::warn!("rejected degenerate up hint {up_hint}");
            return;
        };
        self.up = up;
        self.right = self.front.cross(up).normalize();
    }

    /// Position and orient the camera in one call.
    ///
    /// Equivalent to setting eye, center, and up in sequence, but the eye
    /// and center are committed together so a stale center cannot shadow a
    /// valid new placement. `eye == center` rejects the whole call.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        let Some(front) = (center - eye).try_normalize() else {
            log::warn!("rejected degenerate look-at: eye {eye} equals center");
            return;
        };
        self.eye = eye;
        self.center = center;
        self.front = front;
        self.set_up(up);
    }

    /// Set the near clipping plane. Must be positive and nearer than the
    /// far plane; out-of-range values are ignored.
    pub fn set_near_plane(&mut self, p: f32) {
        if p > 0.0 && p < self.far_plane {
            self.near_plane = p;
        } else {
            log::warn!("rejected near plane {p} (far plane {})", self.far_plane);
        }
    }

    /// Set the far clipping plane. Must lie beyond the near plane;
    /// out-of-range values are ignored.
    pub fn set_far_plane(&mut self, p: f32) {
        if p > self.near_plane && p.is_finite() {
            self.far_plane = p;
        } else {
            log::warn!("rejected far plane {p} (near plane {})", self.near_plane);
        }
    }

    /// Set the viewport aspect ratio. Non-positive values are ignored.
    pub fn set_aspect_ratio(&mut self, ratio: f32) {
        if ratio > 0.0 && ratio.is_finite() {
            self.aspect_ratio = ratio;
        } else {
            log::warn!("rejected aspect ratio {ratio}");
        }
    }

    /// Set the vertical field of view in degrees. Has no effect on
    /// orthographic cameras; the angle must lie in (0, 180).
    pub fn set_vertical_angle(&mut self, angle: f32) {
        if !(angle > 0.0 && angle < 180.0) {
            log::warn!("rejected vertical angle {angle}");
            return;
        }
        match &mut self.projection {
            Projection::Perspective { vertical_angle } => {
                *vertical_angle = angle;
            }
            Projection::Orthographic { .. } => {
                log::debug!("vertical angle ignored for orthographic camera");
            }
        }
    }

    /// Set the orthographic view rectangle. Has no effect on perspective
    /// cameras.
    pub fn set_rect(&mut self, r: Rect) {
        match &mut self.projection {
            Projection::Orthographic { rect } => *rect = r,
            Projection::Perspective { .. } => {
                log::debug!("view rectangle ignored for perspective camera");
            }
        }
    }

    /// Set the viewport rectangle in window coordinates.
    pub fn set_viewport(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.viewport = Viewport::new(x, y, width, height);
    }

    /// Restore every camera parameter to its documented default.
    ///
    /// Eye, center, and basis return to zero (the camera is unplaced until
    /// the next `look_at`), clipping planes, aspect, field of view, zoom,
    /// and the orthographic rectangle return to their defaults, matrices
    /// return to identity, and the movement accumulator is zeroed.
    pub fn to_default(&mut self) {
        self.eye = Vec3::ZERO;
        self.center = Vec3::ZERO;
        self.up = Vec3::ZERO;
        self.front = Vec3::ZERO;
        self.right = Vec3::ZERO;
        self.near_plane = DEFAULT_NEAR_PLANE;
        self.far_plane = DEFAULT_FAR_PLANE;
        self.aspect_ratio = DEFAULT_ASPECT_RATIO;
        self.zoom_level = DEFAULT_ZOOM;
        self.projection = match self.projection {
            Projection::Orthographic { .. } => Projection::Orthographic {
                rect: Rect::default(),
            },
            Projection::Perspective { .. } => Projection::Perspective {
                vertical_angle: DEFAULT_VERTICAL_ANGLE,
            },
        };
        self.viewport = Viewport::default();
        self.movement = Movement::default();
        self.projection_matrix = Mat4::IDENTITY;
        self.view_matrix = Mat4::IDENTITY;
    }

    /// Adjust the camera to frame the given world-space positions.
    ///
    /// Recenters on the centroid and, for perspective cameras, backs the eye
    /// away along the current view direction until the bounding sphere fits
    /// the vertical field of view with some padding. Orthographic framing
    /// only recenters, since the visible extent is independent of eye
    /// distance. Empty input is a no-op.
    pub fn fit_to_points(&mut self, points: &[Vec3]) {
        if points.is_empty() {
            return;
        }

        let centroid =
            points.iter().copied().sum::<Vec3>() / points.len() as f32;
        let radius = points
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0_f32, f32::max);

        let back = self.front.try_normalize().map_or(Vec3::Z, |f| -f);
        let up_hint = if self.up.length_squared() > 0.0 {
            self.up
        } else {
            Vec3::Y
        };

        let distance = match self.projection {
            Projection::Perspective { vertical_angle } => {
                let half = vertical_angle.to_radians() / 2.0;
                (radius / half.tan() * FIT_PADDING).max(self.near_plane)
            }
            Projection::Orthographic { .. } => {
                let current = (self.eye - self.center).length();
                if current > 0.0 {
                    current
                } else {
                    (radius * FIT_PADDING).max(self.near_plane)
                }
            }
        };

        self.look_at(centroid + back * distance, centroid, up_hint);
    }

    /// Re-derive up and right after a front change, keeping the previous up
    /// as the orthogonalization hint.
    ///
    /// When the new front is parallel to the previous up (looking straight
    /// along it), the previous right axis substitutes as the hint so the
    /// basis stays orthonormal instead of collapsing. With neither hint
    /// usable the basis is not yet established and is left untouched.
    fn refresh_basis(&mut self) {
        let side = self.front.cross(self.up);
        if let Some(up) = side.cross(self.front).try_normalize() {
            self.up = up;
            self.right = self.front.cross(up).normalize();
        } else if let Some(up) = self.right.cross(self.front).try_normalize() {
            self.up = up;
            self.right = self.front.cross(up).normalize();
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Unitless zoom scalar.
    pub zoom: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: DEFAULT_ASPECT_RATIO,
            forward: [0.0, 0.0, -1.0],
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Update uniform fields from the given camera's current state.
    ///
    /// Reads the cached matrices, so call after
    /// [`Camera::apply_settings`] for the frame.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.mvp().to_cols_array_2d();
        self.position = camera.eye().to_array();
        self.aspect = camera.aspect_ratio();
        self.forward = camera.front().to_array();
        self.zoom = camera.zoom_level();
    }
}
