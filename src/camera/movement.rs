use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::camera::projection::Projection;
use crate::util;

/// Cumulative record of requested camera movement.
///
/// Every field accumulates the *requested* amount of its operation, even
/// when a guard rejects the geometric move (a dolly past the allowed range
/// still counts toward `dolly`). The record is purely observational: it is
/// never fed back into the camera state, and [`Camera::to_default`] zeroes
/// it.
///
/// Pan, tilt, and translation exist only here; the corresponding calls
/// deliberately leave eye, center, and basis untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Movement {
    /// Sum of requested dolly distances.
    pub dolly: f32,
    /// Sum of requested pan angles, in degrees.
    pub pan: f32,
    /// Sum of requested pedestal distances.
    pub pedestal: f32,
    /// Sum of requested tilt angles, in degrees.
    pub tilt: f32,
    /// Sum of requested truck distances.
    pub truck: f32,
    /// Sum of requested zoom factors.
    pub zoom: f32,
    /// Sum of requested world-space translations.
    pub translation: Vec3,
}

impl Camera {
    /// Accumulated movement since creation or the last reset.
    #[must_use]
    pub const fn movement(&self) -> &Movement {
        &self.movement
    }

    /// Move eye and center laterally along the right axis by `x`.
    pub fn truck(&mut self, x: f32) {
        self.movement.truck += x;
        let offset = self.right * x;
        self.eye += offset;
        self.center += offset;
    }

    /// Move eye and center vertically by `y`.
    ///
    /// The axis is re-derived from front and up at call time
    /// (`normalize((front x up) x front)`), so it stays orthogonal to the
    /// view direction even if front changed since up was last set.
    pub fn pedestal(&mut self, y: f32) {
        self.movement.pedestal += y;
        let axis = self.front.cross(self.up).cross(self.front).normalize_or_zero();
        let offset = axis * y;
        self.eye += offset;
        self.center += offset;
    }

    /// Move the eye along the view direction by `t`, toward the center.
    ///
    /// The move is one-sided: it applies only when the resulting
    /// eye-to-center distance is strictly smaller than the pre-move
    /// distance. Requests that would back the eye away (negative `t`) are
    /// recorded in the accumulator but do not move the eye.
    pub fn dolly(&mut self, t: f32) {
        self.movement.dolly += t;
        let proposed = self.eye + self.front * t;
        if (self.center - proposed).length() < (self.center - self.eye).length()
        {
            self.set_eye(proposed);
        }
    }

    /// Record a horizontal pan request of `x_deg` degrees.
    ///
    /// Telemetry only; the view basis is not rotated.
    pub fn pan(&mut self, x_deg: f32) {
        self.movement.pan += x_deg;
    }

    /// Record a vertical tilt request of `y_deg` degrees.
    ///
    /// Telemetry only; the view basis is not rotated.
    pub fn tilt(&mut self, y_deg: f32) {
        self.movement.tilt += y_deg;
    }

    /// Record a world-space translation request.
    ///
    /// Telemetry only; eye and center do not move.
    pub fn translate(&mut self, v: Vec3) {
        self.movement.translation += v;
    }

    /// Scale the zoom level by `factor`.
    ///
    /// Zooming is multiplicative and consumed only at projection-build
    /// time: it widens (factor > 1) or narrows (factor < 1) the
    /// orthographic extent, and scales the perspective field of view. The
    /// factor must be positive and finite; anything else is ignored.
    pub fn zoom(&mut self, factor: f32) {
        if factor <= 0.0 || !factor.is_finite() {
            log::warn!("rejected zoom factor {factor}");
            return;
        }
        self.movement.zoom += factor;
        self.zoom_level *= factor;
    }

    /// Reposition the eye on the sphere around the center.
    ///
    /// `x_deg` and `y_deg` are absolute spherical angles, not deltas: the
    /// eye lands at `center + direction * radius` where direction is
    /// `(cos x cos y, sin y, sin x cos y)` and radius is the eye-to-center
    /// distance before the call. The orbit radius is preserved exactly.
    /// For pointer-driven orbiting with accumulated deltas see
    /// [`crate::camera::Arcball`].
    pub fn orbit(&mut self, x_deg: f32, y_deg: f32) {
        let radius = (self.eye - self.center).length();
        let dir = util::spherical_direction(
            x_deg.to_radians(),
            y_deg.to_radians(),
        );
        self.set_eye(self.center + dir * radius);
    }

    /// Zoom while keeping the point under the cursor visually fixed.
    ///
    /// `cursor` is in viewport-local, center-origin coordinates (see
    /// [`crate::util::screen_pos`]). For orthographic cameras the zoom is
    /// applied and the eye/center pair is shifted by a compensating
    /// truck/pedestal proportional to the zoom delta; combined with the
    /// extent scaling this keeps the cursor's world point approximately
    /// stationary. The compensation is a first-order approximation and is
    /// not an exact inverse for large single-step factors.
    ///
    /// Perspective cameras ignore this call entirely; zooming there is
    /// achieved through [`Camera::dolly`].
    pub fn zoom_at(&mut self, cursor: Vec2, factor: f32) {
        match self.projection {
            Projection::Orthographic { .. } => {
                let zoom_before = self.zoom_level;
                self.zoom(factor);
                let delta = self.zoom_level - zoom_before;
                let world = Vec3::new(-cursor.x, cursor.y, 0.0) * delta;
                self.truck(world.x);
                self.pedestal(world.y);
            }
            Projection::Perspective { .. } => {}
        }
    }
}
