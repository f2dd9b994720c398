//! Camera and control options with TOML preset support.
//!
//! All tweakable settings are consolidated here. Options serialize to/from
//! TOML so a viewer can store named view presets; every struct uses
//! `#[serde(default)]` so partial files (e.g. only overriding `[controls]`)
//! work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::core::{
    Camera, DEFAULT_ASPECT_RATIO, DEFAULT_FAR_PLANE, DEFAULT_NEAR_PLANE,
    DEFAULT_VERTICAL_ANGLE,
};
use crate::camera::projection::{Projection, Rect};
use crate::camera::Arcball;
use crate::error::TerravisError;

/// Projection variant selector for presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    /// Parallel projection.
    #[default]
    Orthographic,
    /// Pinhole projection.
    Perspective,
}

/// Camera projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Projection variant to build.
    pub projection: ProjectionKind,
    /// Vertical field of view in degrees (perspective).
    pub vertical_angle: f32,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance.
    pub far_plane: f32,
    /// Viewport aspect ratio (perspective).
    pub aspect_ratio: f32,
    /// View rectangle at zoom level 1 (orthographic).
    pub rect: Rect,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::default(),
            vertical_angle: DEFAULT_VERTICAL_ANGLE,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            rect: Rect::default(),
        }
    }
}

impl CameraOptions {
    /// Build a camera configured from these options.
    ///
    /// Out-of-range plane or aspect values fall back to the camera
    /// defaults, mirroring the setter guards.
    #[must_use]
    pub fn build(&self) -> Camera {
        let projection = match self.projection {
            ProjectionKind::Orthographic => Projection::Orthographic {
                rect: self.rect,
            },
            ProjectionKind::Perspective => Projection::Perspective {
                vertical_angle: self.vertical_angle,
            },
        };
        let mut camera = Camera::new(projection);
        camera.set_far_plane(self.far_plane);
        camera.set_near_plane(self.near_plane);
        camera.set_aspect_ratio(self.aspect_ratio);
        camera
    }
}

/// Pointer and wheel control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlOptions {
    /// Arcball rotation sensitivity multiplier.
    pub rotate_speed: f32,
    /// Zoom factor applied per wheel step toward the scene.
    pub zoom_in_factor: f32,
    /// Zoom factor applied per wheel step away from the scene.
    pub zoom_out_factor: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_in_factor: 0.8,
            zoom_out_factor: 1.25,
        }
    }
}

impl ControlOptions {
    /// Build an arcball controller configured from these options.
    #[must_use]
    pub fn arcball(&self) -> Arcball {
        Arcball::with_rotate_speed(self.rotate_speed)
    }
}

/// Top-level options container for view presets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Pointer and wheel control parameters.
    pub controls: ControlOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TerravisError> {
        let content =
            std::fs::read_to_string(path).map_err(TerravisError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| TerravisError::OptionsParse(e.to_string()))?;
        log::info!("loaded view preset from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TerravisError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TerravisError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TerravisError::Io)?;
        }
        std::fs::write(path, content).map_err(TerravisError::Io)?;
        log::info!("saved view preset to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
projection = "perspective"
vertical_angle = 60.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.projection, ProjectionKind::Perspective);
        assert_eq!(opts.camera.vertical_angle, 60.0);
        // Everything else should be default.
        assert_eq!(opts.camera.near_plane, 2.0);
        assert_eq!(opts.controls.zoom_in_factor, 0.8);
        assert_eq!(opts.controls.zoom_out_factor, 1.25);
    }

    #[test]
    fn build_configures_perspective_camera() {
        let opts = CameraOptions {
            projection: ProjectionKind::Perspective,
            vertical_angle: 60.0,
            near_plane: 2.0,
            far_plane: 15000.0,
            aspect_ratio: 16.0 / 9.0,
            rect: Rect::default(),
        };
        let camera = opts.build();

        assert_eq!(camera.vertical_angle(), Some(60.0));
        assert_eq!(camera.far_plane(), 15000.0);
        assert_eq!(camera.aspect_ratio(), 16.0 / 9.0);
        assert_eq!(camera.rect(), None);
    }

    #[test]
    fn build_configures_orthographic_camera() {
        let opts = CameraOptions {
            rect: Rect::new(-400.0, 400.0, -300.0, 300.0),
            far_plane: 5000.0,
            ..CameraOptions::default()
        };
        let camera = opts.build();

        assert_eq!(
            camera.rect(),
            Some(Rect::new(-400.0, 400.0, -300.0, 300.0))
        );
        assert_eq!(camera.far_plane(), 5000.0);
        assert_eq!(camera.vertical_angle(), None);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut opts = Options::default();
        opts.controls.rotate_speed = 0.5;
        let path =
            std::env::temp_dir().join("terravis_options_round_trip.toml");

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, loaded);
    }

    #[test]
    fn load_reports_malformed_toml() {
        let path = std::env::temp_dir().join("terravis_options_broken.toml");
        std::fs::write(&path, "[camera\nnope").unwrap();

        let err = Options::load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, TerravisError::OptionsParse(_)));
    }

    #[test]
    fn arcball_uses_configured_speed() {
        let controls = ControlOptions {
            rotate_speed: 2.0,
            ..ControlOptions::default()
        };
        let arcball = controls.arcball();
        assert_eq!(arcball, Arcball::with_rotate_speed(2.0));
    }
}
