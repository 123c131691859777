use crate::{AnchorError, Result};
use anchor_core::{nalgebra::Vector3, FORWARD, UP};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// How a picked object's orientation is rebuilt every frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrientationMode {
    /// Aim the object along its own forward direction after carrying it through the
    /// camera's turn.
    LookAt,
    /// Hold the orientation the object had relative to the camera when it was picked.
    ViewLocked,
}

impl Default for OrientationMode {
    fn default() -> Self {
        Self::LookAt
    }
}

/// The settings for anchoring.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnchorSettings {
    /// The body axis that a camera or object considers forward
    #[cfg_attr(feature = "serde-serialize", serde(default = "default_forward_axis"))]
    pub forward_axis: Vector3<f64>,
    /// The body axis that a camera or object considers up
    #[cfg_attr(feature = "serde-serialize", serde(default = "default_up_axis"))]
    pub up_axis: Vector3<f64>,
    /// How far in front of the camera newly spawned objects are placed
    #[cfg_attr(feature = "serde-serialize", serde(default = "default_spawn_distance"))]
    pub spawn_distance: f64,
    /// How the orientation of the picked object is updated
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub orientation_mode: OrientationMode,
}

impl AnchorSettings {
    /// Checks that the axes form a usable basis and the spawn distance is sane.
    pub fn validate(&self) -> Result<()> {
        let axes_finite = self
            .forward_axis
            .iter()
            .chain(self.up_axis.iter())
            .all(|n| n.is_finite());
        if !axes_finite {
            return Err(AnchorError::InvalidSettings("axes must be finite"));
        }
        if self.forward_axis.norm() < 1e-9 || self.up_axis.norm() < 1e-9 {
            return Err(AnchorError::InvalidSettings("axes must be non-zero"));
        }
        if self.forward_axis.normalize().cross(&self.up_axis.normalize()).norm() < 1e-6 {
            return Err(AnchorError::InvalidSettings(
                "forward and up axes must not be parallel",
            ));
        }
        if !self.spawn_distance.is_finite() || self.spawn_distance <= 0.0 {
            return Err(AnchorError::InvalidSettings(
                "spawn distance must be finite and positive",
            ));
        }
        Ok(())
    }

    /// The forward axis, normalized.
    pub fn forward(&self) -> Vector3<f64> {
        self.forward_axis.normalize()
    }

    /// The up axis, normalized.
    pub fn up(&self) -> Vector3<f64> {
        self.up_axis.normalize()
    }
}

impl Default for AnchorSettings {
    fn default() -> Self {
        Self {
            forward_axis: default_forward_axis(),
            up_axis: default_up_axis(),
            spawn_distance: default_spawn_distance(),
            orientation_mode: OrientationMode::default(),
        }
    }
}

fn default_forward_axis() -> Vector3<f64> {
    FORWARD
}

fn default_up_axis() -> Vector3<f64> {
    UP
}

fn default_spawn_distance() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        AnchorSettings::default().validate().unwrap();
    }

    #[test]
    fn rejects_parallel_axes() {
        let settings = AnchorSettings {
            up_axis: Vector3::new(0.0, 0.0, -2.0),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(AnchorError::InvalidSettings(_))
        ));
    }

    #[test]
    fn rejects_bad_spawn_distance() {
        for spawn_distance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let settings = AnchorSettings {
                spawn_distance,
                ..Default::default()
            };
            assert!(settings.validate().is_err());
        }
    }

    #[cfg(feature = "serde-serialize")]
    #[test]
    fn missing_fields_use_defaults() {
        let settings: AnchorSettings =
            serde_json::from_str(r#"{ "orientation_mode": "ViewLocked" }"#).unwrap();
        assert_eq!(settings.forward_axis, FORWARD);
        assert_eq!(settings.spawn_distance, 1.0);
        assert_eq!(settings.orientation_mode, OrientationMode::ViewLocked);
    }
}
