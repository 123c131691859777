use derive_more::{From, Into};
use nalgebra::{Isometry3, Translation3, Unit, UnitQuaternion, Vector3};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The body axis that points forwards.
pub const FORWARD: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);

/// The body axis that points up.
pub const UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);

/// A position and orientation captured at one instant.
///
/// A snapshot is a plain value. Copying it produces an independent record, so a snapshot
/// taken of the live camera can never observe later changes to that camera. Snapshots are
/// never edited in place; the `with_*` methods produce a superseding copy instead.
///
/// The orientation is always a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PoseSnapshot {
    position: Vector3<f64>,
    orientation: UnitQuaternion<f64>,
}

impl PoseSnapshot {
    #[inline(always)]
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// A pose at the origin with no rotation.
    #[inline(always)]
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), UnitQuaternion::identity())
    }

    /// Creates a pose from a translation and an orientation.
    #[inline(always)]
    pub fn from_parts(translation: Translation3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self::new(translation.vector, orientation)
    }

    #[inline(always)]
    pub fn from_isometry(isometry: Isometry3<f64>) -> Self {
        Self::new(isometry.translation.vector, isometry.rotation)
    }

    /// Retrieve the isometry mapping body coordinates into world coordinates.
    #[inline(always)]
    pub fn isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(self.position.into(), self.orientation)
    }

    #[inline(always)]
    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    #[inline(always)]
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.orientation
    }

    /// Rotates a body-frame axis into the world frame.
    #[inline(always)]
    pub fn direction(&self, axis: &Vector3<f64>) -> Vector3<f64> {
        self.orientation * axis
    }

    /// The world direction of the body [`FORWARD`] axis.
    #[inline(always)]
    pub fn forward(&self) -> Unit<Vector3<f64>> {
        Unit::new_unchecked(self.direction(&FORWARD))
    }

    /// The world direction of the body [`UP`] axis.
    #[inline(always)]
    pub fn up(&self) -> Unit<Vector3<f64>> {
        Unit::new_unchecked(self.direction(&UP))
    }

    /// Returns a copy translated by `distance` along the body forward axis.
    ///
    /// Negative distances move backwards.
    #[must_use]
    pub fn moved_forward(&self, distance: f64) -> Self {
        self.with_position(self.position + self.direction(&FORWARD) * distance)
    }

    #[must_use]
    #[inline(always)]
    pub fn with_position(&self, position: Vector3<f64>) -> Self {
        Self::new(position, self.orientation)
    }

    #[must_use]
    #[inline(always)]
    pub fn with_orientation(&self, orientation: UnitQuaternion<f64>) -> Self {
        Self::new(self.position, orientation)
    }
}

impl Default for PoseSnapshot {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Isometry3<f64>> for PoseSnapshot {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self::from_isometry(isometry)
    }
}

impl From<PoseSnapshot> for Isometry3<f64> {
    fn from(pose: PoseSnapshot) -> Self {
        pose.isometry()
    }
}

/// The orientation of one body expressed in the body frame of another.
///
/// Given a reference orientation `R` and an orientation `O`, the relative orientation is
/// `R⁻¹ * O`. Re-applying it to a new reference `R'` yields `R' * R⁻¹ * O`, which carries
/// `O` through the same world rotation that took `R` to `R'`.
#[derive(Debug, Clone, Copy, PartialEq, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RelativeOrientation(pub UnitQuaternion<f64>);

impl RelativeOrientation {
    /// Captures `orientation` relative to `reference`.
    pub fn between(reference: &UnitQuaternion<f64>, orientation: &UnitQuaternion<f64>) -> Self {
        Self(reference.inverse() * orientation)
    }

    /// Re-expresses the captured orientation in the world frame against a new reference.
    pub fn apply(&self, reference: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        reference * self.0
    }
}
