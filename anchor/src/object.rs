use anchor_core::{
    nalgebra::{UnitQuaternion, Vector3},
    PoseSnapshot,
};
use slotmap::new_key_type;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

new_key_type! {
    /// Identifies an object placed in a [`Scene`](crate::Scene).
    pub struct ObjectKey;
}

/// A virtual object placed in the world.
///
/// The object only carries its transform. Meshes, materials and picking colors belong to
/// the renderer, which looks objects up by their [`ObjectKey`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AnchorableObject {
    pose: PoseSnapshot,
}

impl AnchorableObject {
    pub fn new(pose: PoseSnapshot) -> Self {
        Self { pose }
    }

    pub fn position(&self) -> Vector3<f64> {
        self.pose.position()
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.pose.orientation()
    }

    /// The object's current transform as a snapshot.
    pub fn transform(&self) -> PoseSnapshot {
        self.pose
    }

    pub fn set_transform(&mut self, pose: PoseSnapshot) {
        self.pose = pose;
    }
}
