use crate::{AnchorableObject, ObjectKey};
use anchor_core::{nalgebra::Vector3, PoseSnapshot};
use log::*;
use slotmap::DenseSlotMap;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Every object placed by the user, keyed by [`ObjectKey`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Scene {
    objects: DenseSlotMap<ObjectKey, AnchorableObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an object with the given transform.
    pub fn insert(&mut self, pose: PoseSnapshot) -> ObjectKey {
        let key = self.objects.insert(AnchorableObject::new(pose));
        debug!("placed object {:?} at {:?}", key, pose.position());
        key
    }

    /// Places an object `distance` units in front of the camera, with the camera's orientation.
    ///
    /// The object is placed opposite the camera's body forward, where a render camera looks.
    /// See the `anchor_core` crate docs on frames and axes.
    pub fn spawn_in_front(
        &mut self,
        camera: &PoseSnapshot,
        forward_axis: &Vector3<f64>,
        distance: f64,
    ) -> ObjectKey {
        let position = camera.position() - camera.direction(forward_axis) * distance;
        self.insert(camera.with_position(position))
    }

    pub fn remove(&mut self, key: ObjectKey) -> Option<AnchorableObject> {
        self.objects.remove(key)
    }

    pub fn get(&self, key: ObjectKey) -> Option<&AnchorableObject> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut AnchorableObject> {
        self.objects.get_mut(key)
    }

    pub fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &AnchorableObject)> + '_ {
        self.objects.iter()
    }
}
