use crate::{AnchorableObject, ObjectKey};
use anchor_core::{PoseSnapshot, RelativeOrientation};
use log::*;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Whether an object is currently carried by the user.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickState {
    Free,
    Picked,
}

/// The object currently carried by the user.
///
/// A `Pick` can only be created by a [`PickTracker`], so holding one proves an object is picked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pick {
    object: ObjectKey,
    orientation_offset: RelativeOrientation,
}

impl Pick {
    pub fn object(&self) -> ObjectKey {
        self.object
    }

    /// The object's orientation relative to the camera at the moment it was picked.
    pub fn orientation_offset(&self) -> RelativeOrientation {
        self.orientation_offset
    }
}

/// Owns the single pick.
///
/// Picking an object replaces any previous pick, so at most one object is ever picked.
#[derive(Debug, Clone, Default)]
pub struct PickTracker {
    current: Option<Pick>,
}

impl PickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks `key`, capturing its orientation relative to `camera`.
    ///
    /// Returns the key of the pick that was replaced, if it was a different object.
    pub fn pick(
        &mut self,
        key: ObjectKey,
        object: &AnchorableObject,
        camera: &PoseSnapshot,
    ) -> Option<ObjectKey> {
        let orientation_offset =
            RelativeOrientation::between(&camera.orientation(), &object.orientation());
        let replaced = self
            .current
            .replace(Pick {
                object: key,
                orientation_offset,
            })
            .map(|pick| pick.object)
            .filter(|&previous| previous != key);
        if let Some(previous) = replaced {
            debug!("object {:?} replaced {:?} as the pick", key, previous);
        } else {
            debug!("object {:?} picked", key);
        }
        replaced
    }

    /// Releases the pick, returning the key of the object that was picked.
    pub fn unpick(&mut self) -> Option<ObjectKey> {
        let released = self.current.take().map(|pick| pick.object);
        if let Some(key) = released {
            debug!("object {:?} released", key);
        }
        released
    }

    pub fn current(&self) -> Option<&Pick> {
        self.current.as_ref()
    }

    pub fn is_picked(&self, key: ObjectKey) -> bool {
        self.current.map_or(false, |pick| pick.object == key)
    }

    pub fn state_of(&self, key: ObjectKey) -> PickState {
        if self.is_picked(key) {
            PickState::Picked
        } else {
            PickState::Free
        }
    }
}
