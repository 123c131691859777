use crate::{
    AnchorController, AnchorError, AnchorSettings, AnchorableObject, ObjectKey, PickState,
    PickTracker, PoseMailbox, Result, Scene,
};
use anchor_core::{FrameStep, PoseHistory, PoseSnapshot};
use log::*;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The new transform of the picked object after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AnchorUpdate {
    pub object: ObjectKey,
    pub transform: PoseSnapshot,
}

/// The outcome of processing one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FrameReport {
    /// The number of frames processed so far, including this one.
    pub frame: u64,
    /// The camera poses that bracket this frame.
    pub step: FrameStep,
    /// Present when an object was picked during this frame.
    pub update: Option<AnchorUpdate>,
}

/// Everything the render thread needs to keep objects anchored.
///
/// The session owns the live camera pose, the pose history, the scene and the pick. All of
/// it is meant to be driven from the render thread; poses produced elsewhere should arrive
/// through a [`PoseMailbox`].
#[derive(Debug, Clone)]
pub struct AnchorSession {
    controller: AnchorController,
    history: PoseHistory,
    camera: PoseSnapshot,
    scene: Scene,
    picks: PickTracker,
    frame: u64,
}

impl AnchorSession {
    /// Starts a session with the camera pose at scene start.
    pub fn new(initial_camera: PoseSnapshot, settings: AnchorSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            controller: AnchorController::new(settings),
            history: PoseHistory::new(initial_camera),
            camera: initial_camera,
            scene: Scene::new(),
            picks: PickTracker::new(),
            frame: 0,
        })
    }

    /// Processes one render frame with the camera pose reported for it.
    ///
    /// The live camera pose becomes the previous pose, `pose` becomes the live pose, and the
    /// picked object (if any) is carried through the change.
    pub fn advance_frame(&mut self, pose: PoseSnapshot) -> FrameReport {
        let step = self.history.advance(self.camera, pose);
        self.camera = step.current;
        self.frame += 1;
        trace!("frame {} camera at {:?}", self.frame, self.camera.position());

        let update = self.picks.current().copied().and_then(|pick| {
            let object = self.scene.get_mut(pick.object())?;
            self.controller.reanchor(&step, &pick, object);
            Some(AnchorUpdate {
                object: pick.object(),
                transform: object.transform(),
            })
        });
        FrameReport {
            frame: self.frame,
            step,
            update,
        }
    }

    /// Processes a frame if the tracker has posted a new pose since the last one.
    pub fn advance_from(&mut self, mailbox: &PoseMailbox) -> Option<FrameReport> {
        mailbox.take().map(|pose| self.advance_frame(pose))
    }

    /// Places a new object in front of the camera.
    pub fn spawn_object(&mut self) -> ObjectKey {
        let settings = *self.controller.settings();
        self.scene
            .spawn_in_front(&self.camera, &settings.forward(), settings.spawn_distance)
    }

    pub fn insert_object(&mut self, pose: PoseSnapshot) -> ObjectKey {
        self.scene.insert(pose)
    }

    /// Removes an object, releasing the pick if it was the picked object.
    pub fn remove_object(&mut self, key: ObjectKey) -> Result<AnchorableObject> {
        let object = self
            .scene
            .remove(key)
            .ok_or(AnchorError::UnknownObject(key))?;
        if self.picks.is_picked(key) {
            self.picks.unpick();
        }
        Ok(object)
    }

    /// Picks an object, replacing any current pick.
    ///
    /// Returns the previously picked object if a different one was replaced.
    pub fn pick(&mut self, key: ObjectKey) -> Result<Option<ObjectKey>> {
        let object = self.scene.get(key).ok_or(AnchorError::UnknownObject(key))?;
        Ok(self.picks.pick(key, object, &self.camera))
    }

    /// Applies the result of a pick query. A query that hit nothing leaves the pick alone.
    pub fn apply_pick_event(&mut self, event: Option<ObjectKey>) -> Result<Option<ObjectKey>> {
        match event {
            Some(key) => self.pick(key),
            None => Ok(None),
        }
    }

    /// Releases the pick, leaving the object where it is.
    pub fn unpick(&mut self) -> Option<ObjectKey> {
        self.picks.unpick()
    }

    pub fn picked(&self) -> Option<ObjectKey> {
        self.picks.current().map(|pick| pick.object())
    }

    pub fn pick_state(&self, key: ObjectKey) -> PickState {
        self.picks.state_of(key)
    }

    /// The transform the renderer should apply to an object.
    pub fn updated_transform(&self, key: ObjectKey) -> Option<PoseSnapshot> {
        self.scene.get(key).map(AnchorableObject::transform)
    }

    /// The camera pose of the frame before the last processed one.
    pub fn previous_camera_pose(&self) -> PoseSnapshot {
        self.history.previous()
    }

    /// The camera pose of the last processed frame.
    pub fn camera_pose(&self) -> PoseSnapshot {
        self.camera
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings(&self) -> &AnchorSettings {
        self.controller.settings()
    }
}
