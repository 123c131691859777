use crate::PoseSnapshot;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The pair of camera poses that bracket one render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FrameStep {
    /// The camera pose of the frame before the one being processed.
    pub previous: PoseSnapshot,
    /// The camera pose of the frame being processed.
    pub current: PoseSnapshot,
}

impl FrameStep {
    pub fn new(previous: PoseSnapshot, current: PoseSnapshot) -> Self {
        Self { previous, current }
    }

    /// True when the camera did not move at all between the two frames.
    pub fn is_stationary(&self) -> bool {
        self.previous == self.current
    }
}

/// Remembers the camera pose of the previous render frame.
///
/// The history is initialized from the camera pose at scene start and then replaced exactly
/// once per frame. Prefer [`PoseHistory::advance`] over [`PoseHistory::capture`] in frame
/// loops, since it ties the replacement to the step that consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PoseHistory {
    previous: PoseSnapshot,
}

impl PoseHistory {
    pub fn new(initial: PoseSnapshot) -> Self {
        Self { previous: initial }
    }

    /// Replaces the stored previous pose.
    pub fn capture(&mut self, pose: PoseSnapshot) {
        self.previous = pose;
    }

    /// Retrieves a copy of the stored previous pose.
    pub fn previous(&self) -> PoseSnapshot {
        self.previous
    }

    /// Moves the history forward by one frame.
    ///
    /// `outgoing` is the live camera pose of the frame that just finished and `incoming` is
    /// the pose reported for the frame about to be processed. The outgoing pose becomes the
    /// previous pose and both are returned as the step that anchoring must consume.
    pub fn advance(&mut self, outgoing: PoseSnapshot, incoming: PoseSnapshot) -> FrameStep {
        self.capture(outgoing);
        FrameStep::new(self.previous, incoming)
    }
}
