use anchor_core::PoseSnapshot;
use parking_lot::Mutex;
use std::sync::Arc;

/// Hands camera poses from the tracking thread to the render thread.
///
/// The tracker may post any number of poses between two frames; only the latest one is kept.
/// The render thread takes it exactly once per frame, before anchoring runs, so a pose never
/// changes while a frame is being computed.
#[derive(Debug, Clone, Default)]
pub struct PoseMailbox {
    slot: Arc<Mutex<Option<PoseSnapshot>>>,
}

impl PoseMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pose that has not been taken yet.
    pub fn post(&self, pose: PoseSnapshot) {
        *self.slot.lock() = Some(pose);
    }

    /// Takes the latest pose, leaving the mailbox empty.
    pub fn take(&self) -> Option<PoseSnapshot> {
        self.slot.lock().take()
    }

    /// Looks at the latest pose without taking it.
    pub fn peek(&self) -> Option<PoseSnapshot> {
        *self.slot.lock()
    }
}
