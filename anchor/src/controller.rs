use crate::{AnchorSettings, AnchorableObject, OrientationMode, Pick};
use anchor_core::{
    look_at,
    nalgebra::{UnitQuaternion, Vector3},
    rotation_between, FrameStep, PoseSnapshot,
};
use log::*;

/// Carries the picked object along with the user's view.
///
/// Every frame the camera turns by some amount. The picked object is moved through the same
/// turn about the camera, so it stays where the user was looking at it instead of staying
/// behind at its old world position.
#[derive(Debug, Clone, Copy)]
pub struct AnchorController {
    settings: AnchorSettings,
    forward: Vector3<f64>,
    up: Vector3<f64>,
    /// Maps the configured body axes onto the canonical ones used by [`look_at`].
    basis: UnitQuaternion<f64>,
}

impl AnchorController {
    pub fn new(settings: AnchorSettings) -> Self {
        let forward = settings.forward();
        let up = settings.up();
        let basis = look_at(&Vector3::zeros(), &forward, &up)
            .map(|basis| basis.inverse())
            .unwrap_or_else(UnitQuaternion::identity);
        Self {
            settings,
            forward,
            up,
            basis,
        }
    }

    pub fn settings(&self) -> &AnchorSettings {
        &self.settings
    }

    /// The rotation that takes the camera's current forward direction back onto its previous
    /// forward direction.
    ///
    /// Only the change in view direction matters here. Translation of the camera is handled
    /// separately by [`AnchorController::reanchor`].
    pub fn rotation_delta(&self, step: &FrameStep) -> UnitQuaternion<f64> {
        let initial_forward = step.previous.direction(&self.forward);
        let final_forward = step.current.direction(&self.forward);
        rotation_between(&final_forward, &initial_forward, &self.up)
    }

    /// Recomputes the transform of the picked object for one frame.
    pub fn reanchor(&self, step: &FrameStep, pick: &Pick, object: &mut AnchorableObject) {
        if step.is_stationary() {
            return;
        }
        let transform = self.reanchored_transform(step, pick, &object.transform());
        trace!(
            "moved object {:?} from {:?} to {:?}",
            pick.object(),
            object.position(),
            transform.position()
        );
        object.set_transform(transform);
    }

    fn reanchored_transform(
        &self,
        step: &FrameStep,
        pick: &Pick,
        transform: &PoseSnapshot,
    ) -> PoseSnapshot {
        let rotation = self.rotation_delta(step);
        let camera = step.current.position();

        // Both the object and the point it faces are carried relative to the previous camera.
        let offset = transform.position() - step.previous.position();
        let look_at_offset = offset + transform.direction(&self.forward);
        let position = camera + rotation * offset;
        let target = camera + rotation * look_at_offset;

        let orientation = match self.settings.orientation_mode {
            OrientationMode::LookAt => {
                let up = rotation * transform.direction(&self.up);
                look_at(&position, &target, &up)
                    .map(|aim| aim * self.basis)
                    .unwrap_or_else(|| rotation * transform.orientation())
            }
            OrientationMode::ViewLocked => pick
                .orientation_offset()
                .apply(&step.current.orientation()),
        };
        PoseSnapshot::new(position, orientation)
    }
}
