use anchor::{AnchorError, AnchorSession, AnchorSettings, ObjectKey};
use anchor_core::{
    nalgebra::{Quaternion, UnitQuaternion, Vector3},
    PoseSnapshot,
};
use log::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("step {step} refers to object {index}, but only {count} objects were placed")]
    UnknownObject {
        step: usize,
        index: usize,
        count: usize,
    },
    #[error("step {step} has a non-finite position or a zero-length orientation")]
    InvalidPose { step: usize },
    #[error("the initial camera has a non-finite position or a zero-length orientation")]
    InvalidInitialCamera,
    #[error(transparent)]
    Anchor(#[from] AnchorError),
}

/// A [`PoseRecord`] that does not describe a rigid pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pose record is not finite or its orientation cannot be normalized")]
pub struct InvalidPoseRecord;

/// A pose as written in scripts and output: a position and an `[x, y, z, w]` quaternion.
///
/// The quaternion does not need to be normalized, but it must have a nonzero length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    pub position: [f64; 3],
    #[serde(default = "default_orientation")]
    pub orientation: [f64; 4],
}

fn default_orientation() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

impl TryFrom<PoseRecord> for PoseSnapshot {
    type Error = InvalidPoseRecord;

    fn try_from(record: PoseRecord) -> Result<Self, Self::Error> {
        let finite = record
            .position
            .iter()
            .chain(record.orientation.iter())
            .all(|n| n.is_finite());
        if !finite {
            return Err(InvalidPoseRecord);
        }
        let [x, y, z, w] = record.orientation;
        let orientation = UnitQuaternion::try_new(Quaternion::new(w, x, y, z), f64::EPSILON)
            .ok_or(InvalidPoseRecord)?;
        Ok(PoseSnapshot::new(Vector3::from(record.position), orientation))
    }
}

impl From<PoseSnapshot> for PoseRecord {
    fn from(pose: PoseSnapshot) -> Self {
        let position = pose.position();
        let orientation = pose.orientation();
        Self {
            position: [position.x, position.y, position.z],
            orientation: [orientation.i, orientation.j, orientation.k, orientation.w],
        }
    }
}

/// One scripted event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// The tracker reported a new camera pose; processes one frame.
    Camera(PoseRecord),
    /// Places an object in front of the camera.
    Spawn,
    /// Places an object at the given pose.
    Insert(PoseRecord),
    /// Picks the object with the given placement index.
    Pick(usize),
    Unpick,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_initial_camera")]
    pub initial_camera: PoseRecord,
    pub steps: Vec<Step>,
}

fn default_initial_camera() -> PoseRecord {
    PoseRecord {
        position: [0.0; 3],
        orientation: default_orientation(),
    }
}

/// What the renderer would receive after one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub previous_camera: PoseRecord,
    pub camera: PoseRecord,
    pub picked: Option<usize>,
    pub transform: Option<PoseRecord>,
}

impl Script {
    /// Runs every step through a fresh session and records each processed frame.
    pub fn run(&self, settings: AnchorSettings) -> Result<Vec<FrameRecord>, ScriptError> {
        let initial_camera = PoseSnapshot::try_from(self.initial_camera)
            .map_err(|_| ScriptError::InvalidInitialCamera)?;
        let mut session = AnchorSession::new(initial_camera, settings)?;
        let mut objects: Vec<ObjectKey> = vec![];
        let mut frames = vec![];
        for (step_ix, step) in self.steps.iter().enumerate() {
            let pose = |record: PoseRecord| {
                PoseSnapshot::try_from(record)
                    .map_err(|_| ScriptError::InvalidPose { step: step_ix })
            };
            match *step {
                Step::Camera(record) => {
                    let report = session.advance_frame(pose(record)?);
                    let update = report.update;
                    frames.push(FrameRecord {
                        frame: report.frame,
                        previous_camera: report.step.previous.into(),
                        camera: report.step.current.into(),
                        picked: update
                            .and_then(|update| objects.iter().position(|&k| k == update.object)),
                        transform: update.map(|update| update.transform.into()),
                    });
                }
                Step::Spawn => objects.push(session.spawn_object()),
                Step::Insert(record) => objects.push(session.insert_object(pose(record)?)),
                Step::Pick(index) => {
                    let key = *objects.get(index).ok_or(ScriptError::UnknownObject {
                        step: step_ix,
                        index,
                        count: objects.len(),
                    })?;
                    session.pick(key)?;
                }
                Step::Unpick => {
                    session.unpick();
                }
            }
        }
        info!(
            "processed {} frames with {} objects",
            session.frame_count(),
            objects.len()
        );
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_script() {
        let script: Script = serde_json::from_str(
            r#"{
                "steps": [
                    "spawn",
                    { "pick": 0 },
                    { "camera": { "position": [0, 0, 0], "orientation": [0, 0.7071067811865476, 0, 0.7071067811865476] } },
                    "unpick",
                    { "camera": { "position": [0, 0, 1] } }
                ]
            }"#,
        )
        .unwrap();
        let frames = script.run(AnchorSettings::default()).unwrap();
        assert_eq!(frames.len(), 2);

        let moved = frames[0].transform.unwrap();
        assert_eq!(frames[0].picked, Some(0));
        assert!((moved.position[0] - 1.0).abs() < 1e-5);
        assert!(moved.position[2].abs() < 1e-5);

        assert_eq!(frames[1].picked, None);
        assert_eq!(frames[1].previous_camera, frames[0].camera);
    }

    #[test]
    fn bundled_script_runs() {
        let script: Script = serde_json::from_str(include_str!("../scripts/carry.json")).unwrap();
        let frames = script.run(AnchorSettings::default()).unwrap();
        assert_eq!(frames.len(), 5);
        assert!(frames[..3].iter().all(|frame| frame.picked == Some(0)));
        assert_eq!(frames[3].picked, None);
        assert_eq!(frames[4].picked, Some(1));
    }

    #[test]
    fn unknown_object_index() {
        let script = Script {
            initial_camera: default_initial_camera(),
            steps: vec![Step::Spawn, Step::Pick(3)],
        };
        assert!(matches!(
            script.run(AnchorSettings::default()),
            Err(ScriptError::UnknownObject {
                step: 1,
                index: 3,
                count: 1
            })
        ));
    }

    #[test]
    fn zero_orientation_is_rejected() {
        let script: Script = serde_json::from_str(
            r#"{
                "steps": [
                    "spawn",
                    { "pick": 0 },
                    { "camera": { "position": [0, 0, 0], "orientation": [0, 0, 0, 0] } }
                ]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            script.run(AnchorSettings::default()),
            Err(ScriptError::InvalidPose { step: 2 })
        ));
    }

    #[test]
    fn non_finite_poses_are_rejected() {
        let script = Script {
            initial_camera: default_initial_camera(),
            steps: vec![Step::Insert(PoseRecord {
                position: [f64::NAN, 0.0, 0.0],
                orientation: default_orientation(),
            })],
        };
        assert!(matches!(
            script.run(AnchorSettings::default()),
            Err(ScriptError::InvalidPose { step: 0 })
        ));

        let script = Script {
            initial_camera: PoseRecord {
                position: [0.0; 3],
                orientation: [0.0, f64::INFINITY, 0.0, 1.0],
            },
            steps: vec![],
        };
        assert!(matches!(
            script.run(AnchorSettings::default()),
            Err(ScriptError::InvalidInitialCamera)
        ));
    }

    #[test]
    fn unnormalized_orientation_is_normalized() {
        let record = PoseRecord {
            position: [1.0, 2.0, 3.0],
            orientation: [0.0, 0.0, 0.0, 2.0],
        };
        let pose = PoseSnapshot::try_from(record).unwrap();
        assert_eq!(
            PoseRecord::from(pose),
            PoseRecord {
                position: [1.0, 2.0, 3.0],
                orientation: [0.0, 0.0, 0.0, 1.0],
            }
        );
    }
}
