//! # Anchor Core
//!
//! This library provides the small set of types shared by every crate that anchors
//! augmented-reality content to a tracked camera. It contains the value type used to
//! record a camera or object pose, the history that remembers where the camera was on
//! the previous render frame, and the rotation helpers the anchoring algorithm is built on.
//!
//! ## Frames and axes
//!
//! All poses live in a single right-handed world frame supplied by the device tracker.
//! A pose maps body coordinates into that world frame. The body axes follow the renderer:
//!
//! * Positive z axis is forwards ([`FORWARD`])
//! * Positive y axis is up ([`UP`])
//! * Positive x axis completes the right-handed basis
//!
//! [`FORWARD`] is the body forward of a pose, not the direction a render camera sees.
//! Render cameras look down the negative z axis, so content placed "in front of" the
//! camera sits at `camera.moved_forward(-distance)`, opposite the body forward. The
//! anchoring algorithm only compares body forwards between frames, so it is unaffected
//! by this sign.
//!
//! ## Frame steps
//!
//! Anchoring never looks at a single pose. It always consumes a [`FrameStep`], the pair of
//! camera poses that bracket one render frame. The only way to produce one while tracking
//! is [`PoseHistory::advance`], which records the outgoing pose as the previous pose in the
//! same call that hands out the pair. This makes it impossible to overwrite the previous
//! pose before the frame that needs it has been processed.
//!
//! ```text
//!   frame n-1            frame n
//!   camera ------------> camera
//!     |                    |
//!     +--- previous -------+--- current
//!            \                /
//!             +-- FrameStep -+
//! ```

mod history;
mod pose;
mod rotation;

pub use history::*;
pub use nalgebra;
pub use pose::*;
pub use rotation::*;
