//! # Anchor
//!
//! Keeps virtual objects anchored while a tracked camera moves, and lets the user carry one
//! object along with their view to re-anchor it somewhere else.
//!
//! An [`AnchorSession`] is driven once per render frame with the camera pose for that frame.
//! Free objects keep their world transform. The picked object, if any, is moved through the
//! same turn the camera made since the previous frame, so it pivots together with the view
//! instead of being left behind.
//!
//! ```
//! use anchor::{AnchorSession, AnchorSettings};
//! use anchor_core::{nalgebra::{UnitQuaternion, Vector3}, PoseSnapshot};
//!
//! let mut session = AnchorSession::new(PoseSnapshot::identity(), AnchorSettings::default()).unwrap();
//! let object = session.spawn_object();
//! session.pick(object).unwrap();
//!
//! let turned = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.25);
//! let report = session.advance_frame(PoseSnapshot::new(Vector3::zeros(), turned));
//! assert_eq!(report.update.unwrap().object, object);
//! ```

mod controller;
mod error;
mod mailbox;
mod object;
mod pick;
mod scene;
mod session;
mod settings;

pub use controller::*;
pub use error::*;
pub use mailbox::*;
pub use object::*;
pub use pick::*;
pub use scene::*;
pub use session::*;
pub use settings::*;
