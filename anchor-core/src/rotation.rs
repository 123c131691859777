use core::f64::consts::PI;
use nalgebra::{Unit, UnitQuaternion, Vector3};

/// Components shorter than this are treated as zero when building axes.
const AXIS_EPSILON: f64 = 1e-9;

/// Computes the shortest-arc rotation that maps the direction `from` onto `to`.
///
/// The arc is undefined when the two directions are exactly opposite, since every axis
/// perpendicular to them yields a valid half turn. In that case a half turn about
/// [`half_turn_axis`]`(from, up_hint)` is returned, so the result is always a finite rotation.
pub fn rotation_between(
    from: &Vector3<f64>,
    to: &Vector3<f64>,
    up_hint: &Vector3<f64>,
) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(from, to)
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&half_turn_axis(from, up_hint), PI))
}

/// Chooses a deterministic axis perpendicular to `forward`.
///
/// The candidates are tried in order and the first one with a usable component orthogonal
/// to `forward` is returned, normalized:
///
/// * `up_hint`
/// * the world x axis
/// * the world z axis
///
/// When `up_hint` is the vertical axis, this makes a degenerate half turn a turn about the
/// vertical, which is how a user turns around.
pub fn half_turn_axis(forward: &Vector3<f64>, up_hint: &Vector3<f64>) -> Unit<Vector3<f64>> {
    let forward = match Unit::try_new(*forward, AXIS_EPSILON) {
        Some(forward) => forward,
        None => return Vector3::y_axis(),
    };
    [*up_hint, Vector3::x(), Vector3::z()]
        .iter()
        .find_map(|candidate| {
            let orthogonal = candidate - forward.into_inner() * forward.dot(candidate);
            Unit::try_new(orthogonal, AXIS_EPSILON)
        })
        .unwrap_or_else(Vector3::y_axis)
}

/// Computes the orientation whose body forward axis points from `eye` towards `target`.
///
/// The body up axis is kept as close to `up_hint` as possible. Returns `None` if `eye` and
/// `target` coincide or if `up_hint` is parallel to the viewing direction.
pub fn look_at(
    eye: &Vector3<f64>,
    target: &Vector3<f64>,
    up_hint: &Vector3<f64>,
) -> Option<UnitQuaternion<f64>> {
    let dir = Unit::try_new(target - eye, AXIS_EPSILON)?.into_inner();
    // face_towards normalizes this cross product without checking it.
    Unit::try_new(up_hint.cross(&dir), AXIS_EPSILON)?;
    Some(UnitQuaternion::face_towards(&dir, up_hint))
}
