use anchor_core::{
    half_turn_axis,
    nalgebra::{UnitQuaternion, Vector3},
    rotation_between, PoseSnapshot, RelativeOrientation, FORWARD, UP,
};
use approx::assert_relative_eq;
use quickcheck::{QuickCheck, TestResult};

const EPSILON_APPROX: f64 = 1e-9;
const MIN_CHECKED_CASES: u64 = 100;

/// Folds arbitrary floats into a box of the given half-width, rejecting NaN and infinity.
fn bounded(v: (f64, f64, f64), half_width: f64) -> Option<Vector3<f64>> {
    let (x, y, z) = v;
    if [x, y, z].iter().all(|n| n.is_finite()) {
        Some(Vector3::new(x % half_width, y % half_width, z % half_width))
    } else {
        None
    }
}

fn rotation_between_maps_from_onto_to(a: (f64, f64, f64), b: (f64, f64, f64)) -> TestResult {
    let (from, to) = match (bounded(a, 10.0), bounded(b, 10.0)) {
        (Some(from), Some(to)) if from.norm() >= 1e-3 && to.norm() >= 1e-3 => (from, to),
        _ => return TestResult::discard(),
    };
    let rotation = rotation_between(&from, &to, &UP);
    let mapped = rotation * from.normalize();
    TestResult::from_bool((mapped - to.normalize()).norm() < 1e-6)
}

fn half_turn_axis_is_unit_and_perpendicular(a: (f64, f64, f64)) -> TestResult {
    let forward = match bounded(a, 10.0) {
        Some(forward) if forward.norm() >= 1e-3 => forward,
        _ => return TestResult::discard(),
    };
    let axis = half_turn_axis(&forward, &UP);
    TestResult::from_bool(
        (axis.norm() - 1.0).abs() < 1e-9 && axis.dot(&forward.normalize()).abs() < 1e-9,
    )
}

#[test]
fn rotation_between_randomized() {
    QuickCheck::new()
        .tests(500)
        .min_tests_passed(MIN_CHECKED_CASES)
        .quickcheck(
            rotation_between_maps_from_onto_to as fn((f64, f64, f64), (f64, f64, f64)) -> TestResult,
        );
}

#[test]
fn half_turn_axis_randomized() {
    QuickCheck::new()
        .tests(500)
        .min_tests_passed(MIN_CHECKED_CASES)
        .quickcheck(half_turn_axis_is_unit_and_perpendicular as fn((f64, f64, f64)) -> TestResult);
}

#[test]
fn bounded_keeps_finite_values() {
    let v = bounded((1e300, -3.5, 12.0), 10.0).unwrap();
    assert!(v.iter().all(|n| n.abs() < 10.0));
    assert_eq!(v.y, -3.5);
    assert!(bounded((f64::NAN, 0.0, 0.0), 10.0).is_none());
}

#[test]
fn same_direction_is_identity() {
    let direction = Vector3::new(0.2, 0.4, -0.7);
    let rotation = rotation_between(&direction, &direction, &UP);
    assert_relative_eq!(rotation, UnitQuaternion::identity(), epsilon = EPSILON_APPROX);
}

#[test]
fn nearly_opposite_directions_stay_finite() {
    let from = FORWARD;
    let to = Vector3::new(1e-17, 0.0, -1.0);
    let rotation = rotation_between(&from, &to, &UP);
    let mapped = rotation * from;
    assert!(mapped.iter().all(|n| n.is_finite()));
    assert_relative_eq!(mapped, to.normalize(), epsilon = EPSILON_APPROX);
}

#[test]
fn moved_forward_follows_orientation() {
    let pose = PoseSnapshot::new(
        Vector3::new(1.0, 0.0, 0.0),
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f64::consts::FRAC_PI_2),
    );
    let moved = pose.moved_forward(-1.0);
    assert_relative_eq!(moved.position(), Vector3::new(0.0, 0.0, 0.0), epsilon = EPSILON_APPROX);
    assert_eq!(moved.orientation(), pose.orientation());
}

#[test]
fn relative_orientation_follows_reference() {
    let reference = UnitQuaternion::from_euler_angles(0.1, 0.7, -0.3);
    let orientation = UnitQuaternion::from_euler_angles(-0.4, 0.2, 0.9);
    let relative = RelativeOrientation::between(&reference, &orientation);
    assert_relative_eq!(relative.apply(&reference), orientation, epsilon = EPSILON_APPROX);

    let turn = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 1.2);
    assert_relative_eq!(
        relative.apply(&(turn * reference)),
        turn * orientation,
        epsilon = EPSILON_APPROX
    );
}
