use super::mode::*;
use super::super::coordinate::*;

///
/// Repositions a tangent handle so that the mode constraint for its joint holds again
///
/// `moved_index` is the index of the control point that was just changed: the joint
/// that owns it is found from the index, the handle on the moved side is left where
/// the caller put it and the handle on the opposite side of the joint is moved to
/// satisfy the joint's `ControlPointMode`.
///
/// For a looping spline the handles of the first and last joints are treated as
/// adjacent, so the indices wrap around through the ends of the list (which share a
/// position). The first and last joints of a non-looping spline have no opposite
/// handle and are left alone, as are `Free` joints.
///
pub fn enforce_mode<Point: Coordinate>(points: &mut [Point], modes: &[ControlPointMode], looped: bool, moved_index: usize) {
    let joint       = (moved_index + 1) / 3;
    let last_joint  = modes.len() - 1;
    let mode        = modes[joint];

    if mode == ControlPointMode::Free || (!looped && (joint == 0 || joint == last_joint)) {
        return;
    }

    let middle  = joint * 3;
    let last    = points.len() - 1;

    // The handle on the same side as the moved point stays fixed, the opposite one is recomputed
    let (fixed, enforced) = if moved_index <= middle {
        let fixed    = if middle >= 1 { middle - 1 } else { last - 1 };
        let enforced = if middle < last { middle + 1 } else { 1 };

        (fixed, enforced)
    } else {
        let fixed    = if middle < last { middle + 1 } else { 1 };
        let enforced = if middle >= 1 { middle - 1 } else { last - 1 };

        (fixed, enforced)
    };

    let middle_point    = points[middle];
    let tangent         = middle_point - points[fixed];

    // Mirrored joints reflect the fixed handle exactly; aligned joints only borrow its
    // direction, keeping the enforced handle at its current distance from the joint
    let enforced_tangent = if mode == ControlPointMode::Mirrored {
        tangent
    } else {
        tangent.to_unit_vector() * middle_point.distance_to(&points[enforced])
    };

    points[enforced] = middle_point + enforced_tangent;
}
