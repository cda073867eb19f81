use bezier_spline::*;
use bezier_spline::spline::{self, ControlPointMode, SplineEnd, SplineError};

fn curved_segment() -> spline::Spline<Coord2> {
    let points  = vec![Coord2(1.0, 1.0), Coord2(2.0, 3.0), Coord2(4.0, 0.0), Coord2(8.0, 2.0)];
    let modes   = vec![ControlPointMode::Free, ControlPointMode::Free];

    spline::Spline::with_points(points, modes, false).unwrap()
}

fn three_segment_spline() -> spline::Spline<Coord3> {
    let mut spline = spline::Spline::new();
    spline.add_segment();
    spline.add_segment();

    spline
}

#[test]
fn add_segment_continues_along_the_x_axis() {
    let mut spline: spline::Spline<Coord3> = spline::Spline::new();

    spline.add_segment();

    assert!(spline.segment_count() == 2);
    assert!(spline.joint_count() == 3);
    assert!(spline.control_point(4).distance_to(&Coord3(10.0/3.0, 0.0, 0.0)) < 0.001);
    assert!(spline.control_point(5).distance_to(&Coord3(11.0/3.0, 0.0, 0.0)) < 0.001);
    assert!(spline.control_point(6) == Coord3(4.0, 0.0, 0.0));
}

#[test]
fn add_segment_copies_the_end_joint_mode() {
    let mut spline: spline::Spline<Coord3> = spline::Spline::new();
    spline.set_joint_mode(1, ControlPointMode::Mirrored);

    spline.add_segment();

    assert!(spline.joint_mode(2) == ControlPointMode::Mirrored);
}

#[test]
fn remove_interior_joint() {
    let mut spline = three_segment_spline();

    spline.remove_joint(1).unwrap();

    assert!(spline.segment_count() == 2);
    assert!(spline.joint_count() == 3);
    assert!(spline.control_point(0) == Coord3(0.0, 0.0, 0.0));
    assert!(spline.control_point(3) == Coord3(4.0, 0.0, 0.0));
    assert!(spline.control_point(6) == Coord3(5.0, 0.0, 0.0));
}

#[test]
fn remove_first_joint() {
    let mut spline = three_segment_spline();

    spline.remove_joint(0).unwrap();

    assert!(spline.segment_count() == 2);
    assert!(spline.control_point(0) == Coord3(3.0, 0.0, 0.0));
}

#[test]
fn remove_last_joint() {
    let mut spline = three_segment_spline();

    spline.remove_joint(3).unwrap();

    assert!(spline.segment_count() == 2);
    assert!(spline.control_point(6) == Coord3(4.0, 0.0, 0.0));
}

#[test]
fn cannot_remove_a_joint_from_a_single_segment() {
    let mut spline: spline::Spline<Coord3> = spline::Spline::new();
    let unchanged = spline.clone();

    assert!(spline.remove_joint(0) == Err(SplineError::LastSegment));
    assert!(spline == unchanged);
}

#[test]
fn connect_two_splines() {
    let mut first: spline::Spline<Coord3>   = spline::Spline::new();
    let mut second: spline::Spline<Coord3>  = spline::Spline::new();
    second.move_to(Coord3(10.0, 0.0, 0.0), SplineEnd::Start);

    first.connect_to(&second).unwrap();

    assert!(first.segment_count() == 3);
    assert!(first.joint_count() == 4);

    // The bridging handles start out on top of the joints they connect
    assert!(first.control_point(4) == Coord3(3.0, 0.0, 0.0));
    assert!(first.control_point(5) == Coord3(10.0, 0.0, 0.0));
    assert!(first.point_at_pos(1.0) == Coord3(13.0, 0.0, 0.0));
}

#[test]
fn connect_to_leaves_the_other_splines_handles_in_place() {
    let first_points    = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, 0.0)];
    let first_modes     = vec![ControlPointMode::Free, ControlPointMode::Free];
    let other_points    = vec![Coord2(10.0, 0.0), Coord2(11.0, 2.0), Coord2(13.0, 2.0), Coord2(14.0, 0.0)];
    let other_modes     = vec![ControlPointMode::Mirrored, ControlPointMode::Free];

    let mut first   = spline::Spline::with_points(first_points, first_modes, false).unwrap();
    let other       = spline::Spline::with_points(other_points, other_modes, false).unwrap();

    first.connect_to(&other).unwrap();

    // The seam constraint repositions the new bridge handle, not the handle the
    // other spline arrived with
    assert!(first.control_point(7) == Coord2(11.0, 2.0));
    assert!(first.control_point(5).distance_to(&Coord2(9.0, -2.0)) < 0.001);
}

#[test]
fn cannot_connect_to_a_looping_spline() {
    let mut first: spline::Spline<Coord3>   = spline::Spline::new();
    let second: spline::Spline<Coord3>      = spline::Spline::new();

    first.set_looped(true);
    let unchanged = first.clone();

    assert!(first.connect_to(&second) == Err(SplineError::SplineIsLooped));
    assert!(first == unchanged);
}

#[test]
fn split_segment_preserves_the_shape() {
    let mut spline  = curved_segment();
    let before      = (0..=10).map(|x| spline.point_at_pos((x as f64)/10.0)).collect::<Vec<_>>();

    spline.split_segment(0, 0.5).unwrap();

    assert!(spline.segment_count() == 2);
    assert!(spline.joint_count() == 3);

    for x in 0..=10 {
        let after = spline.point_at_pos((x as f64)/10.0);

        assert!(after.distance_to(&before[x]) < 0.001);
    }
}

#[test]
fn split_segment_places_the_new_joint_on_the_curve() {
    let mut spline  = curved_segment();
    let expected    = spline.point_at_pos(0.5);

    spline.split_segment(0, 0.5).unwrap();

    assert!(spline.control_point(3).distance_to(&expected) < 0.001);
    assert!(spline.joint_mode(1) == ControlPointMode::Aligned);
}

#[test]
fn split_segment_keeps_a_mirrored_joint_mirrored() {
    let points  = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0), Coord2(4.0, -1.0), Coord2(5.0, -1.0), Coord2(6.0, 0.0)];
    let modes   = vec![ControlPointMode::Free, ControlPointMode::Mirrored, ControlPointMode::Free];

    let mut spline = spline::Spline::with_points(points, modes, false).unwrap();

    spline.split_segment(0, 0.5).unwrap();

    // The subdivision halves the incoming handle of the joint after the split, so
    // the outgoing handle has to follow it
    let joint       = spline.control_point(6);
    let incoming    = spline.control_point(5);
    let outgoing    = spline.control_point(7);

    assert!(outgoing.distance_to(&(joint + (joint - incoming))) < 0.001);
}

#[test]
fn cannot_split_a_segment_at_its_end_points() {
    let mut spline  = curved_segment();
    let unchanged   = spline.clone();

    assert!(spline.split_segment(0, 0.0) == Err(SplineError::DegenerateSplit));
    assert!(spline.split_segment(0, 1.0) == Err(SplineError::DegenerateSplit));
    assert!(spline == unchanged);
}

#[test]
fn move_spline_by_its_end_point() {
    let mut spline: spline::Spline<Coord3> = spline::Spline::new();

    spline.move_to(Coord3(10.0, 5.0, 0.0), SplineEnd::End);

    assert!(spline.control_point(3) == Coord3(10.0, 5.0, 0.0));
    assert!(spline.control_point(0) == Coord3(7.0, 5.0, 0.0));
}

#[test]
fn looping_a_spline_pins_its_ends_together() {
    let points  = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0), Coord2(4.0, -1.0), Coord2(5.0, -1.0), Coord2(6.0, 0.0)];
    let modes   = vec![ControlPointMode::Aligned, ControlPointMode::Free, ControlPointMode::Free];

    let mut spline = spline::Spline::with_points(points, modes, false).unwrap();

    spline.set_looped(true);

    assert!(spline.is_looped());
    assert!(spline.control_point(6) == Coord2(0.0, 0.0));
    assert!(spline.joint_mode(2) == ControlPointMode::Aligned);
}

#[test]
fn moving_the_first_joint_keeps_a_loop_closed() {
    let points  = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0), Coord2(4.0, -1.0), Coord2(5.0, -1.0), Coord2(0.0, 0.0)];
    let modes   = vec![ControlPointMode::Free, ControlPointMode::Free, ControlPointMode::Free];

    let mut spline = spline::Spline::with_points(points, modes, true).unwrap();

    spline.set_control_point(0, Coord2(1.0, 2.0));

    // The shared joint moves as one, dragging the handles on both sides of the seam
    assert!(spline.control_point(0) == Coord2(1.0, 2.0));
    assert!(spline.control_point(6) == Coord2(1.0, 2.0));
    assert!(spline.control_point(1) == Coord2(2.0, 3.0));
    assert!(spline.control_point(5) == Coord2(6.0, 1.0));
}
