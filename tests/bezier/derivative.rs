use bezier_spline::*;
use bezier_spline::bezier;

#[test]
fn can_take_first_derivative() {
    assert!(bezier::derivative4(1.0, 2.0, 3.0, 4.0) == (3.0, 3.0, 3.0));
}

#[test]
fn can_take_second_derivative() {
    assert!(bezier::derivative3(3.0, 3.0, 3.0) == (0.0, 0.0));
}

#[test]
fn can_take_third_derivative() {
    assert!(bezier::derivative2(0.0, 0.0) == 0.0);
}

#[test]
fn tangent_at_start_is_scaled_first_handle_offset() {
    let (w1, w2, w3, w4) = (Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 0.0), Coord2(2.0, 2.0));

    let tangent     = bezier::tangent(0.0, w1, w2, w3, w4);
    let expected    = (w2-w1)*3.0;

    assert!(tangent.distance_to(&expected) < 0.001);
}

#[test]
fn tangent_at_end_is_scaled_last_handle_offset() {
    let (w1, w2, w3, w4) = (Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 0.0), Coord2(2.0, 2.0));

    let tangent     = bezier::tangent(1.0, w1, w2, w3, w4);
    let expected    = (w4-w3)*3.0;

    assert!(tangent.distance_to(&expected) < 0.001);
}

#[test]
fn tangent_matches_finite_difference() {
    let (w1, w2, w3, w4)    = (Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 0.0), Coord2(2.0, 2.0));
    let h                   = 1e-5;

    for x in 1..20 {
        let t = (x as f64)/20.0;

        let tangent     = bezier::tangent(t, w1, w2, w3, w4);
        let before      = bezier::basis(t-h, w1, w2, w3, w4);
        let after       = bezier::basis(t+h, w1, w2, w3, w4);
        let difference  = (after-before)*(1.0/(2.0*h));

        assert!(tangent.distance_to(&difference) < 0.001);
    }
}

#[test]
fn tangent_clamps_out_of_range_values() {
    let (w1, w2, w3, w4) = (Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 0.0), Coord2(2.0, 2.0));

    assert!(bezier::tangent(-0.5, w1, w2, w3, w4) == bezier::tangent(0.0, w1, w2, w3, w4));
    assert!(bezier::tangent(1.5, w1, w2, w3, w4) == bezier::tangent(1.0, w1, w2, w3, w4));
}
