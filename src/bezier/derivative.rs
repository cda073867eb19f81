use super::basis::*;
use super::super::coordinate::*;

///
/// Returns the control weights for the 1st derivative of a cubic bezier curve
///
pub fn derivative4<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point) {
    ((w2-w1)*3.0, (w3-w2)*3.0, (w4-w3)*3.0)
}

///
/// Returns the control weights for the 1st derivative of a quadratic bezier curve (or the 2nd derivative of a cubic curve)
///
pub fn derivative3<Point: Coordinate>(wn1: Point, wn2: Point, wn3: Point) -> (Point, Point) {
    ((wn2-wn1)*2.0, (wn3-wn2)*2.0)
}

///
/// Returns the control weights for the 3rd derivative of a cubic bezier curve (2nd of a quadratic)
///
pub fn derivative2<Point: Coordinate>(wnn1: Point, wnn2: Point) -> Point {
    wnn2-wnn1
}

///
/// Evaluates the tangent (the unnormalized first derivative) of a cubic bezier curve at `t`
///
/// The derivative of a cubic curve is itself a quadratic curve, so this evaluates that
/// curve at `t`. Out of range values of `t` are clamped as for `basis`. The result is not
/// normalized: callers that need a direction vector can call `to_unit_vector` on it.
///
#[inline]
pub fn tangent<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t               = clamp_t(t);
    let (d1, d2, d3)    = derivative4(w1, w2, w3, w4);

    de_casteljau3(t, d1, d2, d3)
}
