use super::super::coordinate::*;

///
/// Clamps a curve parameter to the 0 to 1 range
///
/// Callers such as drag handles or curve followers routinely produce transient values
/// slightly outside of the range, so evaluation treats them as the nearest end point
/// rather than rejecting them.
///
#[inline]
pub (crate) fn clamp_t(t: f64) -> f64 {
    if t < 0.0 {
        0.0
    } else if t > 1.0 {
        1.0
    } else {
        t
    }
}

///
/// Performs linear interpolation (the de Casteljau base case)
///
#[inline]
pub fn de_casteljau2<Point: Coordinate>(t: f64, w1: Point, w2: Point) -> Point {
    w1*(1.0-t) + w2*t
}

///
/// de Casteljau's algorithm for quadratic bezier curves
///
#[inline]
pub fn de_casteljau3<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) -> Point {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    de_casteljau2(t, wn1, wn2)
}

///
/// de Casteljau's algorithm for cubic bezier curves
///
#[inline]
pub fn de_casteljau4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let wn1 = de_casteljau3(t, w1, w2, w3);
    let wn2 = de_casteljau3(t, w2, w3, w4);

    de_casteljau2(t, wn1, wn2)
}

///
/// The cubic bezier weighted basis function
///
/// Returns the point at `t` on the curve with the weights `w1` to `w4`. Values of `t`
/// outside the 0 to 1 range are clamped to the nearest end of the curve.
///
#[inline]
pub fn basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t                   = clamp_t(t);

    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + w2*(3.0*one_minus_t_squared*t)
        + w3*(3.0*one_minus_t*t_squared)
        + w4*t_cubed
}

///
/// The quadratic bezier weighted basis function
///
/// As for `basis`, out of range values of `t` are clamped rather than rejected.
///
#[inline]
pub fn basis3<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) -> Point {
    let t                   = clamp_t(t);

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;

    w1*one_minus_t_squared
        + w2*(2.0*one_minus_t*t)
        + w3*(t*t)
}
