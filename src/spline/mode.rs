use std::fmt;
use std::error::Error;

///
/// The smoothness constraint applied between the two tangent handles of a spline joint
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ControlPointMode {
    /// The handles move independently of each other
    Free,

    /// The handles are kept collinear through the joint, each keeping its own distance
    Aligned,

    /// The handles are kept collinear through the joint and equidistant from it
    Mirrored
}

///
/// Identifies one of the two ends of a spline
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SplineEnd {
    Start,
    End
}

///
/// Errors produced by structural edits that would leave a spline in an invalid state
///
/// Every operation that returns one of these leaves the spline it was called on
/// unmodified.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SplineError {
    /// Another spline cannot be connected to a spline that loops back on itself
    SplineIsLooped,

    /// Removing this joint would leave the spline with fewer than one segment
    LastSegment,

    /// The supplied point and mode lists do not describe a valid spline
    MalformedControlPoints,

    /// A segment cannot be split at (or beyond) one of its end points
    DegenerateSplit
}

impl fmt::Display for SplineError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SplineError::SplineIsLooped         => write!(formatter, "spline loops back on itself"),
            SplineError::LastSegment            => write!(formatter, "spline must keep at least one segment"),
            SplineError::MalformedControlPoints => write!(formatter, "control points and modes do not describe a valid spline"),
            SplineError::DegenerateSplit        => write!(formatter, "segments can only be split strictly between their end points")
        }
    }
}

impl Error for SplineError { }
