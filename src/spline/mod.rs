//!
//! # Editable multi-segment bezier splines
//!
//! A `Spline` strings cubic bezier segments together in a single flat list of control
//! points, where every third point is a 'joint' that lies on the curve itself and the
//! points either side of a joint are the tangent handles that shape the curve around
//! it. Each joint carries a `ControlPointMode` describing how its two handles are
//! constrained relative to each other: editing operations keep these constraints
//! satisfied by repositioning the opposite handle whenever a handle or mode changes.
//!

mod mode;
mod enforce;
mod spline;

pub use self::mode::*;
pub use self::enforce::*;
pub use self::spline::*;

pub use super::geo::*;
