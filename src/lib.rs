#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

pub mod bezier;
pub mod spline;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

mod consts;

pub use self::bezier::BezierCurve;
pub use self::spline::Spline;
