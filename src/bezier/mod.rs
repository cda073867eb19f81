mod basis;
mod derivative;
mod subdivide;
mod bounds;
mod solve;
mod curve;

pub use self::basis::*;
pub use self::derivative::*;
pub use self::subdivide::*;
pub use self::bounds::*;
pub use self::solve::*;
pub use self::curve::*;

pub use super::geo::*;
