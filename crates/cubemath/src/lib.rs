//! Signed axes, quarter-turn rotation algebra, and typed index collections
//! developed for Cubetwist.

#[macro_use]
pub mod collections;

pub mod axis;
pub mod rotation;
pub mod sign;


pub use axis::Axis;
pub use collections::{GenericVec, IndexIter, IndexNewtype, IndexOutOfRange, IndexOverflow};
pub use rotation::{AxisRotation, QuarterTurns};
pub use sign::Sign;
