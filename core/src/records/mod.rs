pub mod point;
pub mod trajectory;

pub use point::{NearestQuery, RankedMatch, ReferencePoint};
pub use trajectory::{TrajectoryPoint, TrajectoryRequest};
