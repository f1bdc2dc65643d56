pub mod distance;

pub use distance::DistanceHelper;
