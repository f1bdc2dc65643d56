pub mod adapter;
pub mod model;

pub use adapter::TrajectoryPredictor;
pub use model::{ModelError, TrajectoryModel};
