use serde::{Deserialize, Serialize};

/// Validated trajectory request, built only by the validation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRequest {
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub steps: usize,
    pub model_id: String,
}

/// One predicted position, `step_index` steps after the start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub step_index: usize,
    /// Elapsed-time label, e.g. "2 hours later".
    pub label: String,
}

impl TrajectoryPoint {
    pub fn new(longitude: f64, latitude: f64, step_index: usize) -> Self {
        Self {
            longitude,
            latitude,
            step_index,
            label: elapsed_label(step_index),
        }
    }
}

pub fn elapsed_label(step_index: usize) -> String {
    format!("{} hours later", step_index)
}
