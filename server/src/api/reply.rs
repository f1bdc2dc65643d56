use driftcore::records::{RankedMatch, TrajectoryPoint};
use driftcore::telemetry::MetricsSnapshot;
use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestReply {
    pub status: String,
    pub points: Vec<RankedMatch>,
}

/// One trajectory step as rendered to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    pub longitude: f64,
    pub latitude: f64,
    pub time: String,
}

impl From<TrajectoryPoint> for TrajectoryStep {
    fn from(point: TrajectoryPoint) -> Self {
        Self {
            longitude: point.longitude,
            latitude: point.latitude,
            time: point.label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryReply {
    pub status: String,
    pub trajectory: Vec<TrajectoryStep>,
    pub model_info: ModelInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

/// Body returned by endpoints whose backing service does not exist yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubReply {
    pub error: String,
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStatus {
    pub loaded: bool,
    pub points: usize,
    pub load_attempts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReply {
    pub dataset: DatasetStatus,
    pub metrics: MetricsSnapshot,
}
