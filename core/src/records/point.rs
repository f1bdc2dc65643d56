use serde::{Deserialize, Serialize};

/// Fixed particle position from the static dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferencePoint {
    pub fn new(id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
        }
    }
}

/// A dataset point paired with its planar distance to a query.
///
/// Serializes flat as `{id, latitude, longitude, distance}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub point: ReferencePoint,
    pub distance: f64,
}

/// Validated nearest-point query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub k: usize,
}
