use crate::prelude::{CoreError, CoreResult, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::records::NearestQuery;
use crate::validation::fields::{check_range, float_from_str, integer_from_str};
use std::collections::HashMap;

pub const DEFAULT_NUM_POINTS: i64 = 5;

/// Validates query-string parameters `latitude`, `longitude` and `num_points`.
///
/// Absent coordinates default to 0 and an absent `num_points` to 5.
pub fn validate_nearest(params: &HashMap<String, String>) -> CoreResult<NearestQuery> {
    let latitude = match params.get("latitude") {
        Some(raw) => float_from_str("latitude", raw)?,
        None => 0.0,
    };
    let longitude = match params.get("longitude") {
        Some(raw) => float_from_str("longitude", raw)?,
        None => 0.0,
    };
    let num_points = match params.get("num_points") {
        Some(raw) => integer_from_str("num_points", raw)?,
        None => DEFAULT_NUM_POINTS,
    };

    let latitude = check_range("latitude", latitude, LATITUDE_RANGE)?;
    let longitude = check_range("longitude", longitude, LONGITUDE_RANGE)?;
    let k = usize::try_from(num_points)
        .ok()
        .filter(|k| *k > 0)
        .ok_or_else(|| CoreError::InvalidArgument("num_points must be positive".into()))?;

    Ok(NearestQuery {
        latitude,
        longitude,
        k,
    })
}
