use crate::prelude::{CoreError, CoreResult, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::records::TrajectoryRequest;
use crate::validation::fields::{check_range, float_from_json, integer_from_json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 4] = ["latitude", "longitude", "time", "model_id"];

/// Bounds applied on top of the field-level checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValidationLimits {
    pub max_steps: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        // One year of hourly steps.
        Self { max_steps: 8760 }
    }
}

/// Validates a raw trajectory body `{latitude, longitude, time, model_id}`.
///
/// Checks run in a fixed order: presence of every required field, then
/// parsing, then ranges.
pub fn validate_trajectory(
    raw: &Value,
    limits: &ValidationLimits,
) -> CoreResult<TrajectoryRequest> {
    let body = raw
        .as_object()
        .ok_or_else(|| CoreError::MalformedValue("body".into()))?;

    for field in REQUIRED_FIELDS {
        if !body.contains_key(field) {
            return Err(CoreError::MissingField(field.into()));
        }
    }

    let latitude = float_from_json("latitude", &body["latitude"])?;
    let longitude = float_from_json("longitude", &body["longitude"])?;
    let steps = integer_from_json("time", &body["time"])?;
    let model_id = model_id(body)?;

    let start_latitude = check_range("latitude", latitude, LATITUDE_RANGE)?;
    let start_longitude = check_range("longitude", longitude, LONGITUDE_RANGE)?;
    let steps = usize::try_from(steps)
        .ok()
        .filter(|steps| (1..=limits.max_steps).contains(steps))
        .ok_or_else(|| CoreError::OutOfRange("time".into()))?;

    Ok(TrajectoryRequest {
        start_latitude,
        start_longitude,
        steps,
        model_id,
    })
}

fn model_id(body: &Map<String, Value>) -> CoreResult<String> {
    match &body["model_id"] {
        Value::String(id) => Ok(id.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(CoreError::MalformedValue("model_id".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(raw: Value) -> CoreResult<TrajectoryRequest> {
        validate_trajectory(&raw, &ValidationLimits::default())
    }

    #[test]
    fn accepts_complete_request() {
        let request = validate(json!({
            "latitude": 30.2,
            "longitude": "120.5",
            "time": 3,
            "model_id": "lstm-v1"
        }))
        .unwrap();
        assert_eq!(request.start_latitude, 30.2);
        assert_eq!(request.start_longitude, 120.5);
        assert_eq!(request.steps, 3);
        assert_eq!(request.model_id, "lstm-v1");
    }

    #[test]
    fn missing_model_id_is_reported() {
        let err = validate(json!({"latitude": 30.2, "longitude": 120.5, "time": 3})).unwrap_err();
        assert_eq!(err, CoreError::MissingField("model_id".into()));
    }

    #[test]
    fn missing_fields_reported_in_declared_order() {
        let err = validate(json!({"model_id": "m"})).unwrap_err();
        assert_eq!(err, CoreError::MissingField("latitude".into()));
    }

    #[test]
    fn latitude_out_of_range_is_rejected() {
        let err = validate(json!({
            "latitude": 95,
            "longitude": 120.5,
            "time": 3,
            "model_id": "m"
        }))
        .unwrap_err();
        assert_eq!(err, CoreError::OutOfRange("latitude".into()));
    }

    #[test]
    fn longitude_out_of_range_is_rejected() {
        let err = validate(json!({
            "latitude": 0,
            "longitude": -180.5,
            "time": 3,
            "model_id": "m"
        }))
        .unwrap_err();
        assert_eq!(err, CoreError::OutOfRange("longitude".into()));
    }

    #[test]
    fn malformed_values_are_rejected_before_ranges() {
        let err = validate(json!({
            "latitude": 95,
            "longitude": 120.5,
            "time": "soon",
            "model_id": "m"
        }))
        .unwrap_err();
        assert_eq!(err, CoreError::MalformedValue("time".into()));

        let err = validate(json!({
            "latitude": "north",
            "longitude": 120.5,
            "time": 3,
            "model_id": "m"
        }))
        .unwrap_err();
        assert_eq!(err, CoreError::MalformedValue("latitude".into()));
    }

    #[test]
    fn non_positive_or_oversized_steps_are_out_of_range() {
        for time in [json!(0), json!(-4), json!(8761)] {
            let err = validate(json!({
                "latitude": 0,
                "longitude": 0,
                "time": time,
                "model_id": "m"
            }))
            .unwrap_err();
            assert_eq!(err, CoreError::OutOfRange("time".into()));
        }
    }

    #[test]
    fn non_object_body_is_malformed() {
        assert_eq!(
            validate(json!([1, 2, 3])).unwrap_err(),
            CoreError::MalformedValue("body".into())
        );
    }
}
