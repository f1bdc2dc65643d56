use crate::prediction::model::TrajectoryModel;
use crate::prelude::{CoreError, CoreResult};
use crate::records::TrajectoryPoint;
use crate::telemetry::LogManager;
use std::sync::Arc;

/// Translates between validated requests and a [`TrajectoryModel`].
///
/// Each call is a fresh model invocation: no retries, no caching. The model
/// call runs to completion on the calling thread and cannot be interrupted.
#[derive(Clone)]
pub struct TrajectoryPredictor {
    model: Arc<dyn TrajectoryModel>,
    logger: LogManager,
}

impl TrajectoryPredictor {
    pub fn new(model: Arc<dyn TrajectoryModel>) -> Self {
        Self {
            model,
            logger: LogManager::new("predictor"),
        }
    }

    /// Forecasts `steps` positions after the start point.
    ///
    /// The output holds exactly `steps` points with `step_index` 1..=steps.
    /// An empty, short, long or non-finite model output is reported as
    /// `PredictionFailure` and nothing is returned.
    pub fn predict(
        &self,
        start_longitude: f64,
        start_latitude: f64,
        steps: usize,
    ) -> CoreResult<Vec<TrajectoryPoint>> {
        if steps == 0 {
            return Err(CoreError::InvalidArgument("steps must be positive".into()));
        }

        let raw = self
            .model
            .forecast(start_longitude, start_latitude, steps)
            .map_err(|err| self.failure(format!("model error: {}", err)))?;

        if raw.is_empty() {
            return Err(self.failure("model produced no points".into()));
        }
        if raw.len() != steps {
            return Err(self.failure(format!(
                "model produced {} points for {} steps",
                raw.len(),
                steps
            )));
        }
        if let Some(index) = raw
            .iter()
            .position(|(lon, lat)| !lon.is_finite() || !lat.is_finite())
        {
            return Err(self.failure(format!("non-finite coordinate at step {}", index + 1)));
        }

        let trajectory: Vec<TrajectoryPoint> = raw
            .into_iter()
            .enumerate()
            .map(|(index, (longitude, latitude))| TrajectoryPoint::new(longitude, latitude, index + 1))
            .collect();

        self.logger.record(&format!(
            "predicted {} steps from ({:.4}, {:.4})",
            trajectory.len(),
            start_longitude,
            start_latitude
        ));
        Ok(trajectory)
    }

    fn failure(&self, reason: String) -> CoreError {
        self.logger.warn(&reason);
        CoreError::PredictionFailure(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::model::ModelError;

    fn predictor<F>(model: F) -> TrajectoryPredictor
    where
        F: Fn(f64, f64, usize) -> Result<Vec<(f64, f64)>, ModelError> + Send + Sync + 'static,
    {
        TrajectoryPredictor::new(Arc::new(model))
    }

    fn eastward(lon: f64, lat: f64, steps: usize) -> Result<Vec<(f64, f64)>, ModelError> {
        Ok((1..=steps).map(|i| (lon + 0.1 * i as f64, lat)).collect())
    }

    #[test]
    fn stamps_step_indices_and_labels() {
        let trajectory = predictor(eastward).predict(120.5, 30.2, 3).unwrap();
        let steps: Vec<usize> = trajectory.iter().map(|p| p.step_index).collect();
        let labels: Vec<&str> = trajectory.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(steps, vec![1, 2, 3]);
        assert_eq!(labels, vec!["1 hours later", "2 hours later", "3 hours later"]);
        assert_eq!(trajectory[0].latitude, 30.2);
        assert!(trajectory[0].longitude > 120.5);
    }

    #[test]
    fn empty_model_output_is_failure() {
        let err = predictor(|_, _, _| Ok(Vec::new()))
            .predict(120.5, 30.2, 3)
            .unwrap_err();
        assert!(matches!(err, CoreError::PredictionFailure(_)));
    }

    #[test]
    fn model_error_is_failure() {
        let err = predictor(|_, _, _| Err(ModelError("weights missing".into())))
            .predict(120.5, 30.2, 3)
            .unwrap_err();
        assert!(matches!(err, CoreError::PredictionFailure(msg) if msg.contains("weights missing")));
    }

    #[test]
    fn length_mismatch_is_failure() {
        let err = predictor(|lon, lat, _| Ok(vec![(lon, lat)]))
            .predict(120.5, 30.2, 3)
            .unwrap_err();
        assert!(matches!(err, CoreError::PredictionFailure(_)));
    }

    #[test]
    fn non_finite_output_is_failure() {
        let err = predictor(|lon, _, _| Ok(vec![(lon, 30.0), (f64::NAN, 30.0)]))
            .predict(120.5, 30.2, 2)
            .unwrap_err();
        assert!(matches!(err, CoreError::PredictionFailure(msg) if msg.contains("step 2")));
    }

    #[test]
    fn zero_steps_are_rejected_before_model_call() {
        let err = predictor(|_, _, _| panic!("model must not run"))
            .predict(0.0, 0.0, 0)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }
}
