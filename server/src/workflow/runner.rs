use crate::api::reply::{
    DatasetStatus, ModelInfo, NearestReply, StatusReply, TrajectoryReply, STATUS_SUCCESS,
};
use crate::workflow::config::ServiceConfig;
use driftcore::dataset::DatasetHandle;
use driftcore::prediction::TrajectoryPredictor;
use driftcore::search::nearest;
use driftcore::telemetry::{LogManager, MetricsRecorder};
use driftcore::validation::{validate_nearest, validate_trajectory, ValidationLimits};
use driftcore::{CoreError, CoreResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Runs validated requests against the dataset and the predictor.
///
/// Validation always completes before any search or model call.
pub struct Runner {
    dataset: Arc<DatasetHandle>,
    predictor: TrajectoryPredictor,
    limits: ValidationLimits,
    confidence: f64,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl Runner {
    pub fn new(
        config: &ServiceConfig,
        dataset: Arc<DatasetHandle>,
        predictor: TrajectoryPredictor,
    ) -> Self {
        Self {
            dataset,
            predictor,
            limits: config.validation_limits(),
            confidence: config.confidence,
            metrics: MetricsRecorder::new(),
            logger: LogManager::new("runner"),
        }
    }

    pub async fn nearest_points(
        &self,
        params: &HashMap<String, String>,
    ) -> CoreResult<NearestReply> {
        let query = self.track(validate_nearest(params))?;
        let dataset = self.dataset.get().await;
        let points = self.track(nearest(
            dataset.points(),
            query.latitude,
            query.longitude,
            query.k,
        ))?;

        self.metrics.record_nearest();
        Ok(NearestReply {
            status: STATUS_SUCCESS.to_string(),
            points,
        })
    }

    pub async fn predict_trajectory(&self, raw: &Value) -> CoreResult<TrajectoryReply> {
        let request = self.track(validate_trajectory(raw, &self.limits))?;
        self.logger.record(&format!(
            "trajectory request model={} steps={}",
            request.model_id, request.steps
        ));

        // The model call blocks and cannot be cancelled once started.
        let predictor = self.predictor.clone();
        let (lon, lat, steps) = (request.start_longitude, request.start_latitude, request.steps);
        let outcome = tokio::task::spawn_blocking(move || predictor.predict(lon, lat, steps))
            .await
            .unwrap_or_else(|err| {
                Err(CoreError::PredictionFailure(format!("model task aborted: {}", err)))
            });
        let trajectory = self.track(outcome)?;

        self.metrics.record_prediction();
        Ok(TrajectoryReply {
            status: STATUS_SUCCESS.to_string(),
            trajectory: trajectory.into_iter().map(Into::into).collect(),
            model_info: ModelInfo {
                id: request.model_id,
                confidence: self.confidence,
            },
        })
    }

    pub fn status(&self) -> StatusReply {
        let cached = self.dataset.peek();
        StatusReply {
            dataset: DatasetStatus {
                loaded: cached.is_some(),
                points: cached.map(|dataset| dataset.len()).unwrap_or(0),
                load_attempts: self.dataset.load_attempts(),
            },
            metrics: self.metrics.snapshot(),
        }
    }

    fn track<T>(&self, result: CoreResult<T>) -> CoreResult<T> {
        if let Err(err) = &result {
            if err.is_client_error() {
                self.metrics.record_rejected();
            } else {
                self.metrics.record_failure();
            }
        }
        result
    }
}
