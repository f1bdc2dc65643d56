/// Failure reported by a trajectory model.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct ModelError(pub String);

/// Forecasting capability the predictor delegates to.
///
/// Given a start position and a step count, an implementation returns one
/// `(longitude, latitude)` pair per step, first step first. Calls may block.
pub trait TrajectoryModel: Send + Sync {
    fn forecast(
        &self,
        longitude: f64,
        latitude: f64,
        steps: usize,
    ) -> Result<Vec<(f64, f64)>, ModelError>;
}

impl<F> TrajectoryModel for F
where
    F: Fn(f64, f64, usize) -> Result<Vec<(f64, f64)>, ModelError> + Send + Sync,
{
    fn forecast(
        &self,
        longitude: f64,
        latitude: f64,
        steps: usize,
    ) -> Result<Vec<(f64, f64)>, ModelError> {
        self(longitude, latitude, steps)
    }
}
