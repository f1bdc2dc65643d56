/// Common error type for every core operation.
///
/// Validation failures carry the name of the offending request field so the
/// web layer can report it back unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("value out of range: {0}")]
    OutOfRange(String),
    #[error("malformed value: {0}")]
    MalformedValue(String),
    #[error("prediction failed: {0}")]
    PredictionFailure(String),
}

impl CoreError {
    /// True for failures caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidArgument(_)
                | CoreError::MissingField(_)
                | CoreError::OutOfRange(_)
                | CoreError::MalformedValue(_)
        )
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
