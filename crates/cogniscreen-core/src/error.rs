use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("metric out of range: {field} = {value} (expected 0-100)")]
    MetricOutOfRange { field: &'static str, value: f64 },

    #[error("timestamp arithmetic error: {0}")]
    Time(#[from] jiff::Error),
}
