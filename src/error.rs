#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("root container `{id}` not found in document")]
    MissingRootContainer { id: String },
    #[error("invalid settings: {message}")]
    InvalidSettings { message: String },
    #[error("invalid chart data: {message}")]
    InvalidChartData { message: String },
    #[error("chart data JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
