use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route parse error: {0}")]
    Parse(String),

    #[error("route JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
