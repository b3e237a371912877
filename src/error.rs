use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Backend API error: {0}")]
    ApiError(String),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Upload error: {0}")]
    UploadError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
