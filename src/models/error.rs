#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch {endpoint}: HTTP {status}")]
    Fetch { endpoint: &'static str, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from {endpoint}: {message}")]
    Validation {
        endpoint: &'static str,
        message: String,
    },

    #[error("Invalid magnitude: {0}")]
    InvalidMagnitude(f64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Browser error: {0}")]
    Browser(String),
}
