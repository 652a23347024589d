#[derive(Debug, thiserror::Error)]
pub enum DealFinderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Secrets file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Catalog API error [{code}]: {message}")]
    Api { code: String, message: String },

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DealFinderError>;
