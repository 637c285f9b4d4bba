use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch rate. HTTP status: {status}")]
    UpstreamStatus { status: u16 },

    #[error("Request timeout. Please try again later.")]
    UpstreamTimeout,

    #[error("{reason}")]
    StructuralMismatch { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Delivery failed: {reason}")]
    Delivery { reason: String },
}

impl NotifierError {
    pub fn structural(reason: impl Into<String>) -> Self {
        NotifierError::StructuralMismatch {
            reason: reason.into(),
        }
    }

    pub fn delivery(reason: impl Into<String>) -> Self {
        NotifierError::Delivery {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;
