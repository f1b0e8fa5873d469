use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// True for failures of the request itself (unreachable backend or
    /// non-success status), as opposed to local checks.
    pub fn is_network(&self) -> bool {
        matches!(self, DashboardError::Network(_) | DashboardError::Http { .. })
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Serialization(e.to_string())
    }
}

/// Client-side form check failures. Raised before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields ({0} is empty).")]
    MissingField(&'static str),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
