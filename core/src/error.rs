use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("Enter your YouTube API key in the sidebar first.")]
    MissingApiKey,

    #[error("Enter a search query.")]
    BlankQuery,

    /// Non-success response. Carries the API's own message when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl DashboardError {
    /// Precondition failures are caught before any request goes out and are
    /// shown as a blocking prompt rather than an inline error.
    pub fn is_precondition(&self) -> bool {
        matches!(self, DashboardError::MissingApiKey | DashboardError::BlankQuery)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Decode(e.to_string())
    }
}
