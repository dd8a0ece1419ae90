use thiserror::Error;

/// Error type for test database cleanup
///
/// Every variant is a "cleanup error": the teardown procedure records it in its
/// report and never hands it back to the test runner.
#[derive(Debug, Error)]
pub enum TeardownError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The admin connection URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to open the administrative connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The drop statement failed
    #[error("Database drop failed: {0}")]
    DropFailed(String),

    /// Failed to close the administrative connection
    #[error("Disconnect failed: {0}")]
    DisconnectFailed(String),
}

impl From<url::ParseError> for TeardownError {
    fn from(error: url::ParseError) -> Self {
        TeardownError::InvalidUrl(error.to_string())
    }
}

/// Result type for teardown operations
pub type Result<T> = std::result::Result<T, TeardownError>;
