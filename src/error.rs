//! The failure kinds an operation can report
//!
//! Failures are returned to the caller *and* logged, but they are never fatal: the controller
//! stays usable after any of them, and the default presentation is free to ignore them (the
//! original behaviour) or to display them.

use reqwest::StatusCode;

/// What went wrong while talking to the remote collection
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A network-level failure: the request could not be issued or completed at all
    #[error("unable to reach the task service: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service answered, but with a non-success HTTP status
    #[error("the task service returned HTTP status {0}")]
    Service(StatusCode),

    /// A fetch response that could not be parsed as a task list
    #[error("unable to parse the task list payload: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The configured base URL could not be parsed. This can only happen at client creation
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Transport(Box::new(source))
    }
}
