use thiserror::Error;

/// Errors that can occur while looking up a repository's star count.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GitHubError {
    /// The repository identifier is not an `owner/name` pair
    #[error("invalid repository identifier: {0}")]
    InvalidRepo(String),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request never produced a response
    #[error("request failed: {0}")]
    Request(String),

    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    /// Any other non-success status
    #[error("unexpected status code: {0}")]
    Status(u16),

    /// The response body did not carry a star count
    #[error("failed to decode response: {0}")]
    Decode(String),
}
