mod client;
mod error;
mod format;
mod provider;
mod repo;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use format::format_star_count;
pub use provider::StarsProvider;
pub use repo::RepoId;
