use super::{GitHubClient, GitHubError, RepoId};
use futures_util::future::LocalBoxFuture;
use std::future::Future;
use std::rc::Rc;

/// Source of star counts handed to `GitHubStars` through the Dioxus context.
///
/// Production code uses [`StarsProvider::github`]; a parent component may
/// provide any other lookup with `use_context_provider`.
#[derive(Clone)]
pub struct StarsProvider {
    lookup: Rc<dyn Fn(RepoId) -> LocalBoxFuture<'static, Result<u64, GitHubError>>>,
}

impl StarsProvider {
    pub fn new<F, Fut>(lookup: F) -> Self
    where
        F: Fn(RepoId) -> Fut + 'static,
        Fut: Future<Output = Result<u64, GitHubError>> + 'static,
    {
        Self {
            lookup: Rc::new(move |repo| Box::pin(lookup(repo))),
        }
    }

    pub fn github(client: GitHubClient) -> Self {
        Self::new(move |repo| {
            let client = client.clone();
            async move { client.fetch_stars(&repo).await }
        })
    }

    pub async fn fetch(&self, repo: RepoId) -> Result<u64, GitHubError> {
        (self.lookup)(repo).await
    }
}

impl PartialEq for StarsProvider {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.lookup, &other.lookup)
    }
}
