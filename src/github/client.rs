//! GitHub REST lookup of a repository's star count.

use super::{GitHubError, RepoId};
use crate::config::AppConfig;
use dioxus::logger::tracing::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

const USER_AGENT: &str = concat!("site-footer/", env!("CARGO_PKG_VERSION"));

/// Only the field we need from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Deserialize)]
struct RepoSummary {
    stargazers_count: u64,
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &AppConfig) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        // reqwest::Client pools connections internally, clones share it
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::Client(e.to_string()))?;

        Ok(Self {
            http,
            api_base: config.api_base(),
            token: config.token().map(str::to_string),
        })
    }

    pub fn repo_url(&self, repo: &RepoId) -> String {
        format!("{}{}", self.api_base, repo.api_path())
    }

    /// 获取仓库的星标数量
    pub async fn fetch_stars(&self, repo: &RepoId) -> Result<u64, GitHubError> {
        let url = self.repo_url(repo);
        debug!("Fetching star count from {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| GitHubError::Request(format!("{}: {}", url, e)))?;

        let remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        check_status(response.status().as_u16(), remaining.as_deref(), repo)?;

        let body = response
            .text()
            .await
            .map_err(|e| GitHubError::Request(format!("Failed to read response body: {}", e)))?;

        parse_star_count(&body)
    }
}

/// Map a response status onto the error taxonomy.
fn check_status(
    status: u16,
    rate_limit_remaining: Option<&str>,
    repo: &RepoId,
) -> Result<(), GitHubError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(GitHubError::NotFound(repo.to_string())),
        429 => Err(GitHubError::RateLimited),
        403 if rate_limit_remaining.map(str::trim) == Some("0") => Err(GitHubError::RateLimited),
        other => Err(GitHubError::Status(other)),
    }
}

fn parse_star_count(body: &str) -> Result<u64, GitHubError> {
    serde_json::from_str::<RepoSummary>(body)
        .map(|summary| summary.stargazers_count)
        .map_err(|e| GitHubError::Decode(e.to_string()))
}
