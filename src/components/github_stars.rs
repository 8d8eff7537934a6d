use crate::config::AppConfig;
use crate::github::{GitHubClient, RepoId, StarsProvider, format_star_count};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

/// What the badge knows about the star count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarsState {
    Loading,
    Loaded(u64),
    Unavailable,
}

/// Link badge showing a repository's star count.
///
/// Lookup failures are logged and rendered as a badge without a count, so the
/// parent never sees an error from this component.
#[component]
pub fn GitHubStars(repo: String) -> Element {
    let provider =
        use_hook(|| try_consume_context::<StarsProvider>().unwrap_or_else(default_provider));
    let repo_id = repo.parse::<RepoId>().ok();

    let lookup = repo_id.clone();
    let stars = use_resource(move || {
        let provider = provider.clone();
        let lookup = lookup.clone();
        async move {
            let repo = lookup?;
            match provider.fetch(repo.clone()).await {
                Ok(count) => {
                    info!("{} has {} stars", repo, count);
                    Some(count)
                }
                Err(e) => {
                    warn!("Star count for {} unavailable: {}", repo, e);
                    None
                }
            }
        }
    });

    let (href, label, state) = match repo_id {
        Some(repo_id) => {
            let state = match stars.cloned() {
                None => StarsState::Loading,
                Some(Some(count)) => StarsState::Loaded(count),
                Some(None) => StarsState::Unavailable,
            };
            (
                repo_id.html_url(),
                format!("Star {} on GitHub", repo_id),
                state,
            )
        }
        None => (
            "https://github.com".to_string(),
            "GitHub".to_string(),
            StarsState::Unavailable,
        ),
    };

    rsx! {
        StarsBadge { href, label, state }
    }
}

#[component]
pub fn StarsBadge(href: String, label: String, state: StarsState) -> Element {
    rsx! {
        a {
            class: "inline-flex items-center gap-2 rounded-md border px-3 py-1 hover:bg-accent transition-colors",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{label}",
            span { aria_hidden: "true", "★" }
            span { "Star on GitHub" }
            if state == StarsState::Loading {
                span { class: "font-mono opacity-60", aria_busy: "true", "…" }
            }
            if let StarsState::Loaded(count) = state {
                span { class: "font-mono font-semibold", "{format_star_count(count)}" }
            }
        }
    }
}

fn default_provider() -> StarsProvider {
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}", e);
        AppConfig::default()
    });

    match GitHubClient::new(&config) {
        Ok(client) => StarsProvider::github(client),
        Err(e) => {
            warn!("GitHub client unavailable: {}", e);
            StarsProvider::new(move |_| {
                let e = e.clone();
                async move { Err(e) }
            })
        }
    }
}
