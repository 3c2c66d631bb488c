use crate::config::is_configured;
use crate::error::{FolioError, Result};
use crate::feed::rank::{rank_repositories, RankedFeed};
use crate::feed::ProjectSink;
use crate::github::types::RepositorySummary;
use crate::github::RepoSource;
use crate::ui::card::CardRenderer;
use crate::ui::notice::Notice;
use std::time::Duration;

const LOG_TARGET: &str = "feed";

/// Result of one load cycle. Exactly one rendering branch follows from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Success(RankedFeed),
    Empty,
    Misconfigured,
    /// Carries the underlying cause for logs; never shown on the page.
    TransportFailure(String),
}

impl LoadOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            LoadOutcome::Success(_) => None,
            LoadOutcome::Empty => Some(Notice::Empty),
            LoadOutcome::Misconfigured => Some(Notice::Misconfigured),
            LoadOutcome::TransportFailure(_) => Some(Notice::TransportFailure),
        }
    }
}

pub struct ProjectFeedLoader<S> {
    source: S,
    renderer: CardRenderer,
    timeout: Duration,
}

impl<S: RepoSource> ProjectFeedLoader<S> {
    pub fn new(source: S, renderer: CardRenderer, timeout: Duration) -> Self {
        Self {
            source,
            renderer,
            timeout,
        }
    }

    /// Runs one load cycle and writes its result into `sink`.
    ///
    /// The sink is borrowed mutably for the whole cycle, including the
    /// request, so two loads can never interleave writes to the same page.
    pub async fn load(
        &self,
        identity: &str,
        max_count: usize,
        sink: &mut impl ProjectSink,
    ) -> LoadOutcome {
        let outcome = self.fetch(identity, max_count).await;
        self.apply(&outcome, sink);
        outcome
    }

    /// Fetches and ranks without touching any sink. Issues at most one request.
    pub async fn fetch(&self, identity: &str, max_count: usize) -> LoadOutcome {
        if !is_configured(identity) {
            log::info!(target: LOG_TARGET, "no GitHub username configured, skipping fetch");
            return LoadOutcome::Misconfigured;
        }

        let repos = match self.request(identity.trim()).await {
            Ok(repos) => repos,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Failed to fetch GitHub repos: {e}");
                return LoadOutcome::TransportFailure(e.to_string());
            }
        };

        let received = repos.len();
        let feed = rank_repositories(repos, max_count);
        log::info!(target: LOG_TARGET, "showing {} of {received} repositories", feed.len());

        if feed.is_empty() {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Success(feed)
        }
    }

    pub fn apply(&self, outcome: &LoadOutcome, sink: &mut impl ProjectSink) {
        match outcome {
            LoadOutcome::Success(feed) => {
                sink.replace_grid(self.renderer.render_all(feed.entries()));
                sink.remove_fallback();
            }
            other => {
                if let Some(notice) = other.notice() {
                    sink.replace_grid(notice.render());
                }
            }
        }
    }

    async fn request(&self, identity: &str) -> Result<Vec<RepositorySummary>> {
        tokio::time::timeout(self.timeout, self.source.list_repositories(identity))
            .await
            .map_err(|_| FolioError::Timeout(self.timeout))?
    }
}
