pub mod client;
pub mod types;

use crate::error::Result;
use types::RepositorySummary;

/// Anything that can list the public repositories of an account.
pub trait RepoSource {
    async fn list_repositories(&self, identity: &str) -> Result<Vec<RepositorySummary>>;
}
