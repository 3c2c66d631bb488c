use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /users/{user}/repos`, reduced to the fields a card needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
}

impl RepositorySummary {
    pub fn is_eligible(&self) -> bool {
        !self.fork && !self.private
    }
}

/// Query string for the listing request; the sort is only a hint to the server.
#[derive(Debug, Serialize)]
pub struct ListParams {
    pub per_page: u8,
    pub sort: &'static str,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            per_page: 100,
            sort: "updated",
        }
    }
}
