#![cfg(test)]

use crate::github::types::RepositorySummary;
use chrono::{DateTime, NaiveDate, Utc};

/// `date` is `YYYY-MM-DD`; the timestamp lands at midnight UTC.
pub fn make_time(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("test date")
        .and_hms_opt(0, 0, 0)
        .expect("midnight")
        .and_utc()
}

pub fn make_repo(name: &str, stars: u32, updated: &str) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{name}"),
        description: Some(format!("{name} description")),
        language: Some("Rust".to_string()),
        stargazers_count: stars,
        updated_at: make_time(updated),
        fork: false,
        private: false,
    }
}
