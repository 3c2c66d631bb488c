use crate::error::Result;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

const LOG_TARGET: &str = "contact";

pub const SENDING: &str = "Sending...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactStatus {
    Sent,
    Rejected(StatusCode),
    NetworkError,
}

impl ContactStatus {
    pub fn status_text(&self) -> &'static str {
        match self {
            ContactStatus::Sent => "✅ Thanks! Your message has been sent.",
            ContactStatus::Rejected(_) => "⚠️ Oops, something went wrong. Try again.",
            ContactStatus::NetworkError => "⚠️ Network error. Please try again.",
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, ContactStatus::Sent)
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_text())
    }
}

/// Posts contact form messages to a form backend such as Formspree.
#[derive(Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit(&self, message: &ContactMessage) -> ContactStatus {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(message)
            .send()
            .await;

        match response {
            Ok(r) if r.status().is_success() => ContactStatus::Sent,
            Ok(r) => {
                log::warn!(target: LOG_TARGET, "form endpoint answered {}", r.status());
                ContactStatus::Rejected(r.status())
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "form submission failed: {e}");
                ContactStatus::NetworkError
            }
        }
    }
}
