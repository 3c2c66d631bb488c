use crate::config::{is_configured, Config};
use crate::contact::{ContactClient, SENDING};
use crate::error::{FolioError, Result};
use crate::event::PageEvent;
use crate::feed::fallback::render_fallback;
use crate::feed::loader::{LoadOutcome, ProjectFeedLoader};
use crate::github::client::GitHubClient;
use crate::settings::ThemeStore;
use crate::ui::card::CardRenderer;
use crate::ui::page::Page;
use chrono::{Datelike, Utc};

pub struct App {
    pub config: Config,
    pub page: Page,
    pub last_outcome: Option<LoadOutcome>,
    loader: ProjectFeedLoader<GitHubClient>,
    theme_store: ThemeStore,
    contact: Option<ContactClient>,
}

impl App {
    pub fn new(config: Config, theme_store: ThemeStore) -> Result<Self> {
        let client = GitHubClient::new(&config.api_base_url)?;
        let renderer = CardRenderer::for_locale_name(&config.locale);
        let loader = ProjectFeedLoader::new(client, renderer, config.request_timeout());

        let contact = config
            .contact_endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .map(|e| ContactClient::new(e, config.request_timeout()))
            .transpose()?;

        let title = if is_configured(&config.github_username) {
            format!("{} · Portfolio", config.github_username.trim())
        } else {
            "Portfolio".to_string()
        };
        let mut page = Page::new(&title);
        page.theme = theme_store.load();
        page.contact_action = contact.as_ref().map(|c| c.endpoint().to_string());

        Ok(Self {
            config,
            page,
            last_outcome: None,
            loader,
            theme_store,
            contact,
        })
    }

    pub async fn handle_event(&mut self, event: PageEvent) -> Result<()> {
        match event {
            PageEvent::ContentLoaded => {
                self.page.year = Some(Utc::now().year());
                self.page.populate_fallback(render_fallback());
                let outcome = self
                    .loader
                    .load(
                        &self.config.github_username,
                        self.config.projects_count,
                        &mut self.page,
                    )
                    .await;
                self.last_outcome = Some(outcome);
            }
            PageEvent::ThemeToggled => {
                let theme = self.page.theme.toggled();
                self.theme_store.save(theme)?;
                self.page.theme = theme;
                log::info!("theme set to {theme}, saved in {}", self.theme_store.path().display());
            }
            PageEvent::ContactSubmitted(message) => {
                let client = self.contact.as_ref().ok_or_else(|| {
                    FolioError::Config("contact_endpoint is not configured".to_string())
                })?;
                self.page.contact_status = Some(SENDING.to_string());
                let status = client.submit(&message).await;
                if !status.is_sent() {
                    log::info!("contact message from {} was not delivered", message.email);
                }
                self.page.contact_status = Some(status.status_text().to_string());
            }
        }
        Ok(())
    }
}
