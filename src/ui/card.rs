use crate::github::types::RepositorySummary;
use crate::ui::escape_html;
use chrono::{Local, Locale};

pub const MISSING_DESCRIPTION: &str = "No description";

/// Renders repository cards; dates follow the configured locale in the local time zone.
#[derive(Debug, Clone, Copy)]
pub struct CardRenderer {
    locale: Locale,
}

impl CardRenderer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Unknown locale names fall back to POSIX date formatting.
    pub fn for_locale_name(name: &str) -> Self {
        let locale = Locale::try_from(name).unwrap_or_else(|_| {
            log::warn!("unknown locale '{name}', using POSIX date format");
            Locale::POSIX
        });
        Self::new(locale)
    }

    pub fn render(&self, repo: &RepositorySummary) -> String {
        let description = escape_html(repo.description.as_deref().unwrap_or(MISSING_DESCRIPTION));
        let language = repo
            .language
            .as_deref()
            .map(|l| format!(r#"<span class="meta-item">● {}</span> "#, escape_html(l)))
            .unwrap_or_default();
        let updated = repo
            .updated_at
            .with_timezone(&Local)
            .format_localized("%x", self.locale);

        format!(
            r#"
    <article class="card">
      <h3><a href="{url}" target="_blank" rel="noopener noreferrer">{name}</a></h3>
      <p>{description}</p>
      <div class="meta">{language}<span class="meta-item">★ {stars}</span> <span class="meta-item">Updated {updated}</span></div>
    </article>"#,
            url = escape_html(&repo.html_url),
            name = escape_html(&repo.name),
            stars = repo.stargazers_count,
        )
    }

    pub fn render_all(&self, repos: &[RepositorySummary]) -> String {
        repos.iter().map(|r| self.render(r)).collect()
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}
