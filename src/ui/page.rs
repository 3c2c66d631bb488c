use crate::feed::ProjectSink;
use crate::ui::escape_html;
use crate::ui::theme::Theme;

/// The rendered document: the project grid, the optional fallback region and
/// the page chrome around them.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub theme: Theme,
    pub year: Option<i32>,
    pub contact_action: Option<String>,
    pub contact_status: Option<String>,
    live_grid: String,
    fallback: Option<String>,
}

impl Page {
    /// A fresh page has an empty grid and an empty fallback region.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            theme: Theme::default(),
            year: None,
            contact_action: None,
            contact_status: None,
            live_grid: String::new(),
            fallback: Some(String::new()),
        }
    }

    pub fn live_grid(&self) -> &str {
        &self.live_grid
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Fills the fallback region if the page has one.
    pub fn populate_fallback(&mut self, markup: String) {
        if let Some(region) = self.fallback.as_mut() {
            *region = markup;
        }
    }

    pub fn render_document(&self) -> String {
        let fallback = self
            .fallback
            .as_deref()
            .map(|f| format!("\n    <div id=\"projects-fallback\" class=\"grid\">{f}\n    </div>"))
            .unwrap_or_default();
        let contact = self
            .contact_action
            .as_deref()
            .map(|action| {
                format!(
                    r#"
  <section id="contact">
    <h2>Contact</h2>
    <form id="contact-form" action="{action}" method="POST">
      <input name="name" required>
      <input name="email" type="email" required>
      <textarea name="message" required></textarea>
      <button type="submit">Send</button>
    </form>
    <p id="form-status">{status}</p>
  </section>"#,
                    action = escape_html(action),
                    status = escape_html(self.contact_status.as_deref().unwrap_or_default()),
                )
            })
            .unwrap_or_default();
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <header>
    <button id="theme-toggle" aria-label="Toggle theme">{icon}</button>
  </header>
  <section id="projects">
    <h2>Projects</h2>
    <div id="projects-grid" class="grid">{grid}
    </div>{fallback}
  </section>{contact}
  <footer>&copy; <span id="year">{year}</span></footer>
</body>
</html>
"#,
            theme = self.theme,
            title = escape_html(&self.title),
            icon = self.theme.toggle_icon(),
            grid = self.live_grid,
        )
    }
}

impl ProjectSink for Page {
    fn replace_grid(&mut self, markup: String) {
        self.live_grid = markup;
    }

    fn remove_fallback(&mut self) {
        self.fallback = None;
    }
}
