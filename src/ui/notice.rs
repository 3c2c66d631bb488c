/// Single-card messages shown in the project grid instead of live cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Misconfigured,
    Empty,
    TransportFailure,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Misconfigured => "Set your GitHub username",
            Notice::Empty => "No public repos",
            Notice::TransportFailure => "Unable to load projects",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Notice::Misconfigured => {
                "Set <code>github_username</code> in your folio config and replace <code>YOUR_GITHUB_USERNAME</code> with your username."
            }
            Notice::Empty => "You currently have no public repositories to show.",
            Notice::TransportFailure => {
                "There was a problem fetching GitHub repos. Showing fallback projects below."
            }
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"
    <div class="card">
      <h3>{}</h3>
      <p class="muted">{}</p>
    </div>"#,
            self.title(),
            self.body()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_notice_has_its_own_wording() {
        let all = [Notice::Misconfigured, Notice::Empty, Notice::TransportFailure];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.title(), b.title());
                assert_ne!(a.render(), b.render());
            }
        }
    }

    #[test]
    fn renders_one_card() {
        let html = Notice::Empty.render();
        assert_eq!(html.matches(r#"class="card""#).count(), 1);
        assert!(html.contains("No public repos"));
    }
}
