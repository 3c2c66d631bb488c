#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub meta: &'static str,
}

pub const FALLBACK_ENTRIES: [FallbackEntry; 3] = [
    FallbackEntry {
        name: "Project Alpha",
        url: "#",
        description: "A demo app showing core features and responsive layout.",
        meta: "React · Vite",
    },
    FallbackEntry {
        name: "CLI Tool",
        url: "#",
        description: "Small Node.js CLI for developer productivity.",
        meta: "Node.js · npm",
    },
    FallbackEntry {
        name: "Design System",
        url: "#",
        description: "Reusable components, tokens, accessibility-first.",
        meta: "CSS · Tokens",
    },
];

impl FallbackEntry {
    // Entries are compile-time constants, so they go in unescaped.
    fn render(&self) -> String {
        format!(
            r#"
    <article class="card">
      <h3><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></h3>
      <p class="muted">{}</p>
      <div class="meta"><span class="meta-item">{}</span></div>
    </article>"#,
            self.url, self.name, self.description, self.meta
        )
    }
}

pub fn render_fallback() -> String {
    FALLBACK_ENTRIES.iter().map(FallbackEntry::render).collect()
}
