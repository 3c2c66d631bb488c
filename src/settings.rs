use crate::config::config_dir;
use crate::error::Result;
use crate::ui::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default)]
struct Settings {
    #[serde(default)]
    theme: Theme,
}

/// Persists the theme preference between runs.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(config_dir().join("folio").join("settings.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable settings mean the default theme.
    pub fn load(&self) -> Theme {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Theme::default(),
        };
        match toml::from_str::<Settings>(&content) {
            Ok(s) => s.theme,
            Err(e) => {
                log::debug!("ignoring unreadable settings at {}: {e}", self.path.display());
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        let content = toml::to_string_pretty(&Settings { theme })?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
