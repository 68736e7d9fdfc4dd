//! Configuration file support for agora.
//!
//! Loads optional `.agora/config.toml` from the working directory.

use std::path::Path;

use page_leptos::DocumentOptions;
use page_leptos::compose::{DEFAULT_BREAKPOINT_PX, DEFAULT_WIDE_COLUMNS, GridLayout};
use serde::Deserialize;
use tracing::{debug, warn};

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AgoraConfig {
    pub layout: LayoutConfig,
    pub document: DocumentConfig,
}

/// Responsive grid settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width (px) where the grid goes wide
    pub breakpoint_px: u32,
    /// Columns on wide viewports. Zero is treated as one.
    pub wide_columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            wide_columns: DEFAULT_WIDE_COLUMNS,
        }
    }
}

/// Document-level settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// `lang` attribute of the page
    pub lang: String,
    /// Browser tab title; the page heading when unset
    pub title: Option<String>,
    /// CSS appended to the built-in stylesheet
    pub extra_css: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        let defaults = DocumentOptions::default();
        Self {
            lang: defaults.lang,
            title: defaults.document_title,
            extra_css: defaults.extra_css,
        }
    }
}

impl AgoraConfig {
    /// Load config from `.agora/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".agora").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Grid layout for composition.
    pub fn grid_layout(&self) -> GridLayout {
        if self.layout.wide_columns == 0 {
            warn!("layout.wide_columns = 0, using 1");
        }
        GridLayout::new(self.layout.wide_columns, self.layout.breakpoint_px)
    }

    /// Options for the HTML document.
    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            lang: self.document.lang.clone(),
            document_title: self.document.title.clone().filter(|t| !t.trim().is_empty()),
            extra_css: self.document.extra_css.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AgoraConfig::default();
        assert_eq!(config.grid_layout(), GridLayout::default());
        assert_eq!(config.document.lang, "ru");
        assert!(config.document_options().document_title.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = AgoraConfig::load(temp.path());
        assert_eq!(config.layout.breakpoint_px, DEFAULT_BREAKPOINT_PX);
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let agora_dir = temp.path().join(".agora");
        std::fs::create_dir_all(&agora_dir).expect("create .agora");

        let config_path = agora_dir.join("config.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[layout]
breakpoint_px = 1024
wide_columns = 2

[document]
lang = "en"
title = "Agora"
"#
        )
        .expect("write config");

        let config = AgoraConfig::load(temp.path());
        assert_eq!(config.grid_layout(), GridLayout::new(2, 1024));

        let options = config.document_options();
        assert_eq!(options.lang, "en");
        assert_eq!(options.document_title.as_deref(), Some("Agora"));
        assert!(options.extra_css.is_none());
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("agora.toml");
        std::fs::write(&config_path, "[layout]\nwide_columns = 4\n").expect("write config");

        let config = AgoraConfig::load_from_path(&config_path);
        assert_eq!(config.layout.wide_columns, 4);
        assert_eq!(config.layout.breakpoint_px, DEFAULT_BREAKPOINT_PX);
        assert_eq!(config.document.lang, "ru");
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("broken.toml");
        std::fs::write(&config_path, "[layout\nbreakpoint_px = ").expect("write config");

        let config = AgoraConfig::load_from_path(&config_path);
        assert_eq!(config.grid_layout(), GridLayout::default());
    }

    #[test]
    fn test_zero_columns_clamped() {
        let config = AgoraConfig {
            layout: LayoutConfig {
                breakpoint_px: 640,
                wide_columns: 0,
            },
            ..Default::default()
        };
        assert_eq!(config.grid_layout().wide_columns, 1);
    }
}
