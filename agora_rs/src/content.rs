//! Page content sources.
//!
//! Content is either the built-in Agora landing copy or a TOML/JSON file
//! shaped like [`RawPageContent`]. Files are validated on the way in, so a
//! `null` card in a JSON array is reported by position.

use std::path::Path;

use anyhow::{Context, Result};
use page_leptos::types::{PageContent, RawPageContent};
use tracing::debug;

/// Landing copy shipped with the binary.
pub const BUILTIN_CONTENT: &str = include_str!("../assets/home.toml");

/// Serialization of a content file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    /// `.json` is JSON, everything else TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ContentFormat::Json,
            _ => ContentFormat::Toml,
        }
    }
}

/// Parse and validate content text.
pub fn parse_content(text: &str, format: ContentFormat) -> Result<PageContent> {
    let raw: RawPageContent = match format {
        ContentFormat::Toml => toml::from_str(text).context("content is not valid TOML")?,
        ContentFormat::Json => serde_json::from_str(text).context("content is not valid JSON")?,
    };
    Ok(PageContent::try_from(raw)?)
}

/// Load content from `path`, or the built-in copy when `None`.
pub fn load_content(path: Option<&Path>) -> Result<PageContent> {
    let Some(path) = path else {
        debug!("using built-in content");
        return parse_content(BUILTIN_CONTENT, ContentFormat::Toml)
            .context("built-in content is broken");
    };

    debug!("reading content from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content file {}", path.display()))?;
    parse_content(&text, ContentFormat::from_path(path))
        .with_context(|| format!("failed to load content from {}", path.display()))
}
