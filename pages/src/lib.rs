//! # page-leptos
//!
//! Leptos SSR composer for static landing pages.
//!
//! Content is described as data ([`types::PageContent`]: a title, an
//! introduction and an ordered list of feature cards), composed into a
//! visual tree ([`compose::RenderedPage`]) and rendered to a standalone HTML
//! document. Composition is pure and validation happens up front, so a page
//! is either complete or not produced at all.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Data-Driven Grid** - Any number of cards, one column narrow, three wide
//! - **Typed Accents** - Closed theme set, unknown keys fall back to neutral
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::{compose_and_render, DocumentOptions};
//! use page_leptos::compose::GridLayout;
//! use page_leptos::types::PageContent;
//!
//! let html = compose_and_render(
//!     &PageContent::agora_home(),
//!     &GridLayout::default(),
//!     &DocumentOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content model and accent themes
//! - [`compose`] - Validation and grid layout
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants and generated rules
//! - [`error`] - [`PageError`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod compose;
pub mod error;
pub mod styles;
pub mod types;

use components::PageDocument;
use compose::{GridLayout, RenderedPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::PageContent;

pub use error::{ContentIssue, PageError};

/// Render a composed page to a complete HTML document.
///
/// # Example
///
/// ```rust
/// use page_leptos::{render_page, DocumentOptions};
/// use page_leptos::compose::compose;
/// use page_leptos::types::PageContent;
///
/// let page = compose(&PageContent::agora_home()).unwrap();
/// let html = render_page(&page, &DocumentOptions::default());
/// assert!(html.contains("<h1"));
/// ```
pub fn render_page(page: &RenderedPage, options: &DocumentOptions) -> String {
    let doc = view! {
        <PageDocument page=page.clone() options=options.clone() />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Validate, compose and render in one call.
pub fn compose_and_render(
    content: &PageContent,
    layout: &GridLayout,
    options: &DocumentOptions,
) -> Result<String, PageError> {
    let page = compose::compose_with(content, layout)?;
    Ok(render_page(&page, options))
}

/// Document-level settings that are not part of the page content.
#[derive(Clone, Debug)]
pub struct DocumentOptions {
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// `<title>` text; the page heading when `None`
    pub document_title: Option<String>,
    /// CSS appended after the built-in stylesheet
    pub extra_css: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            lang: "ru".into(),
            document_title: None,
            extra_css: None,
        }
    }
}
