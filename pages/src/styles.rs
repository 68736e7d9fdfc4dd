//! CSS for the rendered page.
//!
//! The static part ([`PAGE_CSS`]) covers typography, the backdrop and the
//! card shell. Everything that depends on data is generated: the responsive
//! grid rule comes from [`GridLayout`], accent rules from [`Accent::theme`].
//!
//! # Customization
//!
//! ```rust
//! use page_leptos::compose::GridLayout;
//! use page_leptos::styles::stylesheet;
//!
//! let css = stylesheet(&GridLayout::default(), Some(".feature-card { border-width: 2px; }"));
//! assert!(css.contains("@media (min-width: 768px)"));
//! ```

use crate::compose::GridLayout;
use crate::types::Accent;

/// Content-Security-Policy for the document. The page is pure markup, so
/// scripts are refused outright.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src data:; script-src 'none'";

/// Base CSS - light gray backdrop, centred white panel, card shell.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #f3f4f6;
    --bg-panel: #ffffff;
    --text-strong: #1f2937;
    --text-muted: #4b5563;
    --border-card: rgba(31, 41, 55, 0.08);
    --radius: 0.5rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-strong);
    line-height: 1.5;
    margin: 0;
    min-height: 100vh;
}

.page-container {
    width: 100%;
    margin: 0 auto;
    padding: 2rem 1rem;
}

.page-panel {
    max-width: 56rem;
    margin: 0 auto;
    background: var(--bg-panel);
    border-radius: var(--radius);
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
    padding: 2rem;
}

.page-title {
    font-size: 2.25rem;
    line-height: 2.5rem;
    font-weight: 700;
    color: var(--text-strong);
    margin: 0 0 1rem;
}

.page-intro {
    font-size: 1.125rem;
    line-height: 1.75rem;
    color: var(--text-muted);
    margin: 0 0 1.5rem;
}

.feature-grid {
    display: grid;
    gap: 1.5rem;
}

.feature-card {
    border: 1px solid var(--border-card);
    border-radius: var(--radius);
    padding: 1.5rem;
    background: var(--card-surface);
}

.feature-card h2 {
    font-size: 1.25rem;
    line-height: 1.75rem;
    font-weight: 600;
    color: var(--card-heading);
    margin: 0 0 0.5rem;
}

.feature-card p {
    color: var(--text-muted);
    margin: 0;
}
"#;

/// Narrow column rule plus the media query that widens the grid at the
/// layout breakpoint.
pub fn grid_css(layout: &GridLayout) -> String {
    format!(
        ".feature-grid {{\n    grid-template-columns: repeat({}, minmax(0, 1fr));\n}}\n\
         @media (min-width: {}px) {{\n    .feature-grid {{\n        grid-template-columns: repeat({}, minmax(0, 1fr));\n    }}\n}}\n",
        layout.narrow_columns(),
        layout.breakpoint_px,
        layout.wide_columns.max(1)
    )
}

/// One rule per accent, setting the card custom properties.
pub fn accent_css() -> String {
    Accent::ALL
        .iter()
        .map(|accent| {
            let theme = accent.theme();
            format!(
                ".{} {{ --card-surface: {}; --card-heading: {}; }}\n",
                theme.class, theme.surface, theme.heading
            )
        })
        .collect()
}

/// Full stylesheet for a page laid out with `layout`, with optional
/// caller CSS appended last.
pub fn stylesheet(layout: &GridLayout, extra: Option<&str>) -> String {
    let mut css = String::from(PAGE_CSS);
    css.push_str(&accent_css());
    css.push_str(&grid_css(layout));
    if let Some(extra) = extra.filter(|s| !s.trim().is_empty()) {
        css.push_str(extra);
        css.push('\n');
    }
    css
}
