//! Leptos UI components for rendering pages.
//!
//! Each component is a Leptos `#[component]` function over a piece of a
//! [`RenderedPage`](crate::compose::RenderedPage).
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── PageHeader
//! │   ├── h1 (title)
//! │   └── p (introduction)
//! └── FeatureGrid
//!     └── FeatureCardView (per slot)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! embedded in another layout:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use page_leptos::components::FeatureGrid;
//!
//! view! { <FeatureGrid grid=page.grid /> }
//! ```

mod document;
mod feature_grid;
mod header;

pub use document::PageDocument;
pub use feature_grid::{FeatureCardView, FeatureGrid};
pub use header::PageHeader;
