//! # agora
//!
//! Command-line front end for the Agora landing page.
//!
//! Reads page content (built-in copy, or a TOML/JSON file), applies the
//! optional `.agora/config.toml`, composes the page with [`page_leptos`] and
//! writes static HTML.
//!
//! ## CLI Usage
//!
//! ```bash
//! agora render --out index.html          # built-in content
//! agora render -c page.toml -o index.html
//! agora check -c page.json               # validate and list grid slots
//! agora layout                           # composed page tree as JSON
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use agora::args::SourceArgs;
//! use agora::commands::render;
//!
//! let html = render(&SourceArgs::default()).unwrap();
//! std::fs::write("index.html", html).unwrap();
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod content;
