//! Subcommand handlers.
//!
//! Handlers write to a caller-supplied sink so tests can capture output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use page_leptos::compose::{RenderedPage, compose_with};
use page_leptos::render_page;
use tracing::info;

use crate::args::{Command, SourceArgs};
use crate::config::AgoraConfig;
use crate::content::load_content;

/// Dispatch a parsed command.
pub fn run(command: &Command, stdout: &mut impl Write) -> Result<()> {
    match command {
        Command::Render { source, out } => {
            let html = render(source)?;
            match out {
                Some(path) => {
                    std::fs::write(path, &html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!("wrote {} bytes to {}", html.len(), path.display());
                }
                None => stdout.write_all(html.as_bytes())?,
            }
        }
        Command::Check { content, config } => {
            let source = SourceArgs {
                content: Some(content.clone()),
                config: config.clone(),
            };
            let page = compose_page(&source)?;
            write_summary(&page, stdout)?;
        }
        Command::Layout { source } => {
            let page = compose_page(source)?;
            serde_json::to_writer_pretty(&mut *stdout, &page)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> AgoraConfig {
    match path {
        Some(path) => AgoraConfig::load_from_path(path),
        None => AgoraConfig::load(Path::new(".")),
    }
}

fn compose_from(source: &SourceArgs) -> Result<(AgoraConfig, RenderedPage)> {
    let config = load_config(source.config.as_deref());
    let content = load_content(source.content.as_deref())?;
    let page = compose_with(&content, &config.grid_layout())?;
    info!(
        "composed \"{}\" with {} card(s)",
        page.heading.text,
        page.grid.slots.len()
    );
    Ok((config, page))
}

/// Compose the page described by `source`.
pub fn compose_page(source: &SourceArgs) -> Result<RenderedPage> {
    compose_from(source).map(|(_, page)| page)
}

/// Compose and render to an HTML string.
pub fn render(source: &SourceArgs) -> Result<String> {
    let (config, page) = compose_from(source)?;
    Ok(render_page(&page, &config.document_options()))
}

fn write_summary(page: &RenderedPage, out: &mut impl Write) -> Result<()> {
    let layout = &page.grid.layout;
    writeln!(
        out,
        "ok: \"{}\" - {} card(s), {} row(s) x {} column(s) from {}px",
        page.heading.text,
        page.grid.slots.len(),
        page.grid.rows,
        layout.wide_columns,
        layout.breakpoint_px
    )?;
    for slot in &page.grid.slots {
        writeln!(
            out,
            "  [{}] row {} col {}  {:<9}  {}",
            slot.index, slot.row, slot.column, slot.accent, slot.heading
        )?;
    }
    Ok(())
}
