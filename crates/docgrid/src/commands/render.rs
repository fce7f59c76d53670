//! Document to grid rendering (fetch → parse → extract → build → sort → render)

use crate::output;
use anyhow::{Context, Result, anyhow};
use docgrid_core::{RowPolicy, build_grid, grid_to_json, render_row, sort_grid};
use docgrid_fetch::{build_client, extract_rows, fetch_document, parse_document_url, parse_html};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Where the HTML document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings collected from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub timeout: Option<Duration>,
    pub row_policy: RowPolicy,
    pub format: OutputFormat,
}

/// Renders the document's grid to stdout
///
/// # Errors
///
/// Returns the first error raised by any stage, unchanged
pub fn run(source: &DocumentSource, options: &RunOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(source, options, &mut out)
}

/// Renders the document's grid to `out`, one line at a time
pub fn run_to<W: Write>(source: &DocumentSource, options: &RunOptions, out: &mut W) -> Result<()> {
    let html = load_document(source, options)?;

    let document = parse_html(&html)?;
    let rows = extract_rows(&document)?;
    let grid = build_grid(&rows, options.row_policy)?;
    let sorted = sort_grid(grid);

    info!(table_rows = rows.len(), grid_rows = sorted.len(), "rendering grid");

    match options.format {
        OutputFormat::Text => {
            for (y, group) in &sorted {
                debug!(y = y.as_str(), max_x = group.max_x(), "rendering row");
                output::print_line(out, &render_row(group))?;
            }
        }
        OutputFormat::Json => {
            output::print_json(out, &grid_to_json(&sorted)?)?;
        }
    }

    Ok(())
}

fn load_document(source: &DocumentSource, options: &RunOptions) -> Result<String> {
    match source {
        DocumentSource::Url(input) => {
            let url = parse_document_url(input)?;
            let client = build_client(options.timeout).context("Failed to build HTTP client")?;
            Ok(fetch_document(&client, &url)?)
        }
        DocumentSource::File(path) => {
            debug!(path = %path.display(), "reading document");
            fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read document {}: {e}", path.display()))
        }
    }
}
