//! CLI command structure using clap

use crate::commands::render::{DocumentSource, OutputFormat, RunOptions};
use anyhow::{Result, anyhow};
use clap::{ArgGroup, Parser};
use docgrid_core::RowPolicy;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "docgrid")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
pub struct Cli {
    /// URL of the HTML document holding the (x, char, y) table
    pub url: Option<String>,

    /// Read HTML from a local file instead of a URL
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip rows with fewer than three cells instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Print the sorted grid as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Where the document comes from
    ///
    /// # Errors
    ///
    /// Returns an error if neither a URL nor `--file` was given
    pub fn source(&self) -> Result<DocumentSource> {
        match (&self.url, &self.file) {
            (_, Some(path)) => Ok(DocumentSource::File(path.clone())),
            (Some(url), None) => Ok(DocumentSource::Url(url.clone())),
            (None, None) => Err(anyhow!("either a URL or --file is required")),
        }
    }

    pub fn options(&self) -> RunOptions {
        RunOptions {
            timeout: self.timeout.map(Duration::from_secs),
            row_policy: if self.skip_malformed {
                RowPolicy::Skip
            } else {
                RowPolicy::Fail
            },
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}
