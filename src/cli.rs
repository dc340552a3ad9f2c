//! Command-line interface definitions for CNN Headlines.
//!
//! Options can be given as flags or, where noted, environment variables.
//! Anything left unset falls back to the YAML config file and then to the
//! built-in defaults (see [`cnn_headlines::config`]).

use clap::Parser;
use cnn_headlines::config::Overrides;
use std::path::PathBuf;

/// Command-line arguments for the CNN Headlines application.
///
/// # Examples
///
/// ```sh
/// # Default categories (style, entertainment, business) to stdout
/// cnn_headlines
///
/// # Pick categories and write to a file
/// cnn_headlines -C world -C politics -o ./headlines.json
///
/// # Include the link for each headline
/// cnn_headlines --with-urls
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Site root that category names are resolved against
    #[arg(long, env = "CNN_BASE_URL")]
    pub base_url: Option<String>,

    /// Category to scrape; repeat for several
    #[arg(short = 'C', long = "category")]
    pub categories: Vec<String>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "CNN_HEADLINES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit `{title, url}` objects instead of bare titles
    #[arg(long)]
    pub with_urls: bool,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Maximum number of category pages fetched at once
    #[arg(long)]
    pub concurrency: Option<usize>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            categories: self.categories.clone(),
            timeout_secs: self.timeout_secs,
            concurrency: self.concurrency,
            with_urls: self.with_urls,
        }
    }
}
