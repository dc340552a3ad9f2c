//! CNN category page scraper.
//!
//! Each category lives at `{base_url}/{category}` (for example
//! `https://cnn.com/business`). Pages are fetched concurrently, decoded as
//! UTF-8 and run through the [`extract`](crate::extract) engine.
//!
//! A failing category never aborts the run: it is logged, left out of the
//! report and flagged in [`ScrapeSummary::status`]. A category that yields
//! zero headlines is kept in the report but flagged the same way, since it
//! most likely means the markup changed.

use futures::stream::{self, StreamExt};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::config::Settings;
use crate::extract::{self, ParseError};
use crate::models::{CategoryHeadlines, HeadlineReport};
use crate::utils::truncate_for_log;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid category URL for {category:?}: {source}")]
    Url {
        category: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: Url, status: reqwest::StatusCode },
    #[error("could not parse {url}: {source}")]
    Parse {
        url: Url,
        #[source]
        source: ParseError,
    },
}

/// Outcome of scraping one category.
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: String,
    pub url: Url,
    pub headlines: CategoryHeadlines,
}

/// Everything a run produced.
#[derive(Debug, Default)]
pub struct ScrapeSummary {
    pub report: HeadlineReport,
    /// Categories that failed outright, with the error message.
    pub failures: Vec<(String, String)>,
    /// Categories that were fetched but yielded no headlines.
    pub empty: Vec<String>,
}

impl ScrapeSummary {
    /// Process exit status: 1 when any category failed or came back empty.
    pub fn status(&self) -> u8 {
        if self.failures.is_empty() && self.empty.is_empty() {
            0
        } else {
            1
        }
    }

    fn record(&mut self, category: &str, result: Result<CategoryOutcome, ScrapeError>) {
        match result {
            Ok(outcome) => {
                if outcome.headlines.is_empty() {
                    warn!(%category, url = %outcome.url, "zero titles found on {category}");
                    self.empty.push(category.to_string());
                } else {
                    info!(%category, count = outcome.headlines.len(), "Extracted headlines");
                }
                self.report.insert(outcome.category, outcome.headlines);
            }
            Err(e) => {
                error!(%category, error = %e, "error while processing {category}");
                self.failures.push((category.to_string(), e.to_string()));
            }
        }
    }
}

/// Build an HTTP client with the configured request timeout.
pub fn build_client(settings: &Settings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(settings.timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Resolve a category name against the base URL.
///
/// Follows normal relative-reference rules, so a base without a trailing
/// slash has its last segment replaced.
pub fn category_url(base: &Url, category: &str) -> Result<Url, ScrapeError> {
    base.join(category).map_err(|source| ScrapeError::Url {
        category: category.to_string(),
        source,
    })
}

/// GET a page and return its raw body.
///
/// # Arguments
///
/// * `client` - Shared HTTP client, see [`build_client`]
/// * `url` - Absolute page URL
///
/// # Returns
///
/// The undecoded response body. A non-2xx status is returned as
/// [`ScrapeError::Status`]; connection and body errors as [`ScrapeError::Http`].
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn fetch_page(client: &Client, url: &Url) -> Result<Vec<u8>, ScrapeError> {
    let http_err = |source: reqwest::Error| ScrapeError::Http {
        url: url.clone(),
        source,
    };
    let response = client.get(url.clone()).send().await.map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.clone(),
            status,
        });
    }
    let body = response.bytes().await.map_err(http_err)?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(body.to_vec())
}

/// Run extraction on a fetched page body.
pub fn headlines_from_page(
    body: &[u8],
    url: &Url,
    with_urls: bool,
) -> Result<CategoryHeadlines, ScrapeError> {
    let parse_err = |source: ParseError| ScrapeError::Parse {
        url: url.clone(),
        source,
    };
    let headlines = if with_urls {
        CategoryHeadlines::Links(extract::extract_headline_links(body, url).map_err(parse_err)?)
    } else {
        CategoryHeadlines::Titles(extract::extract_headlines(body).map_err(parse_err)?)
    };
    Ok(headlines)
}

/// Fetch one category page and extract its headlines.
#[instrument(level = "info", skip(client, base))]
pub async fn scrape_category(
    client: &Client,
    base: &Url,
    category: &str,
    with_urls: bool,
) -> Result<CategoryOutcome, ScrapeError> {
    let url = category_url(base, category)?;
    let body = fetch_page(client, &url).await?;
    let headlines = headlines_from_page(&body, &url, with_urls)?;
    if headlines.is_empty() {
        debug!(
            page_preview = %truncate_for_log(&String::from_utf8_lossy(&body), 300),
            "No headline pattern matched"
        );
    }
    Ok(CategoryOutcome {
        category: category.to_string(),
        url,
        headlines,
    })
}

/// Scrape every configured category.
///
/// Up to `settings.concurrency` pages are in flight at once; results are
/// gathered in the configured category order.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `settings` - Base URL, categories, concurrency and output shape
///
/// # Returns
///
/// A [`ScrapeSummary`] holding the report for every category that was
/// fetched, plus the categories that failed or came back empty. This never
/// fails as a whole.
#[instrument(level = "info", skip_all, fields(base_url = %settings.base_url))]
pub async fn scrape_categories(client: &Client, settings: &Settings) -> ScrapeSummary {
    let results: Vec<(String, Result<CategoryOutcome, ScrapeError>)> =
        stream::iter(settings.categories.iter())
            .map(|category| async move {
                let result =
                    scrape_category(client, &settings.base_url, category, settings.with_urls).await;
                (category.clone(), result)
            })
            .buffered(settings.concurrency)
            .collect()
            .await;

    let mut summary = ScrapeSummary::default();
    for (category, result) in results {
        summary.record(&category, result);
    }

    info!(
        categories = summary.report.len(),
        headlines = summary.report.headline_count(),
        failed = summary.failures.len(),
        empty = summary.empty.len(),
        "Scrape complete"
    );
    summary
}
