//! News site scrapers.
//!
//! Each scraper follows the same two steps:
//!
//! 1. **Fetching**: download the raw page for each configured category
//! 2. **Extraction**: run the page through [`crate::extract`]
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | CNN | [`cnn`] | HTML scraping | Category pages, several card layouts |
//!
//! Failed categories are logged and skipped; the run carries on with the
//! rest and reports a non-zero status at the end.

pub mod cnn;
