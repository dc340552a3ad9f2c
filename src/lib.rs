//! # CNN Headlines
//!
//! Fetches CNN category pages and pulls the headline text out of their
//! markup, producing a JSON report keyed by category.
//!
//! The interesting part is [`extract`], which finds headline elements across
//! the card layouts CNN uses and flattens each to a single clean line:
//!
//! ```
//! let html = br#"<h3 class="cd__headline"><a href="/x">Opinion: <strong>Markets</strong> fall</a></h3>"#;
//! let headlines = cnn_headlines::extract::extract_headlines(html).unwrap();
//! assert_eq!(headlines, vec!["Opinion: Markets fall"]);
//! ```
//!
//! The rest is plumbing: [`config`] resolves run settings, [`scrapers`]
//! fetches pages, [`outputs`] writes the report.

pub mod config;
pub mod extract;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;
