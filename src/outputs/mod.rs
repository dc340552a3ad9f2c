//! Report output.
//!
//! # Submodules
//!
//! - [`json`]: renders a [`HeadlineReport`](crate::models::HeadlineReport) as
//!   indented JSON and writes it to stdout or a file
//!
//! # Output Shape
//!
//! ```text
//! {
//!     "style": [
//!         "First headline",
//!         "Second headline"
//!     ],
//!     "entertainment": [],
//!     "business": [ ... ]
//! }
//! ```

pub mod json;
