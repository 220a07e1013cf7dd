//! Basketball Article Dashboard Library
//!
//! Descriptive reporting over a pre-scraped collection of detik.com basketball
//! articles stored in MongoDB. The binary (`main.rs`) serves the dashboard over HTTP.
//!
//! ## Modules
//! The pipeline flows one way, from the store to the page:
//!
//! - **`config`**: Store location, timeouts and bind address.
//! - **`corpus`**: Loads and validates the article collection, memoized per session.
//! - **`text`**: Stopwords, text normalization and word frequency ranking.
//! - **`report`**: Word clouds, the top-words bar chart, the article table, title
//!   search and the HTML page.
//! - **`dashboard`**: Session state and the axum HTTP surface.

pub mod config;
pub mod corpus;
pub mod dashboard;
pub mod report;
pub mod text;
