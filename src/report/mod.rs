//! Report Module
//!
//! Turns a loaded corpus into the dashboard sections and renders them as HTML.
//!
//! ## Sections (in page order)
//! - Body word cloud and title word cloud.
//! - Bar chart of the 15 most frequent title words.
//! - Article table (first 3000 records, numbered from 1).
//! - Title search box and its conditional result table.
//!
//! ## Submodules
//! - **`types`**: Section data structures shared by the renderer, the page and the API.
//! - **`renderer`**: Builds a `Report` from a load outcome.
//! - **`search`**: Title search and the query-changed event handler.
//! - **`charts`**: Word cloud layout and SVG output for both chart kinds.
//! - **`page`**: HTML page assembly.

pub mod charts;
pub mod page;
pub mod renderer;
pub mod search;
pub mod types;

#[cfg(test)]
mod tests;
