//! Corpus Module
//!
//! Loads the pre-scraped article collection from the document store and keeps it
//! for the lifetime of a dashboard session.
//!
//! ## Workflow
//! 1. **Connect**: Open a client with a bounded timeout and `ping` the server.
//! 2. **Fetch**: Read every document of the configured collection (no filter).
//! 3. **Validate**: Convert each raw document into a typed `ArticleRecord`.
//! 4. **Memoize**: The outcome (records or error) is cached until `reset()`.
//!
//! ## Submodules
//! - **`types`**: `ArticleRecord`, `Corpus` and the store error type.
//! - **`source`**: The `ArticleSource` seam and its MongoDB implementation.
//! - **`loader`**: Session-scoped memoizing loader.

pub mod loader;
pub mod source;
pub mod types;

#[cfg(test)]
mod tests;
