//! Text Analysis Module
//!
//! Lightweight Indonesian text processing used by the dashboard charts.
//!
//! ## Pipeline
//! 1. **Stopwords**: A fixed exclusion set, built once per session.
//! 2. **Normalization**: Free-text fields are joined, lowercased, split into word
//!    runs and stripped of stopwords, producing one cleaned token stream.
//! 3. **Frequency**: The cleaned stream is counted and ranked (top-K).
//!
//! ## Submodules
//! - **`stopwords`**: Indonesian default list merged with curated discourse words.
//! - **`normalizer`**: The `normalize` function.
//! - **`frequency`**: Token counting and top-K selection.

pub mod frequency;
pub mod normalizer;
pub mod stopwords;
