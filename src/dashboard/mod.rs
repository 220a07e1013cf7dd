//! Dashboard Service Module
//!
//! The HTTP surface of the dashboard. One process hosts one session: the corpus is
//! loaded lazily on the first request and reused until the process exits.
//!
//! ## Endpoints
//! - `GET /?q=...`: The full HTML dashboard, with title search results when `q` is set.
//! - `GET /api/search?q=...`: Title search as JSON.
//! - `GET /health`: Liveness probe.
//!
//! ## Submodules
//! - **`session`**: Session state (loader + stopwords) and the render cycle.
//! - **`handlers`**: Axum handlers and router construction.

pub mod handlers;
pub mod session;
