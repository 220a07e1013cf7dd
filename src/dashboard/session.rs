use crate::corpus::loader::CorpusLoader;
use crate::corpus::source::ArticleSource;
use crate::corpus::types::StoreError;
use crate::report::renderer::render_report;
use crate::report::search::on_search_query_changed;
use crate::report::types::{Report, SearchUpdate};
use crate::text::stopwords::{build_stopwords, StopwordSet};
use std::sync::Arc;
use tokio::sync::Mutex;

/// State owned by one dashboard session: the memoized corpus and the stopword set.
pub struct DashboardSession<S: ArticleSource> {
    loader: CorpusLoader<S>,
    stopwords: StopwordSet,
}

impl<S: ArticleSource> DashboardSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            loader: CorpusLoader::new(source),
            stopwords: build_stopwords(),
        }
    }

    pub fn with_stopwords(source: S, stopwords: StopwordSet) -> Self {
        Self {
            loader: CorpusLoader::new(source),
            stopwords,
        }
    }

    /// One full render cycle. Everything except the corpus load is recomputed.
    pub async fn render(&mut self, query: &str) -> Report {
        let outcome = self.loader.load().await;
        let mut report = render_report(outcome, &self.stopwords);
        if !report.halted {
            report.apply_search(on_search_query_changed(outcome.corpus, query));
        }
        report
    }

    /// Search only, without recomputing the charts.
    ///
    /// A failed load is returned as the error instead of an empty result.
    pub async fn search(&mut self, query: &str) -> Result<SearchUpdate, StoreError> {
        let outcome = self.loader.load().await;
        if let Some(error) = outcome.error {
            return Err(error.clone());
        }
        Ok(on_search_query_changed(outcome.corpus, query))
    }

    pub fn reset(&mut self) {
        self.loader.reset();
    }

    pub fn is_loaded(&self) -> bool {
        self.loader.is_loaded()
    }
}

pub type SharedSession = Arc<Mutex<DashboardSession<Arc<dyn ArticleSource>>>>;

/// Application state handed to the axum router.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
}

impl AppState {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self::from_session(DashboardSession::new(source))
    }

    pub fn from_session(session: DashboardSession<Arc<dyn ArticleSource>>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}
