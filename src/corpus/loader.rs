use super::source::ArticleSource;
use super::types::{Corpus, StoreError};

/// Result of a (possibly cached) load.
///
/// On failure the corpus is empty and `error` holds the cause.
#[derive(Debug, Clone, Copy)]
pub struct LoadOutcome<'a> {
    pub corpus: &'a Corpus,
    pub error: Option<&'a StoreError>,
}

/// Session-scoped lazy loader.
///
/// The first `load()` queries the source; later calls return the cached outcome,
/// failures included, until `reset()` is called.
pub struct CorpusLoader<S: ArticleSource> {
    source: S,
    loaded: bool,
    corpus: Corpus,
    error: Option<StoreError>,
}

impl<S: ArticleSource> CorpusLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: false,
            corpus: Corpus::empty(),
            error: None,
        }
    }

    pub async fn load(&mut self) -> LoadOutcome<'_> {
        if !self.loaded {
            self.fetch().await;
            self.loaded = true;
        }

        LoadOutcome {
            corpus: &self.corpus,
            error: self.error.as_ref(),
        }
    }

    async fn fetch(&mut self) {
        tracing::info!("Loading articles from {}", self.source.describe());

        match self.source.fetch_all().await {
            Ok(docs) => {
                self.corpus = Corpus::from_documents(&docs);
                self.error = None;
                tracing::info!(
                    "Loaded {} articles ({} distinct fields)",
                    self.corpus.len(),
                    self.corpus.fields().len()
                );
            }
            Err(e) => {
                tracing::error!("Failed to load articles: {}", e);
                self.corpus = Corpus::empty();
                self.error = Some(e);
            }
        }
    }

    /// Drops the cached outcome so the next `load()` queries the source again.
    pub fn reset(&mut self) {
        tracing::debug!("Corpus cache reset");
        self.loaded = false;
        self.corpus = Corpus::empty();
        self.error = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
