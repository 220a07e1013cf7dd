use super::types::{SearchResults, SearchRow, SearchUpdate, SectionId, PLACEHOLDER};
use crate::corpus::types::{ArticleRecord, Corpus};

/// Records whose title contains `query`, ignoring case, in corpus order.
///
/// Records without a title never match.
pub fn search_titles<'a>(corpus: &'a Corpus, query: &str) -> Vec<&'a ArticleRecord> {
    let needle = query.to_lowercase();
    corpus
        .records()
        .iter()
        .filter(|record| {
            record
                .title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Event handler for the search box.
///
/// An empty query hides the results section; anything else recomputes it.
/// Only the results section is affected; charts and the main table stay as they are.
pub fn on_search_query_changed(corpus: &Corpus, query: &str) -> SearchUpdate {
    if query.is_empty() {
        return SearchUpdate {
            affected: vec![SectionId::SearchResults],
            results: None,
        };
    }

    let matches = search_titles(corpus, query);
    tracing::debug!("Title search {:?}: {} matches", query, matches.len());

    let rows = matches
        .iter()
        .enumerate()
        .map(|(idx, record)| SearchRow {
            number: idx + 1,
            title: display(&record.title),
            published_date: display(&record.published_date),
            link: display(&record.link),
        })
        .collect();

    SearchUpdate {
        affected: vec![SectionId::SearchResults],
        results: Some(SearchResults {
            query: query.to_string(),
            total_count: matches.len(),
            rows,
        }),
    }
}

pub(crate) fn display(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
}
