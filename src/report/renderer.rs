use super::charts::{layout_word_cloud, CLOUD_HEIGHT, CLOUD_WIDTH};
use super::search::display;
use super::types::{
    ArticleTable, BarChart, Notice, Report, TableRow, TableSection, MSG_DATA_NOT_FOUND,
    MSG_MISSING_COLUMNS, TABLE_ROW_LIMIT, TOP_TITLE_WORDS,
};
use crate::corpus::loader::LoadOutcome;
use crate::corpus::types::{Corpus, FIELD_BODY, FIELD_DATE, FIELD_LINK, FIELD_TITLE};
use crate::text::frequency::top_k;
use crate::text::normalizer::normalize;
use crate::text::stopwords::StopwordSet;

const TABLE_FIELDS: [&str; 4] = [FIELD_TITLE, FIELD_BODY, FIELD_LINK, FIELD_DATE];

/// Runs the full pipeline for one render cycle.
///
/// An empty corpus halts the report with the "data not found" warning, preceded
/// by the store diagnostic when the load failed. Otherwise every section is
/// computed; a missing table column only skips the table.
pub fn render_report(outcome: LoadOutcome<'_>, stopwords: &StopwordSet) -> Report {
    let mut notices = Vec::new();
    if let Some(error) = outcome.error {
        notices.push(Notice::error(format!("Gagal koneksi MongoDB: {}", error)));
    }

    let corpus = outcome.corpus;
    if corpus.is_empty() {
        tracing::warn!("Corpus is empty, nothing to render");
        notices.push(Notice::warning(MSG_DATA_NOT_FOUND));
        return Report::halted(notices);
    }

    let cleaned_body = normalize(corpus.bodies(), stopwords);
    let cleaned_title = normalize(corpus.titles(), stopwords);
    tracing::debug!(
        "Normalized {} records: {} body tokens, {} title tokens",
        corpus.len(),
        cleaned_body.split_whitespace().count(),
        cleaned_title.split_whitespace().count()
    );

    let body_cloud = layout_word_cloud(&cleaned_body, CLOUD_WIDTH, CLOUD_HEIGHT);
    let title_cloud = layout_word_cloud(&cleaned_title, CLOUD_WIDTH, CLOUD_HEIGHT);
    let title_chart = BarChart::from_top_words(top_k(&cleaned_title, TOP_TITLE_WORDS));

    Report {
        halted: false,
        notices,
        body_cloud: Some(body_cloud),
        title_cloud: Some(title_cloud),
        title_chart: Some(title_chart),
        table: Some(build_table(corpus)),
        search: None,
    }
}

/// Projects the first records into table rows, or a warning when the
/// collection lacks one of the table columns.
pub fn build_table(corpus: &Corpus) -> TableSection {
    if !corpus.has_fields(&TABLE_FIELDS) {
        tracing::warn!(
            "Article table skipped, collection fields: {:?}",
            corpus.fields()
        );
        return TableSection::Skipped {
            warning: Notice::warning(MSG_MISSING_COLUMNS),
        };
    }

    let rows = corpus
        .records()
        .iter()
        .take(TABLE_ROW_LIMIT)
        .enumerate()
        .map(|(idx, record)| TableRow {
            number: idx + 1,
            title: display(&record.title),
            body: display(&record.body),
            published_date: display(&record.published_date),
            link: display(&record.link),
        })
        .collect();

    TableSection::Rows(ArticleTable { rows })
}
