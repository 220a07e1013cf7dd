//! Report Data Types
//!
//! Everything the page shows is captured here first, so the pipeline can be
//! checked without parsing HTML.

use serde::{Deserialize, Serialize};

/// Shown in table cells whose value is missing.
pub const PLACEHOLDER: &str = "-";
pub const TABLE_ROW_LIMIT: usize = 3000;
pub const TOP_TITLE_WORDS: usize = 15;

pub const PAGE_TITLE: &str = "Visualisasi Artikel Basket dari Detik.com";
pub const MSG_DATA_NOT_FOUND: &str = "Data tidak ditemukan.";
pub const MSG_MISSING_COLUMNS: &str =
    "Kolom 'judul', 'isi', 'tanggal', atau 'link' tidak ditemukan di data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Identifies a page section, used to tell the surface what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    BodyWordCloud,
    TitleWordCloud,
    TitleBarChart,
    ArticleTable,
    SearchResults,
}

/// A word placed on the cloud canvas. `(x, y)` is the text baseline start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub text: String,
    pub count: usize,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub words: Vec<PlacedWord>,
}

/// Horizontal bar chart; bars are drawn top to bottom in vector order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChart {
    pub bars: Vec<(String, usize)>,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub number: usize,
    pub title: String,
    pub body: String,
    pub published_date: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleTable {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableSection {
    Rows(ArticleTable),
    /// Required columns are absent from the collection schema.
    Skipped { warning: Notice },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRow {
    pub number: usize,
    pub title: String,
    pub published_date: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub total_count: usize,
    pub rows: Vec<SearchRow>,
}

impl SearchResults {
    pub fn summary(&self) -> String {
        format!("Ditemukan {} artikel:", self.total_count)
    }
}

/// Output of `on_search_query_changed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUpdate {
    pub affected: Vec<SectionId>,
    /// `None` when the query is empty: the results section is hidden.
    pub results: Option<SearchResults>,
}

/// The whole dashboard for one render cycle.
///
/// When `halted` is set only `notices` is meaningful: the corpus was empty and no
/// other section was computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub halted: bool,
    pub notices: Vec<Notice>,
    pub body_cloud: Option<WordCloud>,
    pub title_cloud: Option<WordCloud>,
    pub title_chart: Option<BarChart>,
    pub table: Option<TableSection>,
    pub search: Option<SearchResults>,
}

impl Report {
    pub fn halted(notices: Vec<Notice>) -> Self {
        Self {
            halted: true,
            notices,
            ..Self::default()
        }
    }

    /// Applies a search update. A halted report has no search box, so it is left alone.
    pub fn apply_search(&mut self, update: SearchUpdate) {
        if self.halted {
            return;
        }
        if update.affected.contains(&SectionId::SearchResults) {
            self.search = update.results;
        }
    }
}
