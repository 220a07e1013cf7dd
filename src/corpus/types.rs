//! Corpus Data Types
//!
//! Typed view over the raw store documents. Field names in the store are
//! Indonesian (`judul`, `isi`, `tanggal`, `link`); they are kept verbatim in the
//! schema set and in serialized output.

use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

pub const FIELD_ID: &str = "_id";
pub const FIELD_TITLE: &str = "judul";
pub const FIELD_BODY: &str = "isi";
pub const FIELD_DATE: &str = "tanggal";
pub const FIELD_LINK: &str = "link";

/// One scraped article.
///
/// Every field is optional: the scraper does not guarantee a complete document,
/// and missing values are handled downstream (dropped for analysis, shown as a
/// placeholder in tables).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "judul")]
    pub title: Option<String>,
    #[serde(rename = "isi")]
    pub body: Option<String>,
    /// Display string as scraped; never parsed.
    #[serde(rename = "tanggal")]
    pub published_date: Option<String>,
    pub link: Option<String>,
}

impl ArticleRecord {
    /// Validates a raw store document into a record.
    ///
    /// String values are taken as-is, null values become `None` and any other
    /// scalar is converted to its display string.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.get(FIELD_ID).and_then(bson_to_text),
            title: doc.get(FIELD_TITLE).and_then(bson_to_text),
            body: doc.get(FIELD_BODY).and_then(bson_to_text),
            published_date: doc.get(FIELD_DATE).and_then(bson_to_text),
            link: doc.get(FIELD_LINK).and_then(bson_to_text),
        }
    }
}

fn bson_to_text(value: &Bson) -> Option<String> {
    match value {
        Bson::String(s) => Some(s.clone()),
        Bson::Null | Bson::Undefined => None,
        Bson::Double(f) if f.is_nan() => None,
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::DateTime(dt) => Some(
            dt.try_to_rfc3339_string()
                .unwrap_or_else(|_| dt.timestamp_millis().to_string()),
        ),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(f) => Some(f.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// The full set of articles loaded for one session.
///
/// Immutable after construction. `fields` is the union of the field names found
/// across all documents, used to decide whether the article table can be shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    records: Vec<ArticleRecord>,
    fields: BTreeSet<String>,
}

impl Corpus {
    pub fn new(records: Vec<ArticleRecord>, fields: BTreeSet<String>) -> Self {
        Self { records, fields }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a corpus from raw documents, preserving their order.
    pub fn from_documents(docs: &[Document]) -> Self {
        let fields = docs
            .iter()
            .flat_map(|doc| doc.keys().cloned())
            .collect::<BTreeSet<String>>();
        let records = docs.iter().map(ArticleRecord::from_document).collect();
        Self { records, fields }
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn fields(&self) -> &BTreeSet<String> {
        &self.fields
    }

    /// True when every named field appears in at least one document.
    pub fn has_fields(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.fields.contains(*name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = Option<&str>> {
        self.records.iter().map(|r| r.title.as_deref())
    }

    pub fn bodies(&self) -> impl Iterator<Item = Option<&str>> {
        self.records.iter().map(|r| r.body.as_deref())
    }
}

/// Recoverable failures while reaching the article store.
///
/// Messages carry the underlying driver error so they can be shown verbatim in
/// the dashboard diagnostic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid connection string: {0}")]
    InvalidUri(String),
    #[error("server unreachable: {0}")]
    Unreachable(String),
    #[error("query failed: {0}")]
    Query(String),
}
