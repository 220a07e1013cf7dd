//! Stopword Set
//!
//! Combines the Indonesian list shipped by the `stop-words` crate with a curated
//! list of connectives and transition words common in sports reporting.

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// Discourse words that the default Indonesian list does not reliably cover.
const CUSTOM_STOPWORDS: &[&str] = &[
    "kata", "salah", "tersebut", "jadi", "hingga", "tak", "tidak", "yang", "untuk", "dari",
    "oleh", "dalam", "atas", "sudah", "akan", "ini", "itu", "sangat", "juga", "lalu", "baru",
    "pun", "semua", "apa", "kalau", "kini", "mungkin", "namun", "memang", "tetap", "agar",
    "bukan", "dengan", "telah", "adalah", "sendiri", "atau", "satu", "sama", "lebih",
    "bagaimana", "terus", "melalui", "punya", "masih", "sejak", "baik", "bahkan", "selama",
    "ketika", "kemudian", "sedang", "karena", "bahwa", "berikut", "sebelum", "setelah",
    "antara", "sebagai", "yaitu", "setiap",
];

/// Immutable set of lowercase tokens excluded from frequency analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Builds a set from an explicit word list. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Builds the session stopword set: Indonesian defaults plus the curated list.
///
/// Deterministic: every call yields a set-equal result, so one instance can be
/// shared read-only by every normalization call in a session.
pub fn build_stopwords() -> StopwordSet {
    let defaults = get(LANGUAGE::Indonesian);
    let set = StopwordSet::from_words(
        defaults
            .iter()
            .map(|w| w.to_string())
            .chain(CUSTOM_STOPWORDS.iter().map(|w| w.to_string())),
    );

    tracing::debug!(
        "Built stopword set: {} words ({} curated)",
        set.len(),
        CUSTOM_STOPWORDS.len()
    );
    set
}
