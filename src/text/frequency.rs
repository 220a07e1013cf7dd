use std::collections::HashMap;

/// Token counts in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequencyTable {
    entries: Vec<(String, usize)>,
}

impl TokenFrequencyTable {
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens in the counted text.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries ordered by descending count. The sort is stable, so equal counts
    /// keep first-occurrence order.
    pub fn most_common(&self, k: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

/// Counts whitespace-separated tokens in a single left-to-right scan.
pub fn token_frequencies(cleaned: &str) -> TokenFrequencyTable {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for token in cleaned.split_whitespace() {
        match positions.get(token) {
            Some(&idx) => entries[idx].1 += 1,
            None => {
                positions.insert(token, entries.len());
                entries.push((token.to_string(), 1));
            }
        }
    }

    TokenFrequencyTable { entries }
}

/// Returns the `k` most frequent tokens, highest first.
///
/// Ties go to the token seen first. Fewer than `k` distinct tokens returns all of
/// them; `k == 0` or empty text returns an empty vector.
pub fn top_k(cleaned: &str, k: usize) -> Vec<(String, usize)> {
    if k == 0 {
        return Vec::new();
    }
    token_frequencies(cleaned).most_common(k)
}
