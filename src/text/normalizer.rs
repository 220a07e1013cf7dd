use super::stopwords::StopwordSet;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Cleans a column of free-text fields into a single token stream.
///
/// Missing and empty entries are dropped, the rest are joined with a space and
/// lowercased. Tokens are maximal runs of word characters (letters, digits,
/// underscore); everything else is a separator. Stopwords are removed and the
/// surviving tokens are rejoined with single spaces in their original order.
pub fn normalize<'a, I>(fields: I, stopwords: &StopwordSet) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let joined = fields
        .into_iter()
        .flatten()
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    WORD_RE
        .find_iter(&joined)
        .map(|m| m.as_str())
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
