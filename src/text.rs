use crate::types::SummaryLimit;
use regex::Regex;
use std::sync::OnceLock;

const TRUNCATION_MARKER: char = '…';

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern"))
}

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&[a-zA-Z#0-9]+;").expect("entity pattern"))
}

/// Strip markup tags, collapse character references to a space, collapse
/// whitespace runs, and trim. Idempotent: cleansing already-clean text is a
/// no-op.
pub fn cleanse(text: &str) -> String {
    let no_tags = tag_re().replace_all(text, " ");
    let no_entities = entity_re().replace_all(&no_tags, " ");
    no_entities.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build a bounded description from free text. The text is cleansed first;
/// anything within the limit passes through unchanged, anything longer is
/// cut (at a word boundary in word mode, at a scalar boundary in char mode)
/// with a single truncation marker appended.
pub fn summarize(text: &str, limit: SummaryLimit) -> String {
    let clean = cleanse(text);
    match limit {
        SummaryLimit::Words(max) => {
            let words: Vec<&str> = clean.split_whitespace().collect();
            if words.len() <= max {
                clean
            } else {
                let mut out = words[..max].join(" ");
                out.push(TRUNCATION_MARKER);
                out
            }
        }
        SummaryLimit::Chars(max) => {
            if clean.chars().count() <= max {
                clean
            } else {
                let mut out: String = clean.chars().take(max).collect();
                out.truncate(out.trim_end().len());
                out.push(TRUNCATION_MARKER);
                out
            }
        }
    }
}
