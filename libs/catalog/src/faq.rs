use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

/// The parsed contents of `faqs.json`, keyed by page.
pub type FaqMap = HashMap<String, Vec<Faq>>;

/// Derives the FAQ key for a page: the last path segment without its extension.
pub fn page_key(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or_default();
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_owned(),
        _ => file.to_owned(),
    }
}

/// The questions for `key` in map order, or nothing when the page has none.
pub fn faqs_for<'a>(map: &'a FaqMap, key: &str) -> &'a [Faq] {
    map.get(key).map(Vec::as_slice).unwrap_or_default()
}
