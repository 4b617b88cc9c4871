use crate::Recipe;

/// Keeps the recipes whose title contains `term`, ignoring case. Order is preserved and an empty
/// term keeps everything.
pub fn filter_by_title(all: &[Recipe], term: &str) -> Vec<Recipe> {
    let term = term.to_lowercase();
    all.iter()
        .filter(|r| r.title.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
