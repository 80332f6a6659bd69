use strsim::jaro_winkler;

use super::catalog::TitleSuggestion;

/// Queries shorter than this return nothing; two characters match half the
/// catalog and help nobody.
pub const MIN_QUERY_CHARS: usize = 3;

/// Fuzzy matches below this similarity are noise.
const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Rank catalog titles against a query: case-insensitive substring matches
/// first, then near-misses by Jaro-Winkler similarity (good for short names
/// and typos in them). Ties keep catalog order.
pub fn rank_titles<'a>(
    catalog: &'a [TitleSuggestion],
    query: &str,
) -> Vec<&'a TitleSuggestion> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &TitleSuggestion)> = catalog
        .iter()
        .filter_map(|suggestion| {
            let haystack = suggestion.title.to_lowercase();
            let score = if haystack.contains(&needle) {
                1.0
            } else {
                jaro_winkler(&needle, &haystack)
            };
            (score >= SIMILARITY_THRESHOLD).then_some((score, suggestion))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, suggestion)| suggestion).collect()
}
