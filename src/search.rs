//! The query engine: guard, match, score, rank.
//!
//! Matching is plain substring containment over normalized text. No
//! tokenization, no stemming, no fuzzy expansion; a page qualifies when the
//! normalized concatenation of its title, description, and content contains
//! the normalized query. Qualifying pages are scored per zone and sorted by
//! relevance, descending. The sort is stable, so equal-relevance pages keep
//! their index order and rankings are deterministic.
//!
//! Short queries are noise: anything under two characters after trimming
//! returns no results, and that is a normal outcome, not an error.

use crate::excerpt::make_excerpt;
use crate::scoring::score_entry;
use crate::types::{QueryResult, SearchIndex};
use crate::utils::normalize;

/// Queries shorter than this (in characters, after trimming) are ignored.
pub const MIN_QUERY_LEN: usize = 2;

/// Run a query against the index, producing ranked results.
///
/// Empty, whitespace-only, and single-character queries yield an empty
/// result list. So does a query that matches nothing; callers cannot tell
/// the difference, and are not meant to.
pub fn search(index: &SearchIndex, query: &str) -> Vec<QueryResult> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let normalized_query = normalize(trimmed);

    let mut results: Vec<QueryResult> = index
        .entries
        .iter()
        .filter_map(|entry| {
            let haystack = normalize(&format!(
                "{} {} {}",
                entry.title, entry.description, entry.content
            ));
            if !haystack.contains(&normalized_query) {
                return None;
            }
            // A containment hit that bridges two zones across the joining
            // space scores in no zone; such pages are not returned.
            let relevance = score_entry(entry, &normalized_query)?;
            Some(QueryResult {
                url: entry.url.clone(),
                title: entry.title.clone(),
                description: entry.description.clone(),
                excerpt: make_excerpt(&entry.content, trimmed),
                relevance,
            })
        })
        .collect();

    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    results
}
