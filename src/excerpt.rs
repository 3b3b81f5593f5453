// Copyright 2024-present Sitesift Developers
// SPDX-License-Identifier: Apache-2.0

//! Excerpt generation: a bounded window of source text around the first
//! query match, with highlight markers.
//!
//! The match is located in normalized space (so "futbol" finds "Fútbol"),
//! then mapped back onto the original text via `NormalizedText`, so the
//! displayed excerpt keeps the source casing and accents. Highlighting is
//! a separate, stricter pass: every case-insensitive occurrence of the
//! literal query inside the window is wrapped in `<mark>` tags. An
//! accent-variant hit can therefore produce a window without any marker,
//! which renderers must tolerate.
//!
//! All window arithmetic is in characters, never bytes; a window edge can
//! not split a multi-byte character.

use regex::RegexBuilder;

use crate::utils::{normalize, NormalizedText};

/// Characters of context kept before the match.
const WINDOW_BEFORE: usize = 40;

/// Characters of context kept after the match.
const WINDOW_AFTER: usize = 60;

/// Length of the fallback excerpt when the query is not in the content.
const FALLBACK_LEN: usize = 120;

/// Highlight markers embedded in the excerpt. Renderers treat the excerpt
/// as pre-built markup; everything between markers is raw source text.
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Produce an excerpt of `content` around the first occurrence of `query`.
///
/// No occurrence: the first 120 characters, with `"..."` appended when the
/// content was longer. Otherwise: the window `[start - 40, end + 60)`
/// around the matched span, clamped to the content, with `"..."` affixed on
/// each clipped side and case-insensitive occurrences of the query wrapped
/// in highlight markers.
pub fn make_excerpt(content: &str, query: &str) -> String {
    let trimmed = query.trim();
    let normalized_query = normalize(trimmed);
    let normalized_content = NormalizedText::new(content);

    let Some((match_start, match_end)) = normalized_content.find(&normalized_query) else {
        return head_excerpt(content);
    };

    let total = content.chars().count();
    let start = match_start.saturating_sub(WINDOW_BEFORE);
    let end = (match_end + WINDOW_AFTER).min(total);

    let window: String = content.chars().skip(start).take(end - start).collect();

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str("...");
    }
    excerpt.push_str(&highlight(&window, trimmed));
    if end < total {
        excerpt.push_str("...");
    }
    excerpt
}

/// First `FALLBACK_LEN` characters of the content, marking truncation.
fn head_excerpt(content: &str) -> String {
    let mut head: String = content.chars().take(FALLBACK_LEN).collect();
    if content.chars().count() > FALLBACK_LEN {
        head.push_str("...");
    }
    head
}

/// Wrap every case-insensitive occurrence of the literal query in markers.
///
/// The query is escaped, so regex metacharacters in user input match
/// themselves. An unbuildable pattern leaves the window unhighlighted
/// rather than failing the search.
fn highlight(window: &str, query: &str) -> String {
    if query.is_empty() {
        return window.to_string();
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern
            .replace_all(window, |caps: &regex::Captures<'_>| {
                format!("{MARK_OPEN}{}{MARK_CLOSE}", &caps[0])
            })
            .into_owned(),
        Err(_) => window.to_string(),
    }
}
