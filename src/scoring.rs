// Copyright 2024-present Sitesift Developers
// SPDX-License-Identifier: Apache-2.0

//! Zone weights behind result ranking.
//!
//! Three fixed zones, checked independently: a page can collect the title,
//! description, and content weights all at once. A page matching everywhere
//! scores 22; a content-only match scores 5, the floor for any returned
//! result (the page-level containment check guarantees at least one zone
//! matched).
//!
//! # Key Invariant: Zone Order
//!
//! `TITLE_WEIGHT > DESCRIPTION_WEIGHT > CONTENT_WEIGHT > 0`
//!
//! A title-only match must outrank a description-only match, which must
//! outrank a content-only match. The compile-time assertion below refuses
//! to build a crate where that stops being true.

use crate::types::IndexEntry;
use crate::utils::normalize;

/// Weight for a match inside the page title.
pub const TITLE_WEIGHT: u32 = 10;

/// Weight for a match inside the meta description.
pub const DESCRIPTION_WEIGHT: u32 = 7;

/// Weight for a match inside the page content.
pub const CONTENT_WEIGHT: u32 = 5;

// INVARIANT: ZONE_ORDER. Single-zone scores must rank title over
// description over content.
const _: () = {
    assert!(TITLE_WEIGHT > DESCRIPTION_WEIGHT);
    assert!(DESCRIPTION_WEIGHT > CONTENT_WEIGHT);
    assert!(CONTENT_WEIGHT > 0);
};

/// Score an entry against a normalized query.
///
/// Returns `None` when no zone contains the query; otherwise the sum of the
/// weights of every matching zone. The query must already be normalized;
/// the zone text is normalized here, on the fly, with the same pipeline.
pub fn score_entry(entry: &IndexEntry, normalized_query: &str) -> Option<u32> {
    let mut relevance = 0;

    if normalize(&entry.title).contains(normalized_query) {
        relevance += TITLE_WEIGHT;
    }
    if normalize(&entry.description).contains(normalized_query) {
        relevance += DESCRIPTION_WEIGHT;
    }
    if normalize(&entry.content).contains(normalized_query) {
        relevance += CONTENT_WEIGHT;
    }

    (relevance > 0).then_some(relevance)
}
