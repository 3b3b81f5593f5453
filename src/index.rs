//! Search index construction.
//!
//! Building an index is a single synchronous pass over the page
//! descriptors: resolve every content key for the requested language, join
//! what resolved, and attach the title and description. No network, no
//! partial state. The caller assigns the finished entry list in one move,
//! which is what keeps the "fully old or fully new index" guarantee.
//!
//! # Invariants
//!
//! 1. **ORDERED**: entries come out in descriptor declaration order, the
//!    same for every language.
//! 2. **DEGRADED, NEVER FAILED**: missing translation keys resolve to `""`
//!    and are skipped; construction itself cannot fail.
//! 3. **CONTENT_FALLBACK**: a page whose content keys all resolved empty
//!    gets its description as content, so a described page is always
//!    findable by body search.

use crate::store::TranslationStore;
use crate::types::{IndexEntry, PageDescriptor, SearchIndex};

/// Separator between resolved content-key values.
const CONTENT_JOIN: &str = ". ";

/// Build one index entry per descriptor, in declaration order.
pub fn build_entries(
    store: &TranslationStore,
    lang: &str,
    pages: &[PageDescriptor],
) -> Vec<IndexEntry> {
    pages.iter().map(|page| build_entry(store, lang, page)).collect()
}

/// Build a full index for one language.
pub fn build_index(
    store: &TranslationStore,
    lang: &str,
    pages: &[PageDescriptor],
) -> SearchIndex {
    SearchIndex {
        language: lang.to_string(),
        entries: build_entries(store, lang, pages),
    }
}

fn build_entry(store: &TranslationStore, lang: &str, page: &PageDescriptor) -> IndexEntry {
    let content = page
        .content_keys
        .iter()
        .map(|key| store.resolve(lang, key))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(CONTENT_JOIN);

    let title = store.resolve(lang, &format!("nav.{}", page.nav_key)).to_string();
    let description = store
        .resolve(lang, &format!("meta.{}Description", page.page_id))
        .to_string();

    let content = if content.is_empty() {
        description.clone()
    } else {
        content
    };

    IndexEntry {
        url: page.url.clone(),
        title,
        description,
        content,
    }
}
