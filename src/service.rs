//! The search service: translations snapshot, current index, language.
//!
//! One `SearchService` per application context; no process-wide state. The
//! service owns a private snapshot of the translations and the index built
//! from them. The index lives behind an `Option`: `None` means "not built
//! or data unavailable", and every query against it politely returns
//! nothing. Rebuilds construct the new entry list completely before the
//! single assignment that publishes it, so an observer of the service sees
//! the fully-old or fully-new index and never a mix.

use tracing::debug;

use crate::index::build_index;
use crate::search;
use crate::store::TranslationStore;
use crate::types::{PageDescriptor, QueryResult, SearchIndex};

/// In-memory search over a fixed page set, for one language at a time.
#[derive(Debug)]
pub struct SearchService {
    translations: TranslationStore,
    pages: Vec<PageDescriptor>,
    index: Option<SearchIndex>,
}

impl SearchService {
    /// Create a service over a translations snapshot and page set.
    ///
    /// No index exists yet; call [`build_index`](Self::build_index) once the
    /// active language is known.
    pub fn new(translations: TranslationStore, pages: Vec<PageDescriptor>) -> Self {
        Self {
            translations,
            pages,
            index: None,
        }
    }

    /// Build the index for a language, replacing any previous index.
    ///
    /// When the snapshot has no data for the language (or no data at all),
    /// the index ends up absent and queries degrade to empty results. This
    /// is not an error; translations load upstream and may simply not have
    /// arrived.
    pub fn build_index(&mut self, lang: &str) -> Option<&SearchIndex> {
        if !self.translations.has_language(lang) {
            debug!(lang, "translations unavailable, dropping index");
            self.index = None;
            return None;
        }

        let index = build_index(&self.translations, lang, &self.pages);
        debug!(lang, entries = index.len(), "search index built");
        self.index = Some(index);
        self.index.as_ref()
    }

    /// Discard the current index and rebuild for a (new) language.
    pub fn reindex(&mut self, lang: &str) -> Option<&SearchIndex> {
        self.index = None;
        self.build_index(lang)
    }

    /// Query the current index.
    ///
    /// Returns an empty list when the index is absent, the query is too
    /// short, or nothing matches.
    pub fn search(&self, query: &str) -> Vec<QueryResult> {
        match &self.index {
            Some(index) => search::search(index, query),
            None => Vec::new(),
        }
    }

    /// The current index, if one has been built.
    pub fn index(&self) -> Option<&SearchIndex> {
        self.index.as_ref()
    }

    /// Language of the current index, if one has been built.
    pub fn current_language(&self) -> Option<&str> {
        self.index.as_ref().map(|i| i.language.as_str())
    }

    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    pub fn translations(&self) -> &TranslationStore {
        &self.translations
    }
}
