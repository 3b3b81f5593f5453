//! Language switching and key lookup.
//!
//! This is the data-source side of the system: it owns the translation
//! store, tracks the active language, and tells one interested party when
//! the language changes. Rendering, element walking, and language
//! detection belong to the presentation layer, not here.
//!
//! Lookup echoes the key back when a translation is missing. A visible
//! `"nav.hom"` on screen beats an invisible empty string, and the debug log
//! says which keys need filling in.

use tracing::debug;

use crate::store::TranslationStore;

/// Callback invoked synchronously with the new language code after every
/// accepted language change.
type LanguageObserver = Box<dyn FnMut(&str) + Send>;

/// Translation lookup plus language switching with a change observer.
///
/// The observer slot replaces ambient "is the search hook defined?"
/// probing: whoever needs to react to a language change (typically by
/// reindexing a [`SearchService`](crate::SearchService)) registers exactly
/// once, explicitly.
pub struct I18n {
    store: TranslationStore,
    current: String,
    on_language_change: Option<LanguageObserver>,
}

impl I18n {
    pub fn new(store: TranslationStore, default_lang: impl Into<String>) -> Self {
        Self {
            store,
            current: default_lang.into(),
            on_language_change: None,
        }
    }

    /// Look up a dot-path key in the active language.
    ///
    /// Missing or empty translations come back as the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.translate_in(key, &self.current)
    }

    /// Look up a dot-path key in an explicit language.
    pub fn translate_in(&self, key: &str, lang: &str) -> String {
        let value = self.store.resolve(lang, key);
        if value.is_empty() {
            debug!(key, lang, "missing translation, echoing key");
            key.to_string()
        } else {
            value.to_string()
        }
    }

    /// Switch the active language.
    ///
    /// Returns `false` (and changes nothing, fires nothing) when the store
    /// has no data for the language. Otherwise switches and synchronously
    /// invokes the registered observer.
    pub fn set_language(&mut self, lang: &str) -> bool {
        if !self.store.has_language(lang) {
            debug!(lang, "ignoring switch to unavailable language");
            return false;
        }
        self.current = lang.to_string();
        if let Some(observer) = self.on_language_change.as_mut() {
            observer(lang);
        }
        true
    }

    /// Register the language-change observer, replacing any previous one.
    pub fn on_language_change(&mut self, observer: impl FnMut(&str) + Send + 'static) {
        self.on_language_change = Some(Box::new(observer));
    }

    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("observer", &self.on_language_change.is_some())
            .finish_non_exhaustive()
    }
}
