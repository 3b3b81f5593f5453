//! Translation storage and dot-path resolution.
//!
//! The store holds one nested translation tree per language, parsed from a
//! single JSON document shaped like `{"es": {...}, "en": {...}}`. Trees are
//! immutable once loaded; a reload replaces the whole snapshot.
//!
//! Resolution never fails. A dot-path that runs off the tree, hits a
//! non-string leaf, or names an unknown language resolves to `""`, and the
//! caller decides what an empty resolution means. Loading is the only
//! fallible operation here.

use std::collections::HashMap;
use std::io::Read;

use serde_json::Value;
use thiserror::Error;

/// Why a translation source could not be loaded.
///
/// These never cross the query path; a store that failed to load simply
/// never exists, and downstream search degrades to empty results.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The source could not be read at all.
    #[error("failed to read translation source: {0}")]
    Io(#[from] std::io::Error),
    /// The source was read but is not valid JSON.
    #[error("failed to parse translation source: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed, but the top level is not `{lang: tree}`.
    #[error("translation source root must be an object keyed by language code")]
    NotAnObject,
}

/// Per-language nested translation trees.
///
/// Cloning is a deep copy of the snapshot; callers that want a private,
/// stable view of the translations (the search service does) clone once at
/// construction and never look back.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    languages: HashMap<String, Value>,
}

impl TranslationStore {
    /// An empty store: no languages, every resolution is `""`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from an already-parsed JSON document.
    pub fn from_value(document: Value) -> Result<Self, StoreError> {
        match document {
            Value::Object(map) => Ok(Self {
                languages: map.into_iter().collect(),
            }),
            _ => Err(StoreError::NotAnObject),
        }
    }

    /// Parse a JSON document from a reader (a file, usually).
    pub fn from_reader(mut reader: impl Read) -> Result<Self, StoreError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        raw.parse()
    }

    /// The translation tree for a language, if loaded.
    pub fn language(&self, lang: &str) -> Option<&Value> {
        self.languages.get(lang)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Loaded language codes, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Resolve a dot-path like `"nav.home"` in the given language.
    ///
    /// Returns `""` when the language is unknown, any path segment is
    /// missing, or the leaf is not a string. Traversal degrades, it never
    /// errors.
    pub fn resolve<'a>(&'a self, lang: &str, path: &str) -> &'a str {
        self.language(lang)
            .map_or("", |tree| resolve_path(tree, path))
    }
}

impl std::str::FromStr for TranslationStore {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::from_value(serde_json::from_str(raw)?)
    }
}

/// Walk a dot-path through a JSON tree, yielding the string leaf or `""`.
pub fn resolve_path<'a>(tree: &'a Value, path: &str) -> &'a str {
    let mut node = tree;
    for segment in path.split('.') {
        match node.get(segment) {
            Some(child) => node = child,
            None => return "",
        }
    }
    node.as_str().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> TranslationStore {
        TranslationStore::from_value(json!({
            "es": {
                "nav": { "home": "Inicio" },
                "meta": { "homeDescription": "Página principal" }
            },
            "en": {
                "nav": { "home": "Home" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn resolves_nested_paths() {
        let store = store();
        assert_eq!(store.resolve("es", "nav.home"), "Inicio");
        assert_eq!(store.resolve("en", "nav.home"), "Home");
        assert_eq!(store.resolve("es", "meta.homeDescription"), "Página principal");
    }

    #[test]
    fn missing_segment_resolves_empty() {
        // {a: {b: {}}} with path "a.b.c" yields "", not an error
        let tree = json!({ "a": { "b": {} } });
        assert_eq!(resolve_path(&tree, "a.b.c"), "");
        assert_eq!(resolve_path(&tree, "a.x"), "");
        assert_eq!(resolve_path(&tree, "x"), "");
    }

    #[test]
    fn non_string_leaf_resolves_empty() {
        let tree = json!({ "a": { "b": 7 }, "c": ["x"], "d": { "e": {} } });
        assert_eq!(resolve_path(&tree, "a.b"), "");
        assert_eq!(resolve_path(&tree, "c"), "");
        assert_eq!(resolve_path(&tree, "d.e"), "");
    }

    #[test]
    fn unknown_language_resolves_empty() {
        assert_eq!(store().resolve("fr", "nav.home"), "");
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(matches!(
            TranslationStore::from_value(json!(["es"])),
            Err(StoreError::NotAnObject)
        ));
        assert!(matches!(
            "42".parse::<TranslationStore>(),
            Err(StoreError::NotAnObject)
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            "{not json".parse::<TranslationStore>(),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn empty_document_is_an_empty_store() {
        let store = "{}".parse::<TranslationStore>().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.resolve("es", "nav.home"), "");
    }

    #[test]
    fn reads_from_a_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"es": {{"nav": {{"home": "Inicio"}}}}}}"#).unwrap();

        let store = TranslationStore::from_reader(std::fs::File::open(file.path()).unwrap())
            .unwrap();
        assert_eq!(store.resolve("es", "nav.home"), "Inicio");
    }
}
