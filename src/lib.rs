//! In-memory, accent-insensitive search over translated site content.
//!
//! This crate indexes a fixed set of pages whose visible text lives in a
//! per-language translation tree, then answers free-text queries with
//! ranked, excerpted results. The index is tiny and rebuilt wholesale on
//! every language change; there is no persistence and no background work.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐     ┌────────────┐     ┌───────────┐     ┌────────────┐
//! │ store.rs  │────▶│  index.rs  │────▶│ search.rs │────▶│ excerpt.rs │
//! │(languages,│     │(build_index│     │ (search,  │     │(windowing, │
//! │ dot-paths)│     │ per page)  │     │  scoring) │     │ <mark>)    │
//! └───────────┘     └────────────┘     └───────────┘     └────────────┘
//!        │                  ▲                 │
//!        ▼                  │                 ▼
//! ┌───────────┐     ┌──────────────────────────────┐
//! │  i18n.rs  │     │         service.rs           │
//! │ (switcher,│     │ SearchService: snapshot +    │
//! │  observer)│     │ index + current language     │
//! └───────────┘     └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sitesift::{SearchService, TranslationStore, PageDescriptor};
//!
//! let store = TranslationStore::from_value(serde_json::json!({
//!     "en": {
//!         "nav": { "about": "About Me" },
//!         "meta": { "aboutDescription": "Bio" },
//!         "about": { "professionalDesc": "Senior engineer with cloud experience" }
//!     }
//! })).unwrap();
//!
//! let pages = vec![PageDescriptor::new(
//!     "about.html", "about", "about", &["about.professionalDesc"],
//! )];
//!
//! let mut service = SearchService::new(store, pages);
//! service.build_index("en");
//!
//! let results = service.search("cloud");
//! assert_eq!(results[0].url, "about.html");
//! assert!(results[0].excerpt.contains("<mark>cloud</mark>"));
//! ```

// Module declarations
mod excerpt;
mod i18n;
mod index;
mod scoring;
mod search;
mod service;
mod store;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use excerpt::{make_excerpt, MARK_CLOSE, MARK_OPEN};
pub use i18n::I18n;
pub use index::{build_entries, build_index};
pub use scoring::{score_entry, CONTENT_WEIGHT, DESCRIPTION_WEIGHT, TITLE_WEIGHT};
pub use search::{search, MIN_QUERY_LEN};
pub use service::SearchService;
pub use store::{resolve_path, StoreError, TranslationStore};
pub use types::{default_pages, IndexEntry, PageDescriptor, QueryResult, SearchIndex};
pub use utils::{normalize, NormalizedText};
