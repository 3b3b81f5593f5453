//! Property tests for normalization, scoring, and excerpt windowing.

use proptest::prelude::*;
use proptest::string::string_regex;

use sitesift::{
    make_excerpt, normalize, search, IndexEntry, SearchIndex, CONTENT_WEIGHT,
    DESCRIPTION_WEIGHT, TITLE_WEIGHT,
};

/// Words over the alphabet the site actually uses: Latin letters with a
/// sprinkling of Spanish accents.
fn word_strategy() -> impl Strategy<Value = String> {
    string_regex("[a-zA-ZáéíóúñÁÉÍÓÚÑü]{3,8}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..12).prop_map(|words| words.join(" "))
}

fn index_of(entries: Vec<IndexEntry>) -> SearchIndex {
    SearchIndex {
        language: "es".to_string(),
        entries,
    }
}

fn entry(url: &str, title: String, description: String, content: String) -> IndexEntry {
    IndexEntry {
        url: url.to_string(),
        title,
        description,
        content,
    }
}

proptest! {
    #[test]
    fn normalization_is_idempotent(text in text_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalization_erases_case(text in text_strategy()) {
        prop_assert_eq!(normalize(&text.to_uppercase()), normalize(&text.to_lowercase()));
    }

    #[test]
    fn normalized_text_is_lowercase_ascii_for_spanish_words(text in text_strategy()) {
        // The accented subset above strips down to plain ASCII letters.
        let normalized = normalize(&text);
        prop_assert!(normalized.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
    }

    #[test]
    fn sub_minimum_queries_never_return_results(
        content in text_strategy(),
        pad_left in 0usize..3,
        pad_right in 0usize..3,
        query_char in proptest::char::range('a', 'z'),
    ) {
        let index = index_of(vec![entry(
            "page.html",
            "Title".to_string(),
            "Description".to_string(),
            content,
        )]);
        let query = format!(
            "{}{}{}",
            " ".repeat(pad_left),
            query_char,
            " ".repeat(pad_right),
        );
        prop_assert!(search(&index, &query).is_empty());
        prop_assert!(search(&index, "").is_empty());
    }

    #[test]
    fn every_result_scores_within_zone_bounds(
        titles in prop::collection::vec(text_strategy(), 1..5),
        query in word_strategy(),
    ) {
        let entries = titles
            .iter()
            .enumerate()
            .map(|(i, title)| entry(
                &format!("page{i}.html"),
                title.clone(),
                format!("description {i}"),
                format!("content for page {i}"),
            ))
            .collect();
        let results = search(&index_of(entries), &query);

        let max = TITLE_WEIGHT + DESCRIPTION_WEIGHT + CONTENT_WEIGHT;
        for result in &results {
            prop_assert!(result.relevance >= CONTENT_WEIGHT);
            prop_assert!(result.relevance <= max);
        }
    }

    #[test]
    fn results_always_come_out_sorted(
        contents in prop::collection::vec(text_strategy(), 1..6),
        query in word_strategy(),
    ) {
        let entries = contents
            .iter()
            .enumerate()
            .map(|(i, content)| entry(
                &format!("page{i}.html"),
                format!("Page {i}"),
                String::new(),
                content.clone(),
            ))
            .collect();
        let results = search(&index_of(entries), &query);

        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn indexed_words_are_always_findable(words in prop::collection::vec(word_strategy(), 2..8)) {
        let content = words.join(" ");
        let index = index_of(vec![entry(
            "page.html",
            "Title".to_string(),
            "Description".to_string(),
            content,
        )]);

        for word in &words {
            if word.chars().count() >= 2 {
                let results = search(&index, word);
                prop_assert!(!results.is_empty(), "word {:?} not found", word);
            }
        }
    }

    #[test]
    fn excerpt_window_clips_exactly_where_expected(
        pre in 0usize..120,
        post in 0usize..120,
    ) {
        let content = format!("{}needle{}", "a".repeat(pre), "b".repeat(post));
        let excerpt = make_excerpt(&content, "needle");

        prop_assert_eq!(excerpt.starts_with("..."), pre > 40);
        prop_assert_eq!(excerpt.ends_with("..."), post > 60);
        prop_assert!(excerpt.contains("<mark>needle</mark>"));
    }

    #[test]
    fn excerpt_without_match_is_a_bounded_head(content in text_strategy()) {
        // Digits cannot appear in the generated text, so this never matches.
        let excerpt = make_excerpt(&content, "0000");
        let total = content.chars().count();
        if total <= 120 {
            prop_assert_eq!(excerpt, content);
        } else {
            prop_assert!(excerpt.ends_with("..."));
            prop_assert_eq!(excerpt.chars().count(), 123);
        }
    }
}
