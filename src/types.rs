// Copyright 2024-present Sitesift Developers
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a site search index.
//!
//! These types define how page configuration, index records, and query
//! results fit together. Everything here serializes as camelCase JSON
//! because both ends of the pipeline speak JSON: translation trees come in,
//! ranked results go out to whatever renders them.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchIndex**: one entry per `PageDescriptor`, in declaration order.
//!   The index is either fully absent or fully consistent for exactly one
//!   language. Nothing observes a half-built or mixed-language index.
//!
//! - **IndexEntry**: `url` is unique per entry; `content` is non-empty
//!   whenever the page's description resolved to something.

use serde::{Deserialize, Serialize};

/// Static configuration tying a page to the translation keys that make up
/// its searchable text.
///
/// Descriptors are fixed at configuration time and never mutated. The index
/// builder walks them in declaration order, which is what makes result
/// ordering deterministic across languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// Where a result for this page points, e.g. `"about.html"`.
    pub url: String,
    /// Stem for the meta description key: `meta.<page_id>Description`.
    pub page_id: String,
    /// Stem for the navigation title key: `nav.<nav_key>`.
    pub nav_key: String,
    /// Dot-paths resolved against the translation tree, in order.
    pub content_keys: Vec<String>,
}

impl PageDescriptor {
    /// Convenience constructor for configuration code and tests.
    pub fn new(
        url: impl Into<String>,
        page_id: impl Into<String>,
        nav_key: impl Into<String>,
        content_keys: &[&str],
    ) -> Self {
        Self {
            url: url.into(),
            page_id: page_id.into(),
            nav_key: nav_key.into(),
            content_keys: content_keys.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// One searchable record, built fresh for a single language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub url: String,
    /// Resolved from `nav.<nav_key>`.
    pub title: String,
    /// Resolved from `meta.<page_id>Description`.
    pub description: String,
    /// Non-empty content-key resolutions joined with `". "`; falls back to
    /// the description when every content key resolved empty.
    pub content: String,
}

/// The complete in-memory index for one language.
///
/// Rebuilt wholesale on every language change; never patched in place. A
/// query running concurrently with a rebuild sees either the old index or
/// the new one, because the owner swaps the whole value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    /// Language code this index was built for, e.g. `"es"`.
    pub language: String,
    pub entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What callers see for each ranked hit. Ephemeral, produced per query.
///
/// `excerpt` carries embedded `<mark>` highlight markers and is the only
/// field meant to be rendered as-is; `title`, `description`, and `url` are
/// raw source text the renderer must escape itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub url: String,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    /// Additive zone score: title 10, description 7, content 5.
    pub relevance: u32,
}

/// The stock page mapping for the site this crate grew up with: five pages,
/// each naming the translation keys that constitute its visible text.
///
/// Library users supply their own descriptors; the CLI falls back to these
/// when no `--pages` file is given.
pub fn default_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor::new(
            "index.html",
            "home",
            "home",
            &["home.name", "home.title", "home.intro"],
        ),
        PageDescriptor::new(
            "about.html",
            "about",
            "about",
            &[
                "about.professionalDesc",
                "about.experience.job1.title",
                "about.experience.job1.description",
                "about.experience.job2.title",
                "about.experience.job2.description",
                "about.experience.job3.title",
                "about.experience.job3.description",
                "about.experience.job4.title",
                "about.experience.job4.description",
                "about.education.master.degree",
                "about.education.master.description",
                "about.education.bachelor.degree",
                "about.education.bachelor.description",
                "about.references.ref1.name",
                "about.references.ref1.company",
            ],
        ),
        PageDescriptor::new(
            "projects.html",
            "projects",
            "projects",
            &[
                "projects.project1.name",
                "projects.project1.description",
                "projects.project1.skills",
                "projects.project2.name",
                "projects.project2.description",
                "projects.project2.skills",
                "projects.project3.name",
                "projects.project3.description",
                "projects.project3.skills",
                "projects.project4.name",
                "projects.project4.description",
                "projects.project4.skills",
                "projects.project5.name",
                "projects.project5.description",
                "projects.project5.skills",
                "projects.project6.name",
                "projects.project6.description",
                "projects.project6.skills",
                "projects.project7.name",
                "projects.project7.description",
                "projects.project7.skills",
            ],
        ),
        PageDescriptor::new(
            "hobbies.html",
            "hobbies",
            "hobbies",
            &[
                "hobbies.title",
                "hobbies.intro",
                "hobbies.webDev",
                "hobbies.webDevDesc",
                "hobbies.football",
                "hobbies.footballDesc",
                "hobbies.music",
                "hobbies.musicDesc",
                "hobbies.cars",
                "hobbies.carsDesc",
                "hobbies.peace",
                "hobbies.peaceDesc",
                "hobbies.problemSolving",
                "hobbies.problemSolvingDesc",
            ],
        ),
        PageDescriptor::new(
            "contact.html",
            "contact",
            "contact",
            &[
                "contact.title",
                "contact.socialMedia",
                "contact.email",
                "contact.phone",
                "contact.linkedin",
                "contact.github",
            ],
        ),
    ]
}
