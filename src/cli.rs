// Copyright 2024-present Sitesift Developers
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesift command-line interface.
//!
//! Two subcommands: `index` to build and dump an index, `search` to query
//! one. Both load the same translations document the site itself ships;
//! the page mapping defaults to the built-in site configuration and can be
//! swapped out with `--pages`.
//!
//! Human-readable output renders the excerpt's `<mark>` markers as ANSI
//! emphasis when stdout is a terminal, and strips them when piped.
//! Respects `NO_COLOR`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sitesift::{QueryResult, MARK_CLOSE, MARK_OPEN};

#[derive(Parser)]
#[command(
    name = "sitesift",
    about = "In-memory search over translated site content",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index for one language and print it as JSON
    Index {
        /// Translations JSON document, shaped {lang: tree}
        #[arg(short, long)]
        translations: PathBuf,

        /// Language code to index, e.g. "es"
        #[arg(short, long)]
        lang: String,

        /// Page descriptor JSON file (defaults to the built-in site mapping)
        #[arg(short, long)]
        pages: Option<PathBuf>,
    },

    /// Query the index and print ranked results
    Search {
        /// Translations JSON document, shaped {lang: tree}
        #[arg(short, long)]
        translations: PathBuf,

        /// Language code to search in, e.g. "es"
        #[arg(short, long)]
        lang: String,

        /// Page descriptor JSON file (defaults to the built-in site mapping)
        #[arg(short, long)]
        pages: Option<PathBuf>,

        /// Print at most this many results
        #[arg(long)]
        limit: Option<usize>,

        /// Emit results as raw JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// The query text
        query: String,
    },
}

/// Should output use ANSI colors? TTY only, and `NO_COLOR` wins.
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Turn embedded highlight markers into terminal emphasis, or strip them.
pub fn render_excerpt(excerpt: &str, color: bool) -> String {
    if color {
        excerpt
            .replace(MARK_OPEN, "\x1b[1;33m")
            .replace(MARK_CLOSE, "\x1b[0m")
    } else {
        excerpt.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
    }
}

/// Print ranked results the way a human wants to read them.
pub fn print_results(query: &str, results: &[QueryResult]) {
    if results.is_empty() {
        println!("no results for \"{query}\"");
        return;
    }

    let color = use_color();
    println!(
        "{} result{} for \"{query}\"",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );
    for (rank, result) in results.iter().enumerate() {
        println!();
        println!(
            "{}. {} ({})  relevance {}",
            rank + 1,
            result.title,
            result.url,
            result.relevance
        );
        println!("   {}", render_excerpt(&result.excerpt, color));
    }
}
