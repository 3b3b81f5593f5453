use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitesift::{default_pages, PageDescriptor, SearchService, TranslationStore};

mod cli;
use cli::{print_results, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Index {
            translations,
            lang,
            pages,
        } => run_index(&translations, &lang, pages),
        Commands::Search {
            translations,
            lang,
            pages,
            limit,
            json,
            query,
        } => run_search(&translations, &lang, pages, limit, json, &query),
    }
}

fn run_index(translations: &Path, lang: &str, pages: Option<PathBuf>) -> Result<()> {
    let mut service = load_service(translations, pages)?;
    let Some(index) = service.build_index(lang) else {
        bail!("no translations loaded for language '{lang}'");
    };
    println!("{}", serde_json::to_string_pretty(index)?);
    Ok(())
}

fn run_search(
    translations: &Path,
    lang: &str,
    pages: Option<PathBuf>,
    limit: Option<usize>,
    json: bool,
    query: &str,
) -> Result<()> {
    let mut service = load_service(translations, pages)?;
    if service.build_index(lang).is_none() {
        bail!("no translations loaded for language '{lang}'");
    }

    let mut results = service.search(query);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(query, &results);
    }
    Ok(())
}

fn load_service(translations: &Path, pages: Option<PathBuf>) -> Result<SearchService> {
    let file = fs::File::open(translations)
        .with_context(|| format!("opening {}", translations.display()))?;
    let store = TranslationStore::from_reader(file)
        .with_context(|| format!("loading {}", translations.display()))?;
    Ok(SearchService::new(store, load_pages(pages)?))
}

fn load_pages(path: Option<PathBuf>) -> Result<Vec<PageDescriptor>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(default_pages()),
    }
}
