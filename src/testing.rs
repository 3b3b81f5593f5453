//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It holds
//! the canonical two-language store and page set so individual tests don't
//! each grow their own slightly different fixture.

#![doc(hidden)]

use serde_json::json;

use crate::store::TranslationStore;
use crate::types::{IndexEntry, PageDescriptor};

/// A two-language translation snapshot covering three pages.
pub fn sample_store() -> TranslationStore {
    TranslationStore::from_value(json!({
        "es": {
            "nav": {
                "home": "Inicio",
                "about": "Sobre mí",
                "projects": "Proyectos"
            },
            "meta": {
                "homeDescription": "Portafolio personal",
                "aboutDescription": "Trayectoria profesional",
                "projectsDescription": "Proyectos de software"
            },
            "home": {
                "name": "Juan Pérez",
                "title": "Desarrollador de software",
                "intro": "Bienvenido a mi página"
            },
            "about": {
                "professionalDesc": "Ingeniero senior con experiencia en la nube"
            },
            "projects": {
                "project1": {
                    "name": "Motor de búsqueda",
                    "description": "Búsqueda en memoria con resaltado",
                    "skills": "Rust. Sistemas distribuidos"
                }
            }
        },
        "en": {
            "nav": {
                "home": "Home",
                "about": "About Me",
                "projects": "Projects"
            },
            "meta": {
                "homeDescription": "Personal portfolio",
                "aboutDescription": "Professional background",
                "projectsDescription": "Software projects"
            },
            "home": {
                "name": "Juan Pérez",
                "title": "Software developer",
                "intro": "Welcome to my page"
            },
            "about": {
                "professionalDesc": "Senior engineer with cloud experience"
            },
            "projects": {
                "project1": {
                    "name": "Search engine",
                    "description": "In-memory search with highlighting",
                    "skills": "Rust. Distributed systems"
                }
            }
        }
    }))
    .expect("sample translations are a valid object")
}

/// The three descriptors the sample store is written against.
pub fn sample_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor::new(
            "index.html",
            "home",
            "home",
            &["home.name", "home.title", "home.intro"],
        ),
        PageDescriptor::new("about.html", "about", "about", &["about.professionalDesc"]),
        PageDescriptor::new(
            "projects.html",
            "projects",
            "projects",
            &[
                "projects.project1.name",
                "projects.project1.description",
                "projects.project1.skills",
            ],
        ),
    ]
}

/// Build an index entry directly, bypassing translation resolution.
pub fn make_entry(url: &str, title: &str, description: &str, content: &str) -> IndexEntry {
    IndexEntry {
        url: url.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
    }
}
