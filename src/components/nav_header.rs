//! Navigation Header Component
//!
//! Fixed top bar with the owner monogram and anchor links to each section.

use dioxus::prelude::*;

use crate::context::use_catalog;

/// One section of the single page, in display order.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Section {
    Accueil,
    APropos,
    Competences,
    Projets,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Accueil,
        Section::APropos,
        Section::Competences,
        Section::Projets,
        Section::Contact,
    ];

    /// Link label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Accueil => "Accueil",
            Section::APropos => "À propos",
            Section::Competences => "Compétences",
            Section::Projets => "Projets",
            Section::Contact => "Contact",
        }
    }

    /// Anchor id of the target section element
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Accueil => "#accueil",
            Section::APropos => "#apropos",
            Section::Competences => "#competences",
            Section::Projets => "#projets",
            Section::Contact => "#contact",
        }
    }
}

/// Fixed navigation header with anchor links.
#[component]
pub fn NavHeader() -> Element {
    let catalog = use_catalog();
    let monogram = catalog.read().profile.monogram.clone();

    rsx! {
        nav { class: "nav-header",
            div { class: "nav-inner",
                div { class: "nav-monogram", "{monogram}" }
                div { class: "nav-links",
                    for section in Section::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "nav-link",
                            href: "{section.anchor()}",
                            "{section.label()}"
                        }
                    }
                }
            }
        }
    }
}
