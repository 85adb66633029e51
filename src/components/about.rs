//! About Section Component
//!
//! Biography paragraphs next to a personal-information panel.

use dioxus::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn About() -> Element {
    let catalog = use_catalog();
    let profile = catalog.read().profile.clone();

    rsx! {
        section { id: "apropos", class: "about section-alt",
            div { class: "section-inner",
                h2 { class: "section-title gradient-text", "À propos de moi" }
                div { class: "about-grid",
                    div { class: "about-bio",
                        for (i, paragraph) in profile.about.iter().enumerate() {
                            p { key: "{i}", class: "about-paragraph", "{paragraph}" }
                        }
                    }
                    div { class: "info-panel",
                        h3 { class: "info-title", "Informations" }
                        InfoRow { label: "Localisation", value: profile.location.clone() }
                        InfoRow { label: "Email", value: profile.email.clone() }
                        InfoRow { label: "Téléphone", value: profile.phone.clone() }
                        InfoRow { label: "Formation", value: profile.education.clone() }
                    }
                }
            }
        }
    }
}

/// One label/value pair in the information panel.
#[component]
fn InfoRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "info-row",
            p { class: "info-label", "{label}" }
            p { class: "info-value", "{value}" }
        }
    }
}
