//! Hero Section Component
//!
//! Greeting, headline, tagline, call-to-action links, and the portrait.

use dioxus::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn Hero() -> Element {
    let catalog = use_catalog();
    let profile = catalog.read().profile.clone();
    let first_name = profile.first_name().to_string();

    rsx! {
        section { id: "accueil", class: "hero",
            div { class: "hero-inner",
                div { class: "hero-text",
                    h1 { class: "hero-title",
                        "Salut, je suis "
                        span { class: "gradient-text", "{first_name}" }
                    }
                    p { class: "hero-headline", "{profile.headline}" }
                    p { class: "hero-tagline", "{profile.tagline}" }
                    div { class: "hero-actions",
                        a { class: "btn-primary", href: "#projets", "Voir mes projets" }
                        a { class: "btn-outline", href: "#contact", "Me contacter" }
                    }
                }
                div { class: "hero-portrait",
                    div { class: "portrait-glow" }
                    img {
                        class: "portrait-image",
                        src: "{profile.portrait_url}",
                        alt: "{profile.name}",
                    }
                }
            }
        }
    }
}
