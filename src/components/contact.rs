//! Contact Section Component
//!
//! Email and phone cards plus external profile links.

use dioxus::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn Contact() -> Element {
    let catalog = use_catalog();
    let profile = catalog.read().profile.clone();

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "section-inner contact-inner",
                h2 { class: "section-title gradient-text", "Contactez-moi" }
                p { class: "contact-lead",
                    "Vous avez un projet en tête ? N'hésitez pas à me contacter !"
                }

                a { class: "contact-card", href: "{profile.mailto()}",
                    p { class: "contact-label", "Email" }
                    p { class: "contact-value", "{profile.email}" }
                }

                a { class: "contact-card", href: "{profile.tel()}",
                    p { class: "contact-label", "Téléphone" }
                    p { class: "contact-value", "{profile.phone}" }
                }

                div { class: "contact-socials",
                    a {
                        class: "contact-social",
                        href: "{profile.github_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "GitHub"
                    }
                    a {
                        class: "contact-social",
                        href: "{profile.linkedin_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "LinkedIn"
                    }
                }
            }
        }
    }
}
