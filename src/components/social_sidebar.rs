//! Social Sidebar Component
//!
//! Vertical rail of external links on the right edge of the page.

use dioxus::prelude::*;

use crate::context::use_catalog;

/// Fixed sidebar with GitHub, LinkedIn, and phone links.
#[component]
pub fn SocialSidebar() -> Element {
    let catalog = use_catalog();
    let profile = catalog.read().profile.clone();

    rsx! {
        div { class: "social-sidebar",
            div { class: "sidebar-rule" }
            a {
                class: "social-link",
                href: "{profile.github_url}",
                target: "_blank",
                rel: "noreferrer",
                title: "GitHub",
                "GitHub"
            }
            a {
                class: "social-link",
                href: "{profile.linkedin_url}",
                target: "_blank",
                rel: "noreferrer",
                title: "LinkedIn",
                "LinkedIn"
            }
            a {
                class: "social-link",
                href: "{profile.tel()}",
                title: "Téléphone",
                "✆"
            }
            div { class: "sidebar-rule" }
        }
    }
}
