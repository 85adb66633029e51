use dioxus::prelude::*;
use portfolio_core::Catalog;

use crate::components::{
    About, Contact, Hero, NavHeader, ProjectsSection, Skills, SocialSidebar, StarField,
};
use crate::context::get_catalog;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the catalog context, then composes the page
/// sections in order: star field background, navigation, hero, about,
/// skills, projects, contact, footer. One page, no routing.
#[component]
pub fn App() -> Element {
    let catalog: Signal<Catalog> = use_signal(get_catalog);

    // Provide catalog context to all child components
    use_context_provider(|| catalog);

    let owner = catalog.read().profile.name.clone();

    rsx! {
        style { {GLOBAL_STYLES} }

        main { class: "page",
            StarField {}
            NavHeader {}
            SocialSidebar {}

            Hero {}
            About {}
            Skills {}
            ProjectsSection {}
            Contact {}

            footer { class: "footer",
                p { "© 2025 {owner}. Tous droits réservés." }
            }
        }
    }
}
