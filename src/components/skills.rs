//! Skills Section Component
//!
//! Three-column grid of technology groups with devicon logos.

use dioxus::prelude::*;
use portfolio_core::SkillGroup;

use crate::context::use_catalog;
use crate::theme::colors;

#[component]
pub fn Skills() -> Element {
    let catalog = use_catalog();
    let groups = catalog.read().skill_groups.clone();

    rsx! {
        section { id: "competences", class: "skills",
            div { class: "section-inner",
                h2 { class: "section-title gradient-text", "Compétences Techniques" }
                div { class: "skills-grid",
                    for (i, group) in groups.iter().enumerate() {
                        SkillColumn {
                            key: "{group.name}",
                            group: group.clone(),
                            accent: colors::SKILL_ACCENTS[i % colors::SKILL_ACCENTS.len()],
                        }
                    }
                }
            }
        }
    }
}

/// One skills column: accent-colored heading plus an icon grid.
#[component]
fn SkillColumn(group: SkillGroup, accent: &'static str) -> Element {
    rsx! {
        div { class: "skill-column",
            h3 { class: "skill-column-title", style: "color: {accent};", "{group.name}" }
            div { class: "skill-icons",
                for skill in group.skills.iter() {
                    div { key: "{skill.name}", class: "skill-item",
                        img {
                            class: "skill-icon",
                            src: "{skill.icon_url()}",
                            alt: "{skill.name}",
                        }
                        span { class: "skill-name", "{skill.name}" }
                    }
                }
            }
        }
    }
}
