//! Project Card Component with Modal
//!
//! One card per project record. Clicking the card opens the "cahier des
//! charges" modal; clicking the overlay background, the × control, or the
//! footer button closes it. Clicks inside the panel are contained and never
//! reach the overlay handler.
//!
//! All visibility decisions go through [`ModalState`] so the UI and the
//! tested state machine cannot drift apart.

use dioxus::prelude::*;
use portfolio_core::{Activation, ModalState, ProjectDetail, ProjectRecord};

use crate::context::use_catalog;

/// Grid of all project cards.
#[component]
pub fn ProjectsSection() -> Element {
    let catalog = use_catalog();
    let projects = catalog.read().projects.clone();

    rsx! {
        section { id: "projets", class: "projects section-alt",
            div { class: "section-inner",
                h2 { class: "section-title gradient-text", "Mes Projets" }
                div { class: "projects-grid",
                    for project in projects.iter() {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}

/// One project card owning its modal controller.
#[component]
pub fn ProjectCard(project: ProjectRecord) -> Element {
    // Exactly one ModalState per rendered record, owned by this instance.
    let mut modal = use_signal(ModalState::new);
    let is_open = modal.read().is_open();

    rsx! {
        div {
            class: "project-card",
            onclick: move |_| {
                modal.write().activate(Activation::Card);
            },

            h3 { class: "card-title", "{project.title}" }
            p { class: "card-description", "{project.description}" }

            div { class: "card-logos",
                for (i, logo) in project.logos.iter().enumerate() {
                    img { key: "{i}", class: "card-logo", src: "{logo}", alt: "tech" }
                }
            }

            div { class: "card-tags",
                for tech in project.technologies.iter() {
                    span { key: "{tech}", class: "tag", "{tech}" }
                }
            }

            button { class: "card-more", "Cahier des charges →" }
        }

        if is_open {
            ProjectModal {
                project: project.clone(),
                on_activate: move |activation| {
                    modal.write().activate(activation);
                },
            }
        }
    }
}

/// Detail overlay for one project.
///
/// Reports every activation back to the owning card's controller instead of
/// mutating any state itself.
#[component]
pub fn ProjectModal(
    /// Record whose detail view is shown
    project: ProjectRecord,
    /// Callback delivering overlay/close/panel activations
    on_activate: EventHandler<Activation>,
) -> Element {
    let detail = ProjectDetail::from_record(&project);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_activate.call(Activation::OverlayBackground),

            div {
                class: "project-modal",
                onclick: move |e| {
                    // Containment: the panel consumes the click.
                    e.stop_propagation();
                    on_activate.call(Activation::PanelInterior);
                },

                header { class: "modal-header",
                    h2 { class: "modal-title gradient-text", "{detail.title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_activate.call(Activation::Close),
                        "×"
                    }
                }

                div { class: "modal-body",
                    section { class: "modal-section",
                        h4 { class: "modal-section-title", "◎ Objectifs du projet" }
                        p { class: "modal-objectives", "{detail.objectives}" }
                    }

                    section { class: "modal-section",
                        h4 { class: "modal-section-title", "⚙ Stack Technique" }
                        div { class: "card-tags",
                            for tech in detail.technologies.iter() {
                                span { key: "{tech}", class: "tag", "{tech}" }
                            }
                        }
                    }

                    section { class: "modal-section",
                        h4 { class: "modal-section-title", "☰ Cahier des Charges" }
                        ul { class: "modal-requirements",
                            for (i, item) in detail.requirements.iter().enumerate() {
                                li { key: "{i}", "{item}" }
                            }
                        }
                    }
                }

                div { class: "modal-footer",
                    button {
                        class: "btn-primary",
                        onclick: move |_| on_activate.call(Activation::Close),
                        "Fermer"
                    }
                }
            }
        }
    }
}
