//! Star Field Background Component
//!
//! Renders the decorative twinkling stars behind every section.

use dioxus::prelude::*;
use portfolio_core::starfield::{self, STAR_COUNT};

/// Fixed star field behind the page content.
///
/// The descriptors are drawn inside `use_hook`, which runs its initializer
/// exactly once per component lifetime: unrelated re-renders reuse the same
/// field instead of regenerating it.
#[component]
pub fn StarField() -> Element {
    let stars = use_hook(|| starfield::generate(STAR_COUNT));

    rsx! {
        div { class: "stars-background",
            for star in stars.iter() {
                div {
                    key: "{star.id}",
                    class: "star",
                    style: "width: {star.size}px; height: {star.size}px; \
                            top: {star.top_percent}%; left: {star.left_percent}%; \
                            animation-duration: {star.animation_duration_secs}s;",
                }
            }
        }
    }
}
