//! Timeline Component
//!
//! Vertical spine with a node and a card per entry. Used for both work
//! experience and education.

use dioxus::prelude::*;
use portfolio_core::TimelineEntry;
use portfolio_ui::TechChip;

#[component]
pub fn Timeline(entries: Vec<TimelineEntry>) -> Element {
    rsx! {
        div { class: "timeline",
            div { class: "timeline-spine", "aria-hidden": "true" }
            for entry in entries {
                div { key: "{entry.id}", class: "timeline-item",
                    div { class: "timeline-node", "aria-hidden": "true",
                        div { class: "timeline-node-dot" }
                    }
                    div { class: "timeline-card",
                        div { class: "timeline-card-header",
                            div {
                                h3 { class: "timeline-title", "{entry.title}" }
                                p { class: "timeline-subtitle", "{entry.subtitle}" }
                            }
                            p { class: "timeline-period", "{entry.period}" }
                        }

                        if !entry.description.is_empty() {
                            ul { class: "timeline-description",
                                for (index, line) in entry.description.iter().enumerate() {
                                    li { key: "{index}",
                                        span { class: "bullet", "aria-hidden": "true", "\u{2022}" }
                                        span { "{line}" }
                                    }
                                }
                            }
                        }

                        if !entry.technologies.is_empty() {
                            hr { class: "separator" }
                            div { class: "chip-row",
                                for tech in entry.technologies.iter() {
                                    TechChip { key: "{tech}", tech: tech.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
