use dioxus::prelude::*;
use portfolio_ui::SectionHeader;

use crate::components::{Reveal, SectionWrapper};
use crate::context::use_portfolio;

const FOCUS_AREAS: &[(&str, &str)] = &[
    ("APIs", "RESTful design, clear contracts, predictable responses"),
    ("Systems", "Scalable architecture, resilient services, clean data models"),
];

#[component]
pub fn About() -> Element {
    let portfolio = use_portfolio();
    let personal = &portfolio.personal;

    rsx! {
        SectionWrapper { id: "about".to_string(),
            div { class: "narrow-6xl",
                Reveal {
                    SectionHeader {
                        icon: "\u{1F464}".to_string(),
                        title: "About".to_string(),
                        description: "Full-stack engineer with a focus on clean APIs, solid data models, and UX that feels effortless.".to_string(),
                    }
                }

                div { class: "about-grid",
                    Reveal { delay_ms: 80,
                        div { class: "about-text",
                            for (index, paragraph) in personal.bio.split("\n\n").enumerate() {
                                p { key: "{index}", "{paragraph}" }
                            }
                        }
                    }

                    Reveal { delay_ms: 140,
                        div { class: "card focus-card",
                            h3 { class: "card-title", "Focus Areas" }
                            for (title, text) in FOCUS_AREAS.iter() {
                                div { key: "{title}", class: "focus-item",
                                    h4 { "{title}" }
                                    p { "{text}" }
                                }
                            }
                            div { class: "focus-item location",
                                h4 { "Location" }
                                p { "{personal.location}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
