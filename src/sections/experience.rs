use dioxus::prelude::*;
use portfolio_ui::SectionHeader;

use crate::components::{Reveal, SectionWrapper, Timeline};
use crate::context::use_portfolio;

#[component]
pub fn Experience() -> Element {
    let portfolio = use_portfolio();
    let entries = portfolio.experience_timeline();

    rsx! {
        SectionWrapper { id: "experience".to_string(),
            div { class: "narrow-5xl",
                Reveal {
                    SectionHeader {
                        icon: "\u{1F4BC}".to_string(),
                        title: "Experience".to_string(),
                        description: "Building production systems with Spring Boot, React, and modern backend patterns.".to_string(),
                    }
                }

                Reveal { delay_ms: 80,
                    div { class: "timeline-wrap",
                        Timeline { entries: entries }
                    }
                }
            }
        }
    }
}
