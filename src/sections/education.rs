use dioxus::prelude::*;
use portfolio_ui::SectionHeader;

use crate::components::{Reveal, SectionWrapper, Timeline};
use crate::context::use_portfolio;

#[component]
pub fn Education() -> Element {
    let portfolio = use_portfolio();
    let entries = portfolio.education_timeline();
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        SectionWrapper { id: "education".to_string(),
            div { class: "narrow-4xl",
                Reveal {
                    SectionHeader { icon: "\u{1F393}".to_string(), title: "Education".to_string() }
                }
                Reveal { delay_ms: 80,
                    Timeline { entries: entries }
                }
            }
        }
    }
}
