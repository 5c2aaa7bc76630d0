use dioxus::prelude::*;
use portfolio_core::Skill;
use portfolio_ui::{SectionHeader, SkillBadge};

use crate::components::{Reveal, SectionWrapper};
use crate::context::use_portfolio;

#[component]
pub fn Skills() -> Element {
    let portfolio = use_portfolio();
    let groups = portfolio.skills_by_category();

    rsx! {
        SectionWrapper { id: "skills".to_string(),
            div { class: "narrow-5xl",
                Reveal {
                    SectionHeader {
                        icon: "\u{1F527}".to_string(),
                        title: "Skills".to_string(),
                        description: "A practical toolkit focused on backend architecture, APIs, and shipping production-ready full-stack features.".to_string(),
                    }
                }

                Reveal { delay_ms: 80,
                    div { class: "skills-grid",
                        for group in groups {
                            div { key: "{group.category.label()}", class: "card skill-group",
                                h3 { class: "skill-group-title", "{group.category.label()}" }
                                hr { class: "separator" }
                                div { class: "chip-row",
                                    for skill in group.skills.iter() {
                                        SkillBadge { key: "{skill.name}", skill: Skill::clone(skill) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
