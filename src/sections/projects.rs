use dioxus::prelude::*;
use portfolio_core::ProjectVariant;
use portfolio_ui::SectionHeader;

use crate::components::{ProjectCard, Reveal, SectionWrapper};
use crate::context::use_portfolio;

/// Reveal delay of the n-th compact card
fn stagger_ms(index: usize) -> u32 {
    140 + index as u32 * 60
}

/// Featured project on top, the rest in a staggered grid
#[component]
pub fn Projects() -> Element {
    let portfolio = use_portfolio();
    let (featured, others) = portfolio.featured_split();
    let featured = featured.cloned();
    let others = others.to_vec();

    rsx! {
        SectionWrapper { id: "projects".to_string(),
            div { class: "narrow-7xl",
                Reveal {
                    SectionHeader {
                        icon: "</>".to_string(),
                        title: "Projects".to_string(),
                        description: "Full-stack systems with thoughtful APIs, data design, and clean user experiences.".to_string(),
                    }
                }

                div { class: "projects-stack",
                    if let Some(project) = featured {
                        Reveal { delay_ms: 80,
                            div { class: "featured-glow",
                                ProjectCard { project: project, variant: ProjectVariant::Featured }
                            }
                        }
                    }

                    div { class: "projects-grid",
                        for (index, project) in others.into_iter().enumerate() {
                            Reveal { key: "{project.id}", delay_ms: stagger_ms(index),
                                ProjectCard { project: project, variant: ProjectVariant::Compact }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_cards_stagger_by_sixty() {
        assert_eq!(stagger_ms(0), 140);
        assert_eq!(stagger_ms(1), 200);
        assert_eq!(stagger_ms(2), 260);
    }
}
