//! Project Card Component
//!
//! Two layouts for a project:
//! - Featured: wide card with the long description, a highlights panel and
//!   the links beside the chips
//! - Compact: grid card with a short highlights list and the links in a
//!   footer

use dioxus::prelude::*;
use portfolio_core::{Project, ProjectVariant};
use portfolio_ui::{ButtonSize, ButtonVariant, CategoryBadge, LinkButton, OverflowChip, TechChip};

/// Project Card
///
/// # Example
///
/// ```rust,ignore
/// let (featured, rest) = portfolio.featured_split();
/// rsx! {
///     if let Some(project) = featured {
///         ProjectCard { project: project.clone(), variant: ProjectVariant::Featured }
///     }
///     for project in rest {
///         ProjectCard { key: "{project.id}", project: project.clone() }
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    project: Project,
    #[props(default)] variant: ProjectVariant,
) -> Element {
    let featured = variant == ProjectVariant::Featured;
    let techs = project.visible_technologies(variant).to_vec();
    let hidden = project.hidden_technologies(variant);
    let highlights = project.visible_highlights(variant).to_vec();

    rsx! {
        article { class: variant.class(),
            header { class: "project-card-header",
                div { class: "project-card-heading",
                    h3 { class: "project-title", "{project.title}" }
                    p { class: "project-description", "{project.description}" }
                }
                CategoryBadge { category: project.category }
            }

            div { class: "project-card-body",
                div { class: "project-card-main",
                    if variant.shows_long_description() {
                        p { class: "project-long-description", "{project.long_description}" }
                    }
                    div { class: "chip-row",
                        for tech in techs {
                            TechChip { key: "{tech}", tech: tech.clone() }
                        }
                        OverflowChip { hidden: hidden }
                    }
                }

                if featured {
                    div { class: "project-card-aside",
                        div { class: "highlights-panel",
                            p { class: "highlights-title", "Key Highlights" }
                            HighlightList { highlights: highlights.clone() }
                        }
                        ProjectLinks { github_url: project.github_url.clone(), live_url: project.live_url.clone() }
                    }
                }
            }

            if !featured {
                if !highlights.is_empty() {
                    HighlightList { highlights: highlights.clone() }
                }
                footer { class: "project-card-footer",
                    ProjectLinks { github_url: project.github_url.clone(), live_url: project.live_url.clone() }
                }
            }
        }
    }
}

#[component]
fn HighlightList(highlights: Vec<String>) -> Element {
    rsx! {
        ul { class: "highlights",
            for (index, highlight) in highlights.iter().enumerate() {
                li { key: "{index}",
                    span { class: "bullet", "aria-hidden": "true", "\u{2022}" }
                    span { "{highlight}" }
                }
            }
        }
    }
}

/// Code and Live links, each shown only when the project has one
#[component]
fn ProjectLinks(github_url: Option<String>, live_url: Option<String>) -> Element {
    rsx! {
        div { class: "project-links",
            if let Some(url) = github_url {
                LinkButton {
                    href: url,
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Sm,
                    external: true,
                    class: "grow".to_string(),
                    "\u{2197} Code"
                }
            }
            if let Some(url) = live_url {
                LinkButton {
                    href: url,
                    variant: ButtonVariant::Default,
                    size: ButtonSize::Sm,
                    external: true,
                    class: "grow".to_string(),
                    "\u{2197} Live"
                }
            }
        }
    }
}
