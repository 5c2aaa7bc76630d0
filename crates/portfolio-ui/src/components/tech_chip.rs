//! Technology chips and badges
//!
//! Pill-shaped tags for technologies, skills and project categories.
//! Chips get a small icon when the tag matches a known technology family.

use dioxus::prelude::*;
use portfolio_core::{ProjectCategory, Skill, TechKind};

/// Badge style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }

    /// Badge style for a project's category
    pub fn for_category(category: ProjectCategory) -> Self {
        match category {
            ProjectCategory::Backend => BadgeVariant::Default,
            ProjectCategory::Fullstack => BadgeVariant::Secondary,
            ProjectCategory::Frontend | ProjectCategory::Other => BadgeVariant::Outline,
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let full_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    };

    rsx! {
        span { class: "{full_class}", {children} }
    }
}

/// Category badge on a project card
#[component]
pub fn CategoryBadge(category: ProjectCategory) -> Element {
    let label = category.label();
    rsx! {
        Badge { variant: BadgeVariant::for_category(category), class: "category-badge".to_string(),
            "{label}"
        }
    }
}

/// Properties for the TechChip component
#[derive(Clone, PartialEq, Props)]
pub struct TechChipProps {
    /// Technology name
    pub tech: String,
    /// Render the family icon when one matches
    #[props(default = true)]
    pub show_icon: bool,
}

/// A technology tag with an optional family icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for tech in project.technologies.iter() {
///         TechChip { key: "{tech}", tech: tech.clone() }
///     }
/// }
/// ```
#[component]
pub fn TechChip(props: TechChipProps) -> Element {
    let icon = props
        .show_icon
        .then(|| TechKind::classify(&props.tech))
        .flatten()
        .map(|kind| kind.icon());

    rsx! {
        span { class: "tech-chip",
            if let Some(icon) = icon {
                span { class: "tech-chip-icon", "aria-hidden": "true", "{icon}" }
            }
            span { "{props.tech}" }
        }
    }
}

/// `+N` badge for technologies that did not fit
#[component]
pub fn OverflowChip(hidden: usize) -> Element {
    if hidden == 0 {
        return rsx! {};
    }
    rsx! {
        span { class: "tech-chip overflow", "+{hidden}" }
    }
}

/// A skill, rendered as a chip; proficiency is exposed as a data attribute
#[component]
pub fn SkillBadge(skill: Skill) -> Element {
    let proficiency = skill.proficiency.map(|p| p.label());

    rsx! {
        span { class: "skill-badge", "data-proficiency": proficiency,
            TechChip { tech: skill.name.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_badge_variants() {
        assert_eq!(
            BadgeVariant::for_category(ProjectCategory::Backend),
            BadgeVariant::Default
        );
        assert_eq!(
            BadgeVariant::for_category(ProjectCategory::Fullstack),
            BadgeVariant::Secondary
        );
        assert_eq!(
            BadgeVariant::for_category(ProjectCategory::Other),
            BadgeVariant::Outline
        );
    }

    #[test]
    fn badge_classes() {
        assert_eq!(BadgeVariant::Outline.class(), "badge badge-outline");
    }
}
