//! Section Header Component
//!
//! Icon, title and optional description at the top of each page section.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeaderAlign {
    #[default]
    Left,
    Center,
}

impl HeaderAlign {
    pub fn class(&self) -> &'static str {
        match self {
            HeaderAlign::Left => "section-header align-left",
            HeaderAlign::Center => "section-header align-center",
        }
    }
}

/// Properties for the SectionHeader component
#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    /// Glyph shown in the icon tile
    pub icon: String,
    pub title: String,
    #[props(default)]
    pub description: Option<String>,
    #[props(default)]
    pub align: HeaderAlign,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionHeader {
///         icon: "</>".to_string(),
///         title: "Projects".to_string(),
///         description: "Full-stack systems with thoughtful APIs.".to_string(),
///     }
/// }
/// ```
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: props.align.class(),
            div { class: "section-header-title",
                span { class: "section-icon", "aria-hidden": "true", "{props.icon}" }
                h2 { class: "section-title", "{props.title}" }
            }
            if let Some(description) = props.description.as_ref() {
                p { class: "section-description", "{description}" }
            }
        }
    }
}
