//! Button Components
//!
//! Button styles used across the site:
//! - Default: filled accent, primary calls to action
//! - Outline: bordered, secondary actions and external links
//! - Ghost: borderless, navigation and tertiary actions
//!
//! [`LinkButton`] renders the same styles on an anchor for navigation,
//! new-tab links and downloads.

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent background
    #[default]
    Default,
    /// Transparent with a border
    Outline,
    /// Transparent, no border until hover
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Join the base, variant, size and any extra classes
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible label when the content is not descriptive
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Default,
///         size: ButtonSize::Sm,
///         disabled: running,
///         onclick: move |_| start_demo(),
///         "Run"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Open in a new browsing context
    #[props(default = false)]
    pub external: bool,
    /// Download with this file name instead of navigating
    #[props(default)]
    pub download: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor styled as a button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton {
///         href: "/resume.pdf".to_string(),
///         variant: ButtonVariant::Outline,
///         external: true,
///         "Open"
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());
    let external = props.external;

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: external.then_some("_blank"),
            rel: external.then_some("noopener noreferrer"),
            download: props.download.clone(),
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, menu, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Default.class(), "btn-default");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn button_class_joins_parts() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Sm, None),
            "btn btn-outline btn-sm"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Lg, Some("hero-cta")),
            "btn btn-ghost btn-lg hero-cta"
        );
        assert_eq!(
            button_class(ButtonVariant::Default, ButtonSize::Icon, Some("")),
            "btn btn-default btn-icon"
        );
    }
}
