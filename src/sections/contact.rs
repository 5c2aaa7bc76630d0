//! Contact card: email, location and social links, plus a copy-email
//! shortcut that confirms with a toast.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonSize, ButtonVariant, LinkButton, SectionHeader, Toast};

use crate::components::{Reveal, SectionWrapper};
use crate::context::use_portfolio;

/// Put `text` on the desktop clipboard
fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}

#[component]
pub fn Contact() -> Element {
    let portfolio = use_portfolio();
    let personal = &portfolio.personal;
    let mut toast: Signal<Option<&'static str>> = use_signal(|| None);

    let email = personal.email.clone();
    let on_copy = move |_| {
        let message = match copy_to_clipboard(&email) {
            Ok(()) => "Email copied to clipboard",
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                "Could not copy email"
            }
        };
        toast.set(Some(message));
    };

    let mailto = personal.mailto();
    let socials: Vec<(&'static str, String)> = personal
        .social_links()
        .into_iter()
        .map(|(label, url)| (label, url.to_string()))
        .collect();

    rsx! {
        SectionWrapper { id: "contact".to_string(),
            div { class: "narrow-2xl",
                Reveal {
                    SectionHeader {
                        icon: "\u{2709}".to_string(),
                        title: "Contact".to_string(),
                        description: "Open to full-stack roles. Happy to chat about systems design, APIs, and production engineering.".to_string(),
                    }
                }

                Reveal { delay_ms: 80,
                    div { class: "card contact-card",
                        div { class: "contact-grid",
                            div { class: "contact-field",
                                span { class: "contact-label", "Email" }
                                div { class: "contact-email",
                                    LinkButton {
                                        href: mailto,
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Sm,
                                        class: "grow justify-start".to_string(),
                                        "{personal.email}"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        size: ButtonSize::Sm,
                                        aria_label: "Copy email".to_string(),
                                        onclick: on_copy,
                                        "Copy"
                                    }
                                }
                            }
                            div { class: "contact-field",
                                span { class: "contact-label", "Location" }
                                p { class: "contact-value", "{personal.location}" }
                            }
                        }

                        if !socials.is_empty() {
                            div { class: "contact-socials",
                                for (label, url) in socials {
                                    LinkButton {
                                        key: "{label}",
                                        href: url,
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Sm,
                                        external: true,
                                        class: "grow".to_string(),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(message) = toast() {
            Toast {
                message: message.to_string(),
                on_close: move |_| toast.set(None),
            }
        }
    }
}
