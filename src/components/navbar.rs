//! Navigation Bar Component
//!
//! Desktop: fixed bar with the owner's name and a ghost button per section
//! Mobile: menu button opening a full-width menu over a glass overlay

use dioxus::prelude::*;
use portfolio_core::NAV_LINKS;
use portfolio_ui::{Button, ButtonSize, ButtonVariant};

use crate::bridge;

#[component]
pub fn Navbar(name: String) -> Element {
    let mut menu_open = use_signal(|| false);

    let mut go_to = move |id: &'static str| {
        tracing::debug!(section = id, "Scrolling to section");
        bridge::scroll_to_section(id);
        menu_open.set(false);
    };

    let open = menu_open();

    rsx! {
        nav { class: "navbar",
            div { class: "container navbar-inner",
                a {
                    class: "navbar-name",
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        bridge::scroll_to_top();
                    },
                    "{name}"
                }

                div { class: "navbar-links",
                    for link in NAV_LINKS.iter() {
                        Button {
                            key: "{link.id}",
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            onclick: move |_| go_to(link.id),
                            "{link.label}"
                        }
                    }
                }

                div { class: "navbar-mobile-toggle",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: if open { "Close menu".to_string() } else { "Open menu".to_string() },
                        onclick: move |_| menu_open.toggle(),
                        if open { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }
        }

        div { class: "mobile-nav",
            div {
                class: if open { "mobile-nav-overlay open" } else { "mobile-nav-overlay" },
                role: "presentation",
                "aria-hidden": "true",
                onclick: move |_| menu_open.set(false),
            }
            div {
                id: "mobile-nav-menu",
                class: if open { "mobile-nav-menu open" } else { "mobile-nav-menu" },
                role: "dialog",
                "aria-label": "Navigation menu",
                for (i, link) in NAV_LINKS.iter().enumerate() {
                    button {
                        key: "{link.id}",
                        r#type: "button",
                        class: match (open, i % 2 == 0) {
                            (false, _) => "mobile-nav-item",
                            (true, true) => "mobile-nav-item slide-left",
                            (true, false) => "mobile-nav-item slide-right",
                        },
                        style: "animation-delay: {i * 60}ms;",
                        onclick: move |_| go_to(link.id),
                        "{link.label}"
                    }
                }
            }
        }
    }
}
