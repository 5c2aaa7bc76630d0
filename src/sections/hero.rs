//! Landing view: name, typed role, tagline, calls to action and the demo
//! card. Everything here is above the fold, so the reveals start visible.

use dioxus::prelude::*;
use portfolio_core::TypingConfig;
use portfolio_ui::{Button, ButtonSize, ButtonVariant, TechChip, TypingText};

use crate::bridge;
use crate::components::{DemoCard, Reveal, ResumeDialog, SectionWrapper};
use crate::context::{use_portfolio, use_settings};

/// Split a full name so the last word can carry the accent gradient
fn split_name(name: &str) -> (&str, &str) {
    match name.trim().rsplit_once(' ') {
        Some((first, last)) => (first, last),
        None => ("", name.trim()),
    }
}

#[component]
pub fn Hero() -> Element {
    let portfolio = use_portfolio();
    let mut show_resume = use_signal(|| false);

    let (first, last) = split_name(&portfolio.personal.name);
    let phrases = portfolio.hero.phrases.clone();
    let tech = portfolio.hero.tech.clone();
    let resume = use_settings().resume;

    rsx! {
        SectionWrapper { id: "hero".to_string(), class: "hero".to_string(),
            div { class: "hero-backdrop", "aria-hidden": "true" }

            div { class: "hero-grid",
                div { class: "hero-copy",
                    Reveal { visible_by_default: true,
                        h1 { class: "hero-name",
                            if !first.is_empty() {
                                span { "{first} " }
                            }
                            span { class: "accent-gradient", "{last}" }
                        }
                    }

                    Reveal { delay_ms: 90, visible_by_default: true,
                        p { class: "hero-role",
                            TypingText { phrases: phrases, config: TypingConfig::default() }
                        }
                    }

                    Reveal { delay_ms: 140, visible_by_default: true,
                        p { class: "hero-tagline",
                            "I design scalable "
                            strong { "APIs" }
                            ", robust "
                            strong { "systems" }
                            ", and clean user experiences."
                        }
                    }

                    Reveal { delay_ms: 190, visible_by_default: true,
                        div { class: "chip-row",
                            for t in tech {
                                TechChip { key: "{t}", tech: t.clone() }
                            }
                        }
                    }

                    Reveal { delay_ms: 230, visible_by_default: true,
                        div { class: "hero-actions",
                            Button {
                                size: ButtonSize::Lg,
                                onclick: move |_| bridge::scroll_to_section("projects"),
                                "View Projects"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Lg,
                                onclick: move |_| bridge::scroll_to_section("contact"),
                                "Contact"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Lg,
                                onclick: move |_| show_resume.set(true),
                                "Resume"
                            }
                        }
                    }
                }

                Reveal { delay_ms: 180, visible_by_default: true,
                    DemoCard {}
                }
            }
        }

        if show_resume() {
            ResumeDialog {
                document: resume,
                on_close: move |_| show_resume.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_name_keeps_last_word() {
        assert_eq!(split_name("Anand Yadav"), ("Anand", "Yadav"));
        assert_eq!(split_name("Ada King Lovelace"), ("Ada King", "Lovelace"));
        assert_eq!(split_name("Prince"), ("", "Prince"));
    }
}
