//! Typing Text Component
//!
//! Types, pauses on, and deletes each phrase in turn, forever. The line
//! reserves the width of the longest phrase so surrounding text never shifts.

use dioxus::prelude::*;
use portfolio_core::{TypingConfig, TypingEffect};

/// Properties for the TypingText component
#[derive(Clone, PartialEq, Props)]
pub struct TypingTextProps {
    /// Phrases to cycle through; must not be empty
    pub phrases: Vec<String>,
    #[props(default)]
    pub config: TypingConfig,
    #[props(default)]
    pub class: Option<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypingText {
///         phrases: vec!["Backend Engineer".to_string(), "Frontend Engineer".to_string()],
///     }
/// }
/// ```
#[component]
pub fn TypingText(props: TypingTextProps) -> Element {
    let phrases = props.phrases.clone();
    let config = props.config;
    let effect: Signal<Option<TypingEffect>> =
        use_signal(move || match TypingEffect::new(phrases, config) {
            Ok(fx) => Some(fx),
            Err(e) => {
                tracing::warn!("Typing text disabled: {}", e);
                None
            }
        });

    // Single driver task owned by this scope; unmounting drops it with its timer
    use_effect(move || {
        let mut effect = effect;
        spawn(async move {
            loop {
                let Some(delay) = effect.peek().as_ref().map(|fx| fx.delay()) else {
                    break;
                };
                tokio::time::sleep(delay).await;
                if let Some(fx) = effect.write().as_mut() {
                    fx.tick();
                }
            }
        });
    });

    let (text, width) = match effect.read().as_ref() {
        Some(fx) => (fx.displayed().to_string(), fx.min_width_ch()),
        None => (String::new(), 0),
    };
    let class = match props.class.as_deref() {
        Some(extra) => format!("typing {}", extra),
        None => "typing".to_string(),
    };

    rsx! {
        span { class: "{class}", style: "min-width: {width}ch;",
            span { class: "typing-text", "{text}" }
            span { class: "typing-cursor", "aria-hidden": "true", "|" }
        }
    }
}
