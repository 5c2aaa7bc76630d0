use dioxus::prelude::*;
use portfolio_core::MotionPreference;

use crate::bridge;
use crate::components::RevealHub;
use crate::context::use_settings;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - the single-page site; sections are reached by scrolling
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the motion preference, the reveal hub, and routing.
#[component]
pub fn App() -> Element {
    let settings = use_settings();
    let mut motion: Signal<MotionPreference> = use_signal(MotionPreference::default);
    let hub = use_hook(RevealHub::default);

    use_context_provider(|| motion);
    use_context_provider(|| hub.clone());

    // Resolve the motion preference and start the shared viewport watcher
    use_effect(move || {
        let force = settings.force_reduced_motion;
        let hub = hub.clone();
        spawn(async move {
            let preference = if force {
                MotionPreference::Reduced
            } else {
                match bridge::prefers_reduced_motion().await {
                    Some(reduced) => MotionPreference::from_reduced(reduced),
                    None => MotionPreference::Full,
                }
            };
            tracing::info!(?preference, "Motion preference resolved");
            motion.set(preference);

            if preference == MotionPreference::Full {
                bridge::run_reveal_observer(hub).await;
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
