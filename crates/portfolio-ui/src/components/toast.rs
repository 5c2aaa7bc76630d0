//! Toast Component
//!
//! Small confirmation popup in the corner of the page. Dismisses itself
//! after `duration_ms` or when its close button is pressed.

use std::time::Duration;

use dioxus::prelude::*;

use super::button::CloseButton;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

#[component]
pub fn Toast(
    message: String,
    on_close: EventHandler<()>,
    #[props(default = DEFAULT_TOAST_DURATION_MS)] duration_ms: u64,
) -> Element {
    // Timer task belongs to this scope and is cancelled if the toast goes away first
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
            on_close.call(());
        });
    });

    rsx! {
        div { class: "toast", role: "status",
            p { class: "toast-message", "{message}" }
            CloseButton { onclick: move |_| on_close.call(()) }
        }
    }
}
