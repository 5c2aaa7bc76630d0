//! Resume Dialog Component
//!
//! Modal with an embedded preview of the resume document. The preview
//! degrades to a friendly message with open/download links if the viewer
//! errors or stays silent past the fallback timeout.
//!
//! The dialog is mounted when opened and unmounted when closed, so every
//! open starts a fresh loading sequence.

use dioxus::prelude::*;
use portfolio_core::{PreviewState, RecoveryAction, ResumeAsset, ResumePreview};
use portfolio_ui::{Button, ButtonSize, ButtonVariant, CloseButton, LinkButton};

use crate::context::use_settings;
use crate::resume_file::{self, ResumeDocument};

/// Resume Dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if show_resume() {
///         ResumeDialog {
///             document: use_settings().resume,
///             on_close: move |_| show_resume.set(false),
///         }
///     }
/// }
/// ```
#[component]
pub fn ResumeDialog(
    /// The document to preview
    document: ResumeDocument,
    /// Callback when the dialog is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let settings = use_settings();
    let mut preview = use_signal(|| ResumePreview::opened(settings.preview_timeout));

    // Fallback timer for the open the dialog mounted with
    let timer = use_hook(move || {
        let token = preview.peek().pending_timer();
        spawn(async move {
            let Some(token) = token else {
                return;
            };
            tokio::time::sleep(token.timeout()).await;
            preview.write().on_timeout(token);
        })
    });

    let mut close = move || {
        timer.cancel();
        preview.write().close();
        on_close.call(());
    };

    let state = preview.read().state();
    let asset = document.asset.clone();
    let preview_url = asset.preview_url();
    let open_url = asset.open_url().to_string();

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| close(),

            div {
                class: "dialog resume-dialog",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "Resume",
                tabindex: "-1",
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!("Could not focus resume dialog: {:?}", e);
                    }
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        close();
                    }
                },
                onclick: move |evt| evt.stop_propagation(),

                header { class: "dialog-header",
                    h2 { class: "dialog-title", "Resume" }
                    div { class: "dialog-actions",
                        DownloadAction {
                            document: document.clone(),
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            label: "Download".to_string(),
                        }
                        LinkButton {
                            href: open_url,
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            external: true,
                            "\u{2197} Open"
                        }
                        CloseButton { onclick: move |_| close() }
                    }
                }

                div { class: "dialog-body resume-scroll",
                    {if state.is_errored() {
                        rsx! {
                            PreviewFallback { document: document.clone() }
                        }
                    } else {
                        rsx! {
                            div { class: "resume-frame",
                                if state == PreviewState::Loading {
                                    div { class: "resume-loading", role: "status",
                                        span { class: "spinner", "aria-hidden": "true" }
                                        span { "Loading preview\u{2026}" }
                                    }
                                }
                                object {
                                    class: if state == PreviewState::Loaded { "resume-object loaded" } else { "resume-object" },
                                    data: "{preview_url}",
                                    r#type: "application/pdf",
                                    onload: move |_| {
                                        preview.write().on_rendered();
                                    },
                                    onerror: move |_| {
                                        preview.write().on_viewer_error();
                                    },
                                }
                            }
                        }
                    }}
                }
            }
        }
    }
}

/// Shown in place of the preview when it cannot be displayed
#[component]
fn PreviewFallback(document: ResumeDocument) -> Element {
    let actions = document.asset.recovery_actions();

    rsx! {
        div { class: "resume-fallback",
            p { class: "resume-fallback-title", {ResumeAsset::UNAVAILABLE_MESSAGE} }
            p { class: "resume-fallback-hint",
                "You can still open the resume in a new tab or download a copy."
            }
            div { class: "resume-fallback-actions",
                for action in actions.iter() {
                    {
                        let label = action.label();
                        match action {
                            RecoveryAction::OpenInNewTab { url } => rsx! {
                                LinkButton {
                                    key: "{label}",
                                    href: url.clone(),
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Lg,
                                    external: true,
                                    "\u{2197} {label}"
                                }
                            },
                            RecoveryAction::Download { .. } => rsx! {
                                DownloadAction {
                                    key: "{label}",
                                    document: document.clone(),
                                    variant: ButtonVariant::Default,
                                    size: ButtonSize::Lg,
                                    label: label.to_string(),
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Save-dialog button for the bundled copy, a download link otherwise
#[component]
fn DownloadAction(
    document: ResumeDocument,
    variant: ButtonVariant,
    size: ButtonSize,
    label: String,
) -> Element {
    let mut saving = use_signal(|| false);
    let file_name = document.asset.file_name().to_string();

    if !document.bundled {
        return rsx! {
            LinkButton {
                href: document.asset.url().to_string(),
                variant: variant,
                size: size,
                download: file_name,
                "\u{2913} {label}"
            }
        };
    }

    rsx! {
        Button {
            variant: variant,
            size: size,
            disabled: saving(),
            onclick: move |_| {
                let file_name = file_name.clone();
                saving.set(true);
                spawn(async move {
                    if let Err(e) = resume_file::save_copy(file_name).await {
                        tracing::warn!("Saving resume failed: {:?}", e);
                    }
                    saving.set(false);
                });
            },
            "\u{2913} {label}"
        }
    }
}
