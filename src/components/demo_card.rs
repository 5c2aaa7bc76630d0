//! Demo Card Component
//!
//! Terminal-style card on the landing view that fakes an API round trip.
//! Pressing Run replays the request: the command line flashes, a
//! processing line stands in for the response, then the response returns
//! with a fresh latency and the trace line pulses.

use dioxus::prelude::*;
use portfolio_core::{DemoFrame, DemoSimulator, LatencyPolicy};
use portfolio_ui::{Button, ButtonSize, ButtonVariant};

const REQUEST: &str = "$ curl -X POST /api/bookings \\\n  -H \"Authorization: Bearer <token>\" \\\n  -d '{ \"flightId\": \"AI-203\", \"seats\": 2 }'\n";

const TRACE: &str = "trace: gateway \u{2192} auth \u{2192} booking \u{2192} payments \u{2192} notifications";

fn response_body(latency_ms: u32) -> String {
    format!(
        " 201 Created\n{{\n  \"bookingId\": \"BK-7F3A\",\n  \"status\": \"CONFIRMED\",\n  \"payment\": \"CAPTURED\",\n  \"latencyMs\": {}\n}}\n\n",
        latency_ms
    )
}

/// Demo Card
///
/// Steps of a run are scheduled in a task owned by this component, so
/// leaving the page cancels a run in flight.
#[component]
pub fn DemoCard() -> Element {
    let mut sim = use_signal(|| DemoSimulator::new(LatencyPolicy::default()));

    let on_run = move |_| {
        let Some(run) = sim.write().run(&mut rand::rng()) else {
            return;
        };
        tracing::debug!(latency_ms = run.latency_ms(), "Demo run started");

        spawn(async move {
            for (wait, step) in run.remaining_steps() {
                tokio::time::sleep(wait).await;
                if !sim.write().apply(&run, step) {
                    break;
                }
            }
        });
    };

    let DemoFrame {
        running,
        highlight_request,
        show_response,
        show_processing,
        animate_checkmark,
        pulse_trace,
        latency_ms,
    } = sim.read().frame();

    rsx! {
        div { class: "demo-card",
            div { class: "demo-card-header",
                div { class: "window-dots", "aria-hidden": "true",
                    span { class: "dot dot-red" }
                    span { class: "dot dot-yellow" }
                    span { class: "dot dot-green" }
                }
                span { class: "demo-card-title", "system.log" }
            }

            div { class: "demo-card-body floaty",
                div { class: "demo-run",
                    Button {
                        variant: ButtonVariant::Default,
                        size: ButtonSize::Sm,
                        disabled: running,
                        aria_label: "Run API demo".to_string(),
                        onclick: on_run,
                        if running {
                            span { class: "spinner small", "aria-hidden": "true" }
                            "Running"
                        } else {
                            span { class: "play-icon", "aria-hidden": "true", "\u{25B6}" }
                            "Run"
                        }
                    }
                }

                pre { class: "demo-terminal",
                    code {
                        span { class: if highlight_request { "api-request api-request-highlight" } else { "api-request" },
                            {REQUEST}
                        }
                        span { class: "api-output",
                            if show_processing {
                                span { class: "api-loading",
                                    span { class: "api-processing",
                                        span { class: "spinner small", "aria-hidden": "true" }
                                        "processing\u{2026}"
                                    }
                                }
                            } else if show_response {
                                span { class: "api-response",
                                    span { class: if animate_checkmark { "api-checkmark" } else { "" }, "\u{2713}" }
                                    {response_body(latency_ms)}
                                    span { class: if pulse_trace { "api-trace api-trace-pulse" } else { "api-trace" },
                                        {TRACE}
                                    }
                                }
                            } else {
                                span { class: "api-placeholder", "aria-hidden": "true",
                                    "\u{2713}"
                                    {response_body(latency_ms)}
                                    {TRACE}
                                }
                            }
                        }
                    }
                }
            }

            p { class: "demo-card-caption",
                "Clean contracts, resilient services, and predictable performance."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_body_carries_latency() {
        let body = response_body(97);
        assert!(body.contains("\"latencyMs\": 97"));
        assert!(body.starts_with(" 201 Created"));
    }
}
