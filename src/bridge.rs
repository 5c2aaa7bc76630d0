//! Host capability bridges.
//!
//! Small scripts evaluated in the webview for what only the browser knows:
//! element intersections, the reduced-motion media query, and smooth
//! scrolling. Every bridge degrades quietly when the capability is missing.

use dioxus::prelude::*;
use portfolio_core::{ElementId, IntersectionEntry, ObserverOptions};
use serde::Deserialize;

use crate::components::RevealHub;

/// Attribute the observer script uses to find reveal elements
pub const REVEAL_ATTR: &str = "data-reveal-id";

/// Animation frames the observer waits for an element to appear in the page
const LOOKUP_FRAMES: u32 = 120;

/// Messages streamed back from the observer script
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ObserverMessage {
    Entries { entries: Vec<IntersectionEntry> },
    /// Element never showed up in the page while the observer looked for it
    Missing { id: ElementId },
    Unsupported,
}

impl ObserverMessage {
    /// Reports to feed the registry. `None` when the host cannot observe at all.
    ///
    /// An element the observer could not find is reported as in view, so it is
    /// shown rather than left hidden.
    fn into_reports(self) -> Option<Vec<IntersectionEntry>> {
        match self {
            ObserverMessage::Entries { entries } => Some(entries),
            ObserverMessage::Missing { id } => Some(vec![IntersectionEntry {
                id,
                intersecting: true,
            }]),
            ObserverMessage::Unsupported => None,
        }
    }
}

/// Page-global state shared by all bridge scripts. Elements asked for before
/// the observer exists wait in `pending`; `wanted` holds every id still being
/// looked up or observed.
const REVEAL_STATE_JS: &str = "window.__portfolioReveal = window.__portfolioReveal || { pending: [], wanted: new Set(), elements: new Map() };";

fn observer_script(options: &ObserverOptions) -> String {
    format!(
        r#"
        {state}
        const reveal = window.__portfolioReveal;
        if (!('IntersectionObserver' in window)) {{
            dioxus.send({{ kind: 'unsupported' }});
        }} else {{
            const observer = new IntersectionObserver((entries) => {{
                const out = [];
                for (const entry of entries) {{
                    const id = Number(entry.target.getAttribute('{attr}'));
                    out.push({{ id, intersecting: entry.isIntersecting }});
                }}
                dioxus.send({{ kind: 'entries', entries: out }});
            }}, {{ root: null, threshold: {threshold}, rootMargin: '{margin}' }});

            reveal.observe = (id, frame = 0) => {{
                if (frame === 0) reveal.wanted.add(id);
                if (!reveal.wanted.has(id)) return;
                const el = document.querySelector('[{attr}="' + id + '"]');
                if (!el) {{
                    if (frame < {frames}) {{
                        requestAnimationFrame(() => reveal.observe(id, frame + 1));
                    }} else {{
                        reveal.wanted.delete(id);
                        dioxus.send({{ kind: 'missing', id }});
                    }}
                    return;
                }}
                reveal.elements.set(id, el);
                observer.observe(el);
            }};
            reveal.unobserve = (id) => {{
                reveal.wanted.delete(id);
                const el = reveal.elements.get(id);
                if (!el) return;
                observer.unobserve(el);
                reveal.elements.delete(id);
            }};
            for (const id of reveal.pending.splice(0)) reveal.observe(id);
        }}
        await new Promise(() => {{}});
        "#,
        state = REVEAL_STATE_JS,
        attr = REVEAL_ATTR,
        frames = LOOKUP_FRAMES,
        threshold = options.threshold,
        margin = options.root_margin(),
    )
}

/// Run the shared viewport watcher for the lifetime of the page.
///
/// Reports are fed into the hub; if the host has no intersection support,
/// every element is revealed instead.
pub async fn run_reveal_observer(hub: RevealHub) {
    let mut eval = document::eval(&observer_script(&ObserverOptions::default()));
    tracing::debug!("Reveal observer installed");

    loop {
        match eval.recv::<ObserverMessage>().await {
            Ok(message) => {
                if let ObserverMessage::Missing { id } = message {
                    tracing::warn!(%id, "Reveal element not found in the page; showing it");
                }
                match message.into_reports() {
                    Some(entries) => hub.deliver(entries),
                    None => {
                        tracing::warn!("Host has no IntersectionObserver; revealing everything");
                        hub.degrade();
                        break;
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Reveal observer stopped: {:?}", e);
                hub.degrade();
                break;
            }
        }
    }
}

/// Ask the watcher to track an element
pub fn watch(id: ElementId) {
    let script = format!(
        "{state} const r = window.__portfolioReveal; if (r.observe) {{ r.observe({id}); }} else {{ r.pending.push({id}); }}",
        state = REVEAL_STATE_JS,
        id = id,
    );
    document::eval(&script);
}

/// Stop tracking an element
pub fn unwatch(id: ElementId) {
    let script = format!(
        "{state} const r = window.__portfolioReveal; r.pending = r.pending.filter((p) => p !== {id}); if (r.unobserve) r.unobserve({id});",
        state = REVEAL_STATE_JS,
        id = id,
    );
    document::eval(&script);
}

/// Query `prefers-reduced-motion`. `None` when the host cannot answer.
pub async fn prefers_reduced_motion() -> Option<bool> {
    let eval = document::eval(
        "return !!(window.matchMedia && window.matchMedia('(prefers-reduced-motion: reduce)').matches);",
    );
    match eval.join::<bool>().await {
        Ok(reduced) => Some(reduced),
        Err(e) => {
            tracing::warn!("Reduced-motion query failed: {:?}", e);
            None
        }
    }
}

/// Smooth-scroll a section into view
pub fn scroll_to_section(id: &str) {
    let script = format!(
        "const el = document.getElementById({id:?}); if (el) el.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
    );
    document::eval(&script);
}

pub fn scroll_to_top() {
    document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_script_carries_options() {
        let script = observer_script(&ObserverOptions::default());
        assert!(script.contains("threshold: 0.2"));
        assert!(script.contains("rootMargin: '0px 0px -10% 0px'"));
        assert!(script.contains(REVEAL_ATTR));
    }

    #[test]
    fn observer_messages_parse() {
        let msg: ObserverMessage = serde_json::from_str(
            r#"{"kind":"entries","entries":[{"id":3,"intersecting":true}]}"#,
        )
        .unwrap();
        match msg {
            ObserverMessage::Entries { entries } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].id, ElementId(3));
                assert!(entries[0].intersecting);
            }
            other => panic!("unexpected message: {:?}", other),
        }

        let msg: ObserverMessage = serde_json::from_str(r#"{"kind":"unsupported"}"#).unwrap();
        assert!(matches!(msg, ObserverMessage::Unsupported));
    }

    #[test]
    fn missing_element_is_reported_in_view() {
        let msg: ObserverMessage =
            serde_json::from_str(r#"{"kind":"missing","id":11}"#).unwrap();
        assert_eq!(
            msg.into_reports(),
            Some(vec![IntersectionEntry {
                id: ElementId(11),
                intersecting: true,
            }])
        );
        let msg: ObserverMessage = serde_json::from_str(r#"{"kind":"unsupported"}"#).unwrap();
        assert_eq!(msg.into_reports(), None);
    }

    #[test]
    fn unresolved_elements_are_retried_not_dropped() {
        let script = observer_script(&ObserverOptions::default());
        assert!(script.contains("requestAnimationFrame(() => reveal.observe(id, frame + 1))"));
        assert!(script.contains("kind: 'missing'"));
        assert!(script.contains(&format!("frame < {}", LOOKUP_FRAMES)));
    }
}
