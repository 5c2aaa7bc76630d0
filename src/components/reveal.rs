//! Reveal-on-scroll wrapper.
//!
//! Children fade and slide in when the wrapper enters the viewport. All
//! wrappers on the page share one [`RevealHub`], which owns the registry and
//! talks to the page's single intersection observer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{ElementId, IntersectionEntry, MountDecision, RevealRegistry};

use crate::bridge;
use crate::context::{use_motion, use_reveal_hub};

/// Shared handle to the page's reveal registry
#[derive(Clone, Default)]
pub struct RevealHub {
    registry: Rc<RefCell<RevealRegistry>>,
    /// Host cannot report intersections; show everything on arrival
    degraded: Rc<Cell<bool>>,
}

impl RevealHub {
    /// Register an element and start watching it
    pub fn observe(&self, id: ElementId, once: bool, mut on_change: impl FnMut(bool) + 'static) {
        if self.degraded.get() {
            on_change(true);
            return;
        }
        self.registry.borrow_mut().observe(id, once, on_change);
        bridge::watch(id);
    }

    /// Unregister an element, whatever its state
    pub fn release(&self, id: ElementId) {
        if self.registry.borrow_mut().unobserve(id) {
            bridge::unwatch(id);
        }
    }

    /// Feed observer reports into the registry
    pub fn deliver(&self, entries: Vec<IntersectionEntry>) {
        let retired = self.registry.borrow_mut().dispatch_all(entries);
        for id in retired {
            bridge::unwatch(id);
        }
    }

    /// Reveal every element, now and from here on
    pub fn degrade(&self) {
        self.degraded.set(true);
        let shown = self.registry.borrow_mut().reveal_all();
        tracing::debug!(count = shown.len(), "Revealed all pending elements");
    }
}

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Transition delay, for staggering siblings
    #[props(default)]
    pub delay_ms: u32,
    /// Stay visible after the first reveal
    #[props(default = true)]
    pub once: bool,
    /// Above-the-fold content: show immediately and never observe
    #[props(default = false)]
    pub visible_by_default: bool,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { delay_ms: 80,
///         ProjectCard { project: project.clone(), variant: ProjectVariant::Featured }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let hub = use_reveal_hub();
    let motion = use_motion();
    let id = use_hook(ElementId::next);
    let visible_by_default = props.visible_by_default;
    let once = props.once;
    let mut in_view = use_signal(|| visible_by_default);
    let mut mounted = use_signal(|| false);
    let registered = use_hook(|| Rc::new(Cell::new(false)));

    // Re-runs when the motion preference resolves or the element mounts
    {
        let hub = hub.clone();
        use_effect(move || match MountDecision::decide(visible_by_default, motion()) {
            MountDecision::VisibleByDefault | MountDecision::Defer => {}
            MountDecision::ReducedMotion => in_view.set(true),
            MountDecision::Observe => {
                // The observer finds the element by attribute, so it must be in the page
                if mounted() && !registered.replace(true) {
                    hub.observe(id, once, move |v| in_view.set(v));
                }
            }
        });
    }

    use_drop(move || hub.release(id));

    let shown = in_view();
    let class = match props.class.as_deref() {
        Some(extra) => format!("reveal {}", extra),
        None => "reveal".to_string(),
    };

    rsx! {
        div {
            class: "{class}",
            "data-reveal-id": "{id}",
            "data-inview": "{shown}",
            onmounted: move |_| mounted.set(true),
            style: "transition-delay: {props.delay_ms}ms;",
            {props.children}
        }
    }
}
