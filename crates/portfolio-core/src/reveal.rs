//! Reveal-on-scroll registry.
//!
//! Every animated element on the page registers here under an [`ElementId`].
//! One viewport watcher (the browser's intersection observer, bridged by the
//! app) reports [`IntersectionEntry`] values, and the registry turns them into
//! in-view callbacks. Entries are removed explicitly: either on unmount or,
//! for `once` elements, the first time they come into view.
//!
//! ## Mount rules
//!
//! | Input | Result |
//! |---|---|
//! | `visible_by_default` | shown immediately, never observed |
//! | reduced motion | shown immediately, never observed |
//! | motion preference not yet known | wait |
//! | otherwise | observed |

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identity of an observed element, unique for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user's animation preference as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    /// Host has not answered yet
    #[default]
    Unknown,
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }
}

/// What a freshly mounted element should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountDecision {
    /// Above-the-fold content, shown without observation
    VisibleByDefault,
    /// Animation suppressed, shown without observation
    ReducedMotion,
    /// Register with the viewport watcher
    Observe,
    /// Motion preference unknown; decide once it arrives
    Defer,
}

impl MountDecision {
    pub fn decide(visible_by_default: bool, motion: MotionPreference) -> Self {
        if visible_by_default {
            return MountDecision::VisibleByDefault;
        }
        match motion {
            MotionPreference::Reduced => MountDecision::ReducedMotion,
            MotionPreference::Full => MountDecision::Observe,
            MotionPreference::Unknown => MountDecision::Defer,
        }
    }

    /// In-view state to start with
    pub fn initially_in_view(&self) -> bool {
        matches!(
            self,
            MountDecision::VisibleByDefault | MountDecision::ReducedMotion
        )
    }
}

/// Configuration of the shared viewport watcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// Bottom root margin as a percentage of viewport height (negative shrinks)
    pub bottom_margin_percent: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            bottom_margin_percent: -10.0,
        }
    }
}

impl ObserverOptions {
    /// CSS-style margin string for `IntersectionObserver`
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}% 0px", self.bottom_margin_percent)
    }
}

/// Axis-aligned box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);
        Rect::new(x0, y0, (x1 - x0).max(0.0), (y1 - y0).max(0.0))
    }
}

/// The watcher's visibility rule, for hosts without a native observer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntersectionGeometry {
    pub options: ObserverOptions,
}

impl IntersectionGeometry {
    pub fn new(options: ObserverOptions) -> Self {
        Self { options }
    }

    /// Viewport after the root margin is applied
    pub fn trigger_region(&self, viewport: Rect) -> Rect {
        let bottom = viewport.height * self.options.bottom_margin_percent / 100.0;
        Rect::new(
            viewport.x,
            viewport.y,
            viewport.width,
            (viewport.height + bottom).max(0.0),
        )
    }

    /// Visible fraction of `target` inside the trigger region
    pub fn ratio(&self, target: Rect, viewport: Rect) -> f64 {
        let area = target.area();
        if area == 0.0 {
            return 0.0;
        }
        target.intersect(&self.trigger_region(viewport)).area() / area
    }

    pub fn is_intersecting(&self, target: Rect, viewport: Rect) -> bool {
        self.ratio(target, viewport) >= self.options.threshold
    }
}

/// One report from the viewport watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IntersectionEntry {
    pub id: ElementId,
    pub intersecting: bool,
}

/// Effect of a single watcher report on the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Element is not registered
    Ignored,
    /// In-view state did not change
    Unchanged,
    Shown,
    Hidden,
    /// A `once` element came into view and was removed; the host should stop watching it
    Retired,
}

type InViewCallback = Box<dyn FnMut(bool)>;

struct Registration {
    once: bool,
    in_view: bool,
    on_change: InViewCallback,
}

/// Registry of observed elements, one callback per element
#[derive(Default)]
pub struct RevealRegistry {
    entries: HashMap<ElementId, Registration>,
}

impl std::fmt::Debug for RevealRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealRegistry")
            .field("observed", &self.entries.len())
            .finish()
    }
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing an element. Re-observing replaces the old callback.
    pub fn observe(&mut self, id: ElementId, once: bool, on_change: impl FnMut(bool) + 'static) {
        tracing::debug!(%id, once, "Observing element");
        self.entries.insert(
            id,
            Registration {
                once,
                in_view: false,
                on_change: Box::new(on_change),
            },
        );
    }

    /// Stop observing an element. Returns whether it was registered.
    pub fn unobserve(&mut self, id: ElementId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn in_view(&self, id: ElementId) -> Option<bool> {
        self.entries.get(&id).map(|r| r.in_view)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply one watcher report
    pub fn dispatch(&mut self, entry: IntersectionEntry) -> DispatchOutcome {
        let Some(reg) = self.entries.get_mut(&entry.id) else {
            return DispatchOutcome::Ignored;
        };

        if entry.intersecting {
            let changed = !reg.in_view;
            if changed {
                reg.in_view = true;
                (reg.on_change)(true);
            }
            if reg.once {
                self.entries.remove(&entry.id);
                return DispatchOutcome::Retired;
            }
            if changed {
                DispatchOutcome::Shown
            } else {
                DispatchOutcome::Unchanged
            }
        } else if !reg.once && reg.in_view {
            reg.in_view = false;
            (reg.on_change)(false);
            DispatchOutcome::Hidden
        } else {
            DispatchOutcome::Unchanged
        }
    }

    /// Apply a batch of reports, returning the ids that were retired
    pub fn dispatch_all(
        &mut self,
        entries: impl IntoIterator<Item = IntersectionEntry>,
    ) -> Vec<ElementId> {
        entries
            .into_iter()
            .filter(|e| self.dispatch(*e) == DispatchOutcome::Retired)
            .map(|e| e.id)
            .collect()
    }

    /// Show every registered element and forget them all.
    ///
    /// Used when the host cannot report intersections.
    pub fn reveal_all(&mut self) -> Vec<ElementId> {
        let mut ids = Vec::with_capacity(self.entries.len());
        for (id, mut reg) in self.entries.drain() {
            if !reg.in_view {
                (reg.on_change)(true);
            }
            ids.push(id);
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn probe() -> (Rc<Cell<Option<bool>>>, impl FnMut(bool) + 'static) {
        let state = Rc::new(Cell::new(None));
        let sink = state.clone();
        (state, move |v| sink.set(Some(v)))
    }

    fn enter(id: ElementId) -> IntersectionEntry {
        IntersectionEntry { id, intersecting: true }
    }

    fn leave(id: ElementId) -> IntersectionEntry {
        IntersectionEntry { id, intersecting: false }
    }

    #[test]
    fn visible_by_default_skips_observation() {
        for motion in [
            MotionPreference::Unknown,
            MotionPreference::Full,
            MotionPreference::Reduced,
        ] {
            let decision = MountDecision::decide(true, motion);
            assert_eq!(decision, MountDecision::VisibleByDefault);
            assert!(decision.initially_in_view());
        }
    }

    #[test]
    fn reduced_motion_shows_immediately() {
        let decision = MountDecision::decide(false, MotionPreference::Reduced);
        assert_eq!(decision, MountDecision::ReducedMotion);
        assert!(decision.initially_in_view());
    }

    #[test]
    fn full_motion_observes_hidden() {
        let decision = MountDecision::decide(false, MotionPreference::Full);
        assert_eq!(decision, MountDecision::Observe);
        assert!(!decision.initially_in_view());
        assert_eq!(
            MountDecision::decide(false, MotionPreference::Unknown),
            MountDecision::Defer
        );
    }

    #[test]
    fn once_element_stays_visible_after_leaving() {
        let mut registry = RevealRegistry::new();
        let id = ElementId::next();
        let (state, cb) = probe();
        registry.observe(id, true, cb);
        assert_eq!(state.get(), None);

        assert_eq!(registry.dispatch(enter(id)), DispatchOutcome::Retired);
        assert_eq!(state.get(), Some(true));
        assert!(!registry.contains(id));

        assert_eq!(registry.dispatch(leave(id)), DispatchOutcome::Ignored);
        assert_eq!(state.get(), Some(true));
    }

    #[test]
    fn repeatable_element_toggles() {
        let mut registry = RevealRegistry::new();
        let id = ElementId::next();
        let (state, cb) = probe();
        registry.observe(id, false, cb);

        assert_eq!(registry.dispatch(leave(id)), DispatchOutcome::Unchanged);
        assert_eq!(state.get(), None);
        assert_eq!(registry.dispatch(enter(id)), DispatchOutcome::Shown);
        assert_eq!(registry.dispatch(enter(id)), DispatchOutcome::Unchanged);
        assert_eq!(registry.dispatch(leave(id)), DispatchOutcome::Hidden);
        assert_eq!(state.get(), Some(false));
        assert_eq!(registry.in_view(id), Some(false));
    }

    #[test]
    fn unobserve_drops_callback() {
        let mut registry = RevealRegistry::new();
        let id = ElementId::next();
        let (state, cb) = probe();
        registry.observe(id, false, cb);
        assert!(registry.unobserve(id));
        assert!(!registry.unobserve(id));
        assert_eq!(registry.dispatch(enter(id)), DispatchOutcome::Ignored);
        assert_eq!(state.get(), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn dispatch_all_reports_retired() {
        let mut registry = RevealRegistry::new();
        let a = ElementId::next();
        let b = ElementId::next();
        registry.observe(a, true, |_| {});
        registry.observe(b, false, |_| {});
        let retired = registry.dispatch_all([enter(a), enter(b)]);
        assert_eq!(retired, vec![a]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reveal_all_shows_everything() {
        let mut registry = RevealRegistry::new();
        let id = ElementId::next();
        let (state, cb) = probe();
        registry.observe(id, false, cb);
        assert_eq!(registry.reveal_all(), vec![id]);
        assert_eq!(state.get(), Some(true));
        assert!(registry.is_empty());
    }

    #[test]
    fn root_margin_string() {
        assert_eq!(ObserverOptions::default().root_margin(), "0px 0px -10% 0px");
    }

    #[test]
    fn geometry_applies_threshold_and_margin() {
        let geometry = IntersectionGeometry::default();
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);

        // Trigger region ends at y = 900
        assert_eq!(geometry.trigger_region(viewport).height, 900.0);

        // 100px tall element, 15px inside the region: 15%
        let target = Rect::new(0.0, 885.0, 100.0, 100.0);
        assert!(!geometry.is_intersecting(target, viewport));

        // 25px inside: 25%
        let target = Rect::new(0.0, 875.0, 100.0, 100.0);
        assert!(geometry.is_intersecting(target, viewport));

        // Fully below the fold
        let target = Rect::new(0.0, 1200.0, 100.0, 100.0);
        assert_eq!(geometry.ratio(target, viewport), 0.0);
    }

    #[test]
    fn element_ids_are_unique() {
        let a = ElementId::next();
        let b = ElementId::next();
        assert_ne!(a, b);
    }
}
