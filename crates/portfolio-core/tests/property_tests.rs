//! Property-based tests for the interaction state machines
//!
//! Uses proptest to check invariants over arbitrary phrase lists, watcher
//! report sequences and RNG seeds.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use portfolio_core::{
    DemoSimulator, ElementId, IntersectionEntry, LatencyPolicy, RevealRegistry, TypingConfig,
    TypingEffect, TypingPhase,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-empty list of short phrases
fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Z0-9 ]{1,20}").expect("valid regex"),
        1..6,
    )
}

/// Sequence of enter (true) / leave (false) reports
fn reports_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..40)
}

/// Time to run one full type/pause/delete pass over a phrase
fn cycle_time(phrase: &str, config: &TypingConfig) -> Duration {
    let n = phrase.chars().count() as u32;
    config.typing_speed * n + config.pause_duration + config.deleting_speed * n
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Displayed text is always a prefix of the current phrase
    #[test]
    fn displayed_is_prefix(phrases in phrases_strategy(), steps in 0usize..500) {
        let mut fx = TypingEffect::new(phrases, TypingConfig::default()).unwrap();
        for _ in 0..steps {
            fx.tick();
            prop_assert!(fx.current_phrase().starts_with(fx.displayed()));
            prop_assert!(fx.displayed().chars().count() <= fx.min_width_ch());
        }
    }

    /// One full cycle over every phrase returns to the starting state
    #[test]
    fn full_cycle_is_idempotent(phrases in phrases_strategy()) {
        let config = TypingConfig::default();
        let total: Duration = phrases.iter().map(|p| cycle_time(p, &config)).sum();
        let mut fx = TypingEffect::new(phrases, config).unwrap();

        for _ in 0..3 {
            fx.advance(total);
            prop_assert_eq!(fx.phrase_index(), 0);
            prop_assert_eq!(fx.displayed(), "");
            prop_assert_eq!(fx.phase(), TypingPhase::Typing);
        }
    }

    /// A `once` element, once shown, is shown for good
    #[test]
    fn once_never_rehides(reports in reports_strategy()) {
        let mut registry = RevealRegistry::new();
        let id = ElementId::next();
        let state = Rc::new(Cell::new(false));
        let sink = state.clone();
        registry.observe(id, true, move |v| sink.set(v));

        let mut seen_enter = false;
        for intersecting in reports {
            registry.dispatch(IntersectionEntry { id, intersecting });
            seen_enter |= intersecting;
            prop_assert_eq!(state.get(), seen_enter);
            prop_assert_eq!(registry.contains(id), !seen_enter);
        }
    }

    /// A repeatable element mirrors the last report
    #[test]
    fn repeatable_follows_last_report(reports in reports_strategy()) {
        let mut registry = RevealRegistry::new();
        let id = ElementId::next();
        let state = Rc::new(Cell::new(false));
        let sink = state.clone();
        registry.observe(id, false, move |v| sink.set(v));

        for intersecting in reports {
            registry.dispatch(IntersectionEntry { id, intersecting });
            prop_assert_eq!(state.get(), intersecting);
        }
        prop_assert!(registry.contains(id));
    }

    /// Every completed demo run lands inside the latency bound
    #[test]
    fn demo_latency_in_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sim = DemoSimulator::new(LatencyPolicy::default());
        let run = sim.run(&mut rng).unwrap();
        for (_, step) in run.remaining_steps() {
            sim.apply(&run, step);
        }
        let latency = sim.frame().latency_ms;
        prop_assert!((70..=119).contains(&latency));
        prop_assert!(!sim.is_running());
    }
}
