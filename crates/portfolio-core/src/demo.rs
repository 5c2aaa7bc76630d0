//! Fake API round trip shown on the landing card.
//!
//! A run is a fixed schedule of [`DemoStep`]s. The host sleeps between
//! offsets and applies each step; steps from a superseded run are ignored.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;

/// Latency shown before the first run
pub const INITIAL_LATENCY_MS: u32 = 84;

/// Range the displayed latency is drawn from: `base + [0, spread)`,
/// clamped at `u32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyPolicy {
    pub base_ms: u32,
    pub spread_ms: u32,
}

impl Default for LatencyPolicy {
    fn default() -> Self {
        Self {
            base_ms: 70,
            spread_ms: 50,
        }
    }
}

impl LatencyPolicy {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.spread_ms == 0 {
            return self.base_ms;
        }
        self.base_ms
            .saturating_add(rng.random_range(0..self.spread_ms))
    }

    /// Every value [`sample`](Self::sample) can produce
    pub fn range(&self) -> RangeInclusive<u32> {
        self.base_ms..=self.base_ms.saturating_add(self.spread_ms.saturating_sub(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    /// Highlight the request, hide the old response
    Start,
    ShowProcessing,
    ClearHighlight,
    /// Hide processing, show the response with the new latency
    Respond,
    PulseTrace,
    EndPulse,
    /// Re-enable the run control
    Finish,
}

/// Offsets of each step from the start of a run
pub const SCHEDULE: &[(Duration, DemoStep)] = &[
    (Duration::from_millis(0), DemoStep::Start),
    (Duration::from_millis(200), DemoStep::ShowProcessing),
    (Duration::from_millis(400), DemoStep::ClearHighlight),
    (Duration::from_millis(600), DemoStep::Respond),
    (Duration::from_millis(800), DemoStep::PulseTrace),
    (Duration::from_millis(1200), DemoStep::EndPulse),
    (Duration::from_millis(1500), DemoStep::Finish),
];

/// Visual flags rendered by the demo card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoFrame {
    pub running: bool,
    pub highlight_request: bool,
    pub show_response: bool,
    pub show_processing: bool,
    pub animate_checkmark: bool,
    pub pulse_trace: bool,
    pub latency_ms: u32,
}

impl Default for DemoFrame {
    fn default() -> Self {
        Self {
            running: false,
            highlight_request: false,
            show_response: true,
            show_processing: false,
            animate_checkmark: false,
            pulse_trace: false,
            latency_ms: INITIAL_LATENCY_MS,
        }
    }
}

/// One triggered run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoRun {
    id: u64,
    latency_ms: u32,
}

impl DemoRun {
    /// Steps after [`DemoStep::Start`] paired with the wait since the previous step
    pub fn remaining_steps(&self) -> impl Iterator<Item = (Duration, DemoStep)> {
        SCHEDULE
            .windows(2)
            .map(|pair| (pair[1].0 - pair[0].0, pair[1].1))
    }

    pub fn latency_ms(&self) -> u32 {
        self.latency_ms
    }
}

#[derive(Debug, Clone, Default)]
pub struct DemoSimulator {
    frame: DemoFrame,
    policy: LatencyPolicy,
    current_run: u64,
}

impl DemoSimulator {
    pub fn new(policy: LatencyPolicy) -> Self {
        Self {
            frame: DemoFrame::default(),
            policy,
            current_run: 0,
        }
    }

    pub fn frame(&self) -> DemoFrame {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.frame.running
    }

    pub fn policy(&self) -> LatencyPolicy {
        self.policy
    }

    /// Start a run. Returns `None` while a run is already in flight.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<DemoRun> {
        if self.frame.running {
            tracing::debug!("Demo already running, ignoring trigger");
            return None;
        }
        self.current_run += 1;
        let run = DemoRun {
            id: self.current_run,
            latency_ms: self.policy.sample(rng),
        };
        self.apply(&run, DemoStep::Start);
        Some(run)
    }

    /// Apply a scheduled step. Returns false for steps of a stale run.
    pub fn apply(&mut self, run: &DemoRun, step: DemoStep) -> bool {
        if run.id != self.current_run {
            return false;
        }
        let f = &mut self.frame;
        match step {
            DemoStep::Start => {
                f.running = true;
                f.highlight_request = true;
                f.show_response = false;
                f.show_processing = false;
                f.animate_checkmark = false;
                f.pulse_trace = false;
            }
            DemoStep::ShowProcessing => f.show_processing = true,
            DemoStep::ClearHighlight => f.highlight_request = false,
            DemoStep::Respond => {
                f.show_processing = false;
                f.latency_ms = run.latency_ms;
                f.show_response = true;
                f.animate_checkmark = true;
            }
            DemoStep::PulseTrace => f.pulse_trace = true,
            DemoStep::EndPulse => f.pulse_trace = false,
            DemoStep::Finish => {
                f.running = false;
                f.animate_checkmark = false;
            }
        }
        true
    }

    /// Cancel any in-flight run and settle the frame, keeping the last latency
    pub fn reset(&mut self) {
        self.current_run += 1;
        self.frame = DemoFrame {
            latency_ms: self.frame.latency_ms,
            ..DemoFrame::default()
        };
    }
}
