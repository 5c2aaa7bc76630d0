//! Portfolio Core Library
//!
//! Content model and the interaction state machines behind the portfolio site.
//!
//! ## Overview
//!
//! Everything in this crate is free of any UI framework and free of any clock.
//! The site's interactive behaviors are modelled as small state machines that
//! the rendering layer drives with timers and browser signals:
//!
//! - [`reveal`] - reveal-on-scroll registry shared by every animated element
//! - [`typing`] - the looping type/pause/delete phrase animator
//! - [`resume`] - the resume preview dialog with its fallback timer
//! - [`demo`] - the fake API round trip on the landing card
//!
//! Static content lives in [`content`] and is loaded once at startup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Portfolio, TypingEffect, TypingConfig};
//!
//! let portfolio = Portfolio::builtin()?;
//! let (featured, rest) = portfolio.featured_split();
//!
//! let mut effect = TypingEffect::new(portfolio.hero.phrases.clone(), TypingConfig::default())?;
//! effect.tick();
//! println!("{}", effect.displayed());
//! ```

pub mod content;
pub mod demo;
pub mod error;
pub mod resume;
pub mod reveal;
pub mod typing;

// Re-exports
pub use content::{
    Education, EndDate, Experience, Hero, NavLink, PersonalInfo, Portfolio, Proficiency, Project,
    ProjectCategory, ProjectVariant, Skill, SkillCategory, SkillGroup, TechKind, TimelineEntry,
    NAV_LINKS,
};
pub use demo::{DemoFrame, DemoRun, DemoSimulator, DemoStep, LatencyPolicy, INITIAL_LATENCY_MS};
pub use error::{PortfolioError, PortfolioResult};
pub use resume::{
    PreviewFailure, PreviewState, RecoveryAction, ResumeAsset, ResumePreview, TimerToken,
    DEFAULT_PREVIEW_TIMEOUT,
};
pub use reveal::{
    DispatchOutcome, ElementId, IntersectionEntry, IntersectionGeometry, MotionPreference,
    MountDecision, ObserverOptions, Rect, RevealRegistry,
};
pub use typing::{TypingConfig, TypingEffect, TypingError, TypingPhase};
