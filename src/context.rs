//! Context providers for the portfolio site.
//!
//! Content and settings are injected at launch; the motion preference and the
//! reveal hub are created by the root component.
//!
//! ## Usage
//!
//! ```ignore
//! // In any component
//! let portfolio = use_portfolio();
//! let motion = use_motion();
//! ```

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{MotionPreference, Portfolio};

use crate::components::RevealHub;
use crate::resume_file::ResumeDocument;

/// Startup settings taken from the command line
#[derive(Clone, Debug)]
pub struct SiteSettings {
    /// Skip reveal animations without asking the host
    pub force_reduced_motion: bool,
    /// Fallback timeout for the resume preview
    pub preview_timeout: Duration,
    /// Resume shown by the dialog
    pub resume: ResumeDocument,
}

/// Hook to access the site content.
pub fn use_portfolio() -> Arc<Portfolio> {
    use_context::<Arc<Portfolio>>()
}

pub fn use_settings() -> SiteSettings {
    use_context::<SiteSettings>()
}

/// Hook to read the user's animation preference.
///
/// Starts as [`MotionPreference::Unknown`] and is filled in once the host
/// answers the reduced-motion query.
pub fn use_motion() -> Signal<MotionPreference> {
    use_context::<Signal<MotionPreference>>()
}

/// Hook to access the shared reveal registry.
pub fn use_reveal_hub() -> RevealHub {
    use_context::<RevealHub>()
}
