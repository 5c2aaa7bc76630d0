//! Site-specific components.
//!
//! Generic building blocks live in `portfolio-ui`; these know about the
//! page layout, the host bridges or app-level context.

mod demo_card;
mod navbar;
mod project_card;
mod resume_dialog;
mod reveal;
mod section;
mod timeline;

pub use demo_card::DemoCard;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use resume_dialog::ResumeDialog;
pub use reveal::{Reveal, RevealHub};
pub use section::SectionWrapper;
pub use timeline::Timeline;
