//! Portfolio UI Components
//!
//! Dioxus building blocks shared by every section of the portfolio site.
//!
//! ## Design Notes
//!
//! - Cards and chips use translucent surfaces over the page gradient
//! - The accent color marks links, icons and interactive elements
//! - Motion is short (200ms ease-out) and always optional: anything animated
//!   here has a static rendering under reduced motion
//!
//! Class names match the stylesheet shipped by the application crate.

pub mod components;

pub use components::*;
